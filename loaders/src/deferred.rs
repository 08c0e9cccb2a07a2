//! Deferred values
//!
//! A [`Deferred`] is work that has already been started but not waited on.
//! Whoever holds it decides when to wait.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

use tokio::task::JoinHandle;

/// Handle to a load running on the tokio runtime
pub struct Deferred<T> {
    handle: JoinHandle<crate::Result<T>>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Start `future` now. Must be called from within a tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = crate::Result<T>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Wait for the value
    pub async fn resolve(self) -> crate::Result<T> {
        self.handle.await?
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the load. Resolving afterwards yields [`LoadError::Task`](crate::LoadError::Task).
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<T: Send + 'static> IntoFuture for Deferred<T> {
    type Output = crate::Result<T>;
    type IntoFuture = Pin<Box<dyn Future<Output = crate::Result<T>> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.resolve())
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}
