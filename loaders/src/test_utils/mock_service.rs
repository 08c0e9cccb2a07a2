//! Mock feeds service
//!
//! Serves canned responses keyed by (percent-decoded) request path and records
//! every raw path it was asked for.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::client::FeedsClient;

/// Canned response for one path
#[derive(Clone)]
pub struct MockResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    delay: Option<Duration>,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            content_type: "text/plain",
            ..Self::json(body)
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = StatusCode::from_u16(status).unwrap();
        self
    }

    pub fn with_delay_ms(mut self, millis: u64) -> Self {
        self.delay = Some(Duration::from_millis(millis));
        self
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<String, MockResponse>>,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct MockFeedsService {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    server: JoinHandle<()>,
}

impl MockFeedsService {
    /// Bind to an ephemeral local port and start serving `routes`
    pub async fn start(routes: Vec<(&str, MockResponse)>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(path, response)| (path.to_string(), response))
                    .collect(),
            ),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(respond).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            requests,
            server,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every path requested so far, percent-decoded, in arrival order
    pub fn requested_paths(&self) -> Vec<String> {
        self.raw_requested_paths()
            .iter()
            .map(|raw| decode_path(raw))
            .collect()
    }

    /// Every path requested so far, exactly as it arrived on the wire
    pub fn raw_requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockFeedsService {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn respond(State(state): State<MockState>, uri: Uri) -> Response {
    state.requests.lock().unwrap().push(uri.path().to_string());
    let path = decode_path(uri.path());

    let Some(canned) = state.routes.get(&path).cloned() else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        canned.status,
        [(header::CONTENT_TYPE, canned.content_type)],
        canned.body,
    )
        .into_response()
}

fn decode_path(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Base URL of a local port with nothing listening on it
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Client for talking to a mock service, bypassing any proxy set in the environment
pub fn test_client(base_url: &str) -> FeedsClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    FeedsClient::with_client(http, base_url)
}
