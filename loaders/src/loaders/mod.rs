//! The route loaders and the data they hand to the view
//!
//! The two loaders differ on purpose: the layout loader waits for its data,
//! the page loader returns as soon as the request is started.

mod layout;
mod page;

pub use layout::{LayoutData, LayoutLoader};
pub use page::{PageData, PageLoader, ResolvedPageData};
