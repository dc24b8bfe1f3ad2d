//! Intralink Core
//!
//! The link interception engine: decides which navigations to hijack away
//! from full-page loads, keeps the host history stack consistent, and
//! notifies subscribers exactly once per navigation intent. All page
//! capabilities sit behind [`PageHost`], so the engine runs unmodified
//! against a real document or an in-memory test host.

mod click;
mod error;
mod host;
mod interceptor;
mod page;
mod router;

pub use click::LinkClick;
pub use error::CoreError;
pub use host::{MemoryHost, PageHost};
pub use interceptor::{Interceptor, StartOptions};
pub use page::{install, install_shared, on, page, start, stop, visit};
pub use router::{connect_router, Router};

// Re-export the pieces consumers need alongside the interceptor.
pub use intralink_events::{
    Dispatcher, EventHost, Subscription, VisitEvent, VisitOrigin, DOM_VISIT_EVENT, VISIT,
};
pub use intralink_history::{HistoryBridge, HistoryHost};
pub use intralink_url::{normalize, NormalizedUrl, UrlError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
