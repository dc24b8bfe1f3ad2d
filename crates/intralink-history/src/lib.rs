//! Intralink History Integration
//!
//! Wraps the host page's history stack: pushes entries for intercepted
//! navigations and relays back/forward transitions while watching. The
//! bridge never dispatches visit notifications itself; that is the
//! interceptor's job.

mod bridge;
mod host;

pub use bridge::HistoryBridge;
pub use host::HistoryHost;
