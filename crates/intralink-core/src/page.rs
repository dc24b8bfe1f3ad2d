//! Page-level singleton
//!
//! The original consumer surface: one interceptor per page and
//! module-level `start` / `visit` / `on`. Code that needs isolation builds
//! its own [`Interceptor`] instead; this is only a thin default wrapper.

use std::sync::OnceLock;

use intralink_events::{Subscription, VisitEvent};

use crate::host::PageHost;
use crate::interceptor::{Interceptor, StartOptions};

static PAGE: OnceLock<Interceptor> = OnceLock::new();

/// Install the page-wide interceptor over `host`.
///
/// The first call wins and the instance lives for the rest of the process;
/// later calls keep the existing instance and log a warning.
pub fn install<H>(host: H) -> &'static Interceptor
where
    H: PageHost + 'static,
{
    install_shared(std::sync::Arc::new(host))
}

/// Like [`install`], for a host the caller keeps a handle to.
pub fn install_shared<H>(host: std::sync::Arc<H>) -> &'static Interceptor
where
    H: PageHost + 'static,
{
    let mut fresh = false;
    let interceptor = PAGE.get_or_init(|| {
        fresh = true;
        Interceptor::with_shared_host(host)
    });

    if !fresh {
        tracing::warn!("Page interceptor already installed; keeping the existing host");
    }

    interceptor
}

/// The installed page-wide interceptor, if any.
pub fn page() -> Option<&'static Interceptor> {
    PAGE.get()
}

/// Start the page-wide interceptor. Logged no-op when none is installed.
pub fn start(options: StartOptions) {
    match page() {
        Some(interceptor) => interceptor.start(options),
        None => tracing::warn!("start() without an installed page interceptor"),
    }
}

/// Stop the page-wide interceptor. Logged no-op when none is installed.
pub fn stop() {
    match page() {
        Some(interceptor) => interceptor.stop(),
        None => tracing::warn!("stop() without an installed page interceptor"),
    }
}

/// Navigate the page-wide interceptor to `raw`.
pub fn visit(raw: &str) {
    match page() {
        Some(interceptor) => interceptor.visit(raw),
        None => tracing::warn!(raw, "visit() without an installed page interceptor"),
    }
}

/// Subscribe on the page-wide interceptor. `None` when none is installed.
pub fn on<F>(event: &str, callback: F) -> Option<Subscription>
where
    F: Fn(&VisitEvent) + Send + Sync + 'static,
{
    page().map(|interceptor| interceptor.on(event, callback))
}
