//! Headless walk-through of the interception engine.
//!
//! Installs the page-wide interceptor over an in-memory host, wires a toy
//! router through the adapter, and simulates the clicks a real page would
//! produce. Run with `RUST_LOG=debug` to watch every decision.

use parking_lot::Mutex;
use std::sync::Arc;
use url::Url;

use intralink_core::{
    connect_router, init_logging, install_shared, on, page, start, HistoryHost, LinkClick,
    MemoryHost, Router, StartOptions, VISIT,
};

struct LoggingRouter {
    routes: Mutex<Vec<String>>,
}

impl Router for LoggingRouter {
    fn push(&self, url: &str) {
        tracing::info!(url, "Router rendering route");
        self.routes.lock().push(url.to_string());
    }
}

fn main() {
    init_logging();

    let origin = match Url::parse("https://demo.test/") {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "Bad demo origin");
            return;
        }
    };

    let host = Arc::new(MemoryHost::new(origin));
    let interceptor = install_shared(host.clone());

    let _visit_sub = on(VISIT, |event| {
        tracing::info!(url = %event.url, from_history = event.from_history, "Visited");
    });

    let router = Arc::new(LoggingRouter {
        routes: Mutex::new(Vec::new()),
    });
    connect_router(interceptor, router.clone());

    start(StartOptions::default());

    // Simulated page: a couple of plain clicks, plus the clicks the engine
    // must leave alone.
    page_click(LinkClick::plain("/features"));
    page_click(LinkClick::plain("/pricing"));
    page_click(LinkClick::plain("https://github.test/intralink")); // external
    page_click(LinkClick {
        meta_key: true,
        ..LinkClick::plain("/docs")
    }); // cmd-click opens a new tab
    page_click(LinkClick {
        has_download: true,
        ..LinkClick::plain("/release.tar.gz")
    });

    // Back button: the host moves the stack, the glue reports the popstate.
    if let Some(previous) = host.back() {
        interceptor.handle_popstate(previous.as_str());
    }

    tracing::info!(
        history_len = host.history_len(),
        current = %host.current_url(),
        routes_rendered = router.routes.lock().len(),
        custom_events = host.recorded_events().len(),
        "Demo finished"
    );
}

fn page_click(click: LinkClick) {
    if let Some(interceptor) = page() {
        interceptor.visit_click(&click);
    }
}
