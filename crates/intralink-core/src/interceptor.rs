//! Link interceptor
//!
//! The orchestrator: composes the URL normalizer, history bridge and visit
//! dispatcher, and guarantees exactly one visit notification per
//! intercepted navigation. Nothing panics or errors across its public
//! boundary; every failure degrades to "not intercepted" with a log line,
//! so the caller's default navigation fallback keeps working.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use intralink_events::{Dispatcher, Subscription, VisitEvent, VisitOrigin, VISIT};
use intralink_history::HistoryBridge;
use intralink_url::normalize;

use crate::click::LinkClick;
use crate::error::CoreError;
use crate::host::PageHost;
use crate::Result;

/// Options accepted by [`Interceptor::start`].
#[derive(Debug, Clone)]
pub struct StartOptions {
    /// Relay the host's back/forward transitions as visit events
    pub watch_history: bool,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            watch_history: true,
        }
    }
}

/// The interception engine. Cheap to clone; clones share state.
///
/// Instances are independent, so libraries and tests can build their own;
/// the page-level singleton in [`crate::page`] is a thin wrapper over one.
pub struct Interceptor {
    bridge: HistoryBridge,
    dispatcher: Dispatcher,
    started: Arc<AtomicBool>,
    last_visited: Arc<RwLock<Option<String>>>,
}

impl Interceptor {
    /// Build an idle interceptor over `host`.
    pub fn new<H>(host: H) -> Self
    where
        H: PageHost + 'static,
    {
        Self::with_shared_host(Arc::new(host))
    }

    /// Build an idle interceptor over an already shared host.
    pub fn with_shared_host<H>(host: Arc<H>) -> Self
    where
        H: PageHost + 'static,
    {
        Self {
            bridge: HistoryBridge::new(host.clone()),
            dispatcher: Dispatcher::new(host),
            started: Arc::new(AtomicBool::new(false)),
            last_visited: Arc::new(RwLock::new(None)),
        }
    }

    /// Begin intercepting.
    ///
    /// Calling `start` on a started interceptor is a logged no-op, so the
    /// popstate relay is never registered twice. When watching, a reported
    /// popstate dispatches `from_history = true` without touching the
    /// history stack again; the browser already moved it.
    pub fn start(&self, options: StartOptions) {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!("Interceptor already started; ignoring start()");
            return;
        }

        if options.watch_history {
            let this = self.clone();
            self.bridge.watch(move |url| this.popstate_visit(url));
        }

        tracing::info!(watch_history = options.watch_history, "Interceptor started");
    }

    /// Stop intercepting: drops the popstate relay and every subscriber.
    /// Idempotent.
    pub fn stop(&self) {
        if !self.started.swap(false, Ordering::SeqCst) {
            return;
        }

        self.bridge.unwatch();
        self.dispatcher.clear();
        *self.last_visited.write() = None;
        tracing::info!("Interceptor stopped");
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn is_watching_history(&self) -> bool {
        self.bridge.is_watching()
    }

    /// Register a subscriber; see [`VISIT`] for the visit notification.
    pub fn on<F>(&self, event: &str, callback: F) -> Subscription
    where
        F: Fn(&VisitEvent) + Send + Sync + 'static,
    {
        self.dispatcher.on(event, callback)
    }

    /// Navigate to `raw`.
    ///
    /// Before `start()` this is a logged no-op. Malformed and external
    /// targets are passed through untouched: nothing is pushed and nothing
    /// is dispatched, leaving default browser navigation to the caller.
    /// Targets equal to the current location still dispatch (idempotent
    /// re-navigation) but skip the history push.
    pub fn visit(&self, raw: &str) {
        match self.try_visit(raw, VisitOrigin::Core, true) {
            Ok(()) => {}
            Err(CoreError::NotStarted) => {
                tracing::debug!(raw, "visit() before start(); ignoring");
            }
            Err(e) => {
                tracing::debug!(raw, error = %e, "Left navigation to the browser");
            }
        }
    }

    /// Handle a described anchor click.
    ///
    /// Applies the eligibility policy against the current location first;
    /// ineligible clicks (modifier keys, new-tab targets, downloads,
    /// external or malformed hrefs) are left to the browser entirely.
    pub fn visit_click(&self, click: &LinkClick) {
        if !click.is_interceptable(&self.bridge.current_url()) {
            tracing::debug!(?click, "Click not eligible for interception");
            return;
        }

        if let Some(href) = click.href.as_deref() {
            self.visit(href);
        }
    }

    /// Report a popstate observed by the embedding glue.
    pub fn handle_popstate(&self, url: &str) {
        self.bridge.handle_popstate(url);
    }

    /// Last URL a visit event was dispatched for.
    pub fn last_visited(&self) -> Option<String> {
        self.last_visited.read().clone()
    }

    /// A navigation the attached router performed itself. Dispatches tagged
    /// [`VisitOrigin::Router`] and leaves the history stack alone; the
    /// router owns the entry for its own navigations.
    pub(crate) fn router_visit(&self, raw: &str) {
        if let Err(e) = self.try_visit(raw, VisitOrigin::Router, false) {
            tracing::debug!(raw, error = %e, "Ignored router navigation");
        }
    }

    fn try_visit(&self, raw: &str, origin: VisitOrigin, push: bool) -> Result<()> {
        if !self.is_started() {
            return Err(CoreError::NotStarted);
        }

        let base = self.bridge.current_url();
        let target = normalize(raw, &base)?;
        if !target.is_internal {
            return Err(CoreError::External(target.absolute.to_string()));
        }

        if push {
            // The bridge skips same-document and same-location targets on
            // its own; the notification below happens either way.
            self.bridge.push(&target);
        }

        self.dispatch_visit(target.as_str(), false, origin);
        Ok(())
    }

    fn popstate_visit(&self, url: &str) {
        let base = self.bridge.current_url();
        match normalize(url, &base) {
            Ok(target) => self.dispatch_visit(target.as_str(), true, VisitOrigin::Core),
            Err(e) => tracing::warn!(url, error = %e, "Ignored popstate with unusable URL"),
        }
    }

    fn dispatch_visit(&self, url: &str, from_history: bool, origin: VisitOrigin) {
        *self.last_visited.write() = Some(url.to_string());

        let event = VisitEvent {
            url: url.to_string(),
            from_history,
            origin,
        };

        tracing::debug!(url, from_history, "Dispatching visit");
        self.dispatcher.emit(VISIT, &event);
    }
}

impl Clone for Interceptor {
    fn clone(&self) -> Self {
        Self {
            bridge: self.bridge.clone(),
            dispatcher: self.dispatcher.clone(),
            started: Arc::clone(&self.started),
            last_visited: Arc::clone(&self.last_visited),
        }
    }
}
