//! History bridge

use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

use intralink_url::NormalizedUrl;

use crate::host::HistoryHost;

type PopHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Bridge between the interceptor and the host page's history stack.
pub struct HistoryBridge {
    host: Arc<dyn HistoryHost>,
    handler: Arc<RwLock<Option<PopHandler>>>,
}

impl HistoryBridge {
    pub fn new(host: Arc<dyn HistoryHost>) -> Self {
        Self {
            host,
            handler: Arc::new(RwLock::new(None)),
        }
    }

    /// URL the page currently shows.
    pub fn current_url(&self) -> Url {
        self.host.current_url()
    }

    /// Push a history entry for `target` unless it would be redundant.
    ///
    /// Same-document targets and targets equal to the current location are
    /// skipped so the back button never steps through duplicate entries.
    /// Returns whether an entry was pushed.
    pub fn push(&self, target: &NormalizedUrl) -> bool {
        if target.is_same_document || target.absolute == self.host.current_url() {
            tracing::debug!(url = %target.absolute, "Skipped redundant history push");
            return false;
        }

        self.host.push_state(&target.absolute);
        tracing::debug!(url = %target.absolute, "Pushed history entry");
        true
    }

    /// Start relaying popstate occurrences to `handler`.
    pub fn watch<F>(&self, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        *self.handler.write() = Some(Arc::new(handler));
    }

    /// Stop relaying. Safe to call when not watching.
    pub fn unwatch(&self) {
        *self.handler.write() = None;
    }

    pub fn is_watching(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Report a back/forward transition observed by the host.
    ///
    /// Dropped while not watching. The handler runs outside the registry
    /// lock, so it may call [`HistoryBridge::unwatch`] itself.
    pub fn handle_popstate(&self, url: &str) {
        let handler = self.handler.read().clone();
        match handler {
            Some(handler) => handler(url),
            None => tracing::debug!(url, "Ignored popstate while not watching"),
        }
    }
}

impl Clone for HistoryBridge {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            handler: Arc::clone(&self.handler),
        }
    }
}
