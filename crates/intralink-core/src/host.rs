//! Page host capabilities

use parking_lot::RwLock;
use serde_json::Value;
use url::Url;

use intralink_events::EventHost;
use intralink_history::HistoryHost;

/// Everything the interceptor needs from the embedding page.
///
/// A browser embedding implements this over `location`, `history` and
/// `document`; [`MemoryHost`] implements it in memory for tests and
/// headless use.
pub trait PageHost: HistoryHost + EventHost {}

impl<T: HistoryHost + EventHost> PageHost for T {}

/// In-memory page host.
///
/// Keeps the current URL plus a back stack, records custom events instead
/// of raising them on a document, and can simulate the back button.
pub struct MemoryHost {
    current: RwLock<Url>,
    back_stack: RwLock<Vec<Url>>,
    events: RwLock<Vec<(String, Value)>>,
}

impl MemoryHost {
    pub fn new(initial: Url) -> Self {
        Self {
            current: RwLock::new(initial),
            back_stack: RwLock::new(Vec::new()),
            events: RwLock::new(Vec::new()),
        }
    }

    /// Simulate the back button: restore the previous entry and return the
    /// new current URL, or `None` when there is nothing to go back to.
    ///
    /// Like a real browser this only moves the stack; the caller is the one
    /// who reports the popstate to the interceptor.
    pub fn back(&self) -> Option<Url> {
        let previous = self.back_stack.write().pop()?;
        *self.current.write() = previous.clone();
        Some(previous)
    }

    /// Number of entries on the history stack, current one included.
    pub fn history_len(&self) -> usize {
        self.back_stack.read().len() + 1
    }

    /// Custom events recorded so far.
    pub fn recorded_events(&self) -> Vec<(String, Value)> {
        self.events.read().clone()
    }
}

impl HistoryHost for MemoryHost {
    fn current_url(&self) -> Url {
        self.current.read().clone()
    }

    fn push_state(&self, url: &Url) {
        let mut current = self.current.write();
        self.back_stack.write().push(current.clone());
        *current = url.clone();
    }
}

impl EventHost for MemoryHost {
    fn emit_custom_event(&self, name: &str, detail: Value) {
        tracing::debug!(name, "Recorded custom event");
        self.events.write().push((name.to_string(), detail));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let host = MemoryHost::new(Url::parse("https://x.test/a").unwrap());
        assert_eq!(host.history_len(), 1);

        host.push_state(&Url::parse("https://x.test/b").unwrap());
        host.push_state(&Url::parse("https://x.test/c").unwrap());
        assert_eq!(host.history_len(), 3);
        assert_eq!(host.current_url().as_str(), "https://x.test/c");

        let back = host.back().unwrap();
        assert_eq!(back.as_str(), "https://x.test/b");
        assert_eq!(host.current_url().as_str(), "https://x.test/b");
        assert_eq!(host.history_len(), 2);
    }

    #[test]
    fn test_back_on_empty_stack() {
        let host = MemoryHost::new(Url::parse("https://x.test/a").unwrap());
        assert!(host.back().is_none());
        assert_eq!(host.current_url().as_str(), "https://x.test/a");
    }
}
