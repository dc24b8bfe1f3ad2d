//! Host history capability

use url::Url;

/// Minimal capability the bridge needs from the embedding page.
pub trait HistoryHost: Send + Sync {
    /// URL the page currently shows.
    fn current_url(&self) -> Url;

    /// Append a history entry for `url` without reloading the document.
    fn push_state(&self, url: &Url);
}
