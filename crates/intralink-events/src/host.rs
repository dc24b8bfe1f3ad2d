//! Host event capability

use serde_json::Value;

/// Minimal capability the dispatcher needs from the embedding page.
///
/// A browser embedding raises a `CustomEvent` on the document; an
/// in-memory host records the calls instead.
pub trait EventHost: Send + Sync {
    fn emit_custom_event(&self, name: &str, detail: Value);
}
