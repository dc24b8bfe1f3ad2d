//! Link target normalization

use url::Url;

use crate::error::UrlError;
use crate::Result;

/// A resolved link target, classified relative to the page it was resolved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Absolute form of the target
    pub absolute: Url,
    /// Target shares the page's origin
    pub is_internal: bool,
    /// Target differs from the page at most in its fragment
    pub is_same_document: bool,
}

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        self.absolute.as_str()
    }
}

/// Resolve a raw href against the current document's URL.
///
/// Relative references are joined onto `base`. The result is internal when
/// its origin matches `base`, and same-document when origin, path and query
/// all match so only the fragment may differ.
pub fn normalize(raw: &str, base: &Url) -> Result<NormalizedUrl> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let absolute = base
        .join(raw)
        .map_err(|e| UrlError::Malformed(raw.to_string(), e))?;

    // Opaque-origin schemes (mailto:, data:, javascript:) never equal an
    // http(s) origin, so they classify as external here.
    let is_internal = absolute.origin() == base.origin();
    let is_same_document =
        is_internal && absolute.path() == base.path() && absolute.query() == base.query();

    Ok(NormalizedUrl {
        absolute,
        is_internal,
        is_same_document,
    })
}
