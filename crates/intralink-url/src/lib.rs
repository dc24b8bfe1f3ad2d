//! Intralink URL Normalization
//!
//! Resolves raw link targets against the page's current URL and classifies
//! them as internal/external and same-document. No side effects; the rest
//! of the workspace treats any error here as "do not intercept".

mod error;
mod normalize;

pub use error::UrlError;
pub use normalize::{normalize, NormalizedUrl};

pub type Result<T> = std::result::Result<T, UrlError>;
