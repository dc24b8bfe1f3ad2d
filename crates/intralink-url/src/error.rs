//! URL error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UrlError {
    #[error("Empty link target")]
    Empty,

    #[error("Malformed URL {0:?}: {1}")]
    Malformed(String, url::ParseError),
}
