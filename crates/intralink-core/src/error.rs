//! Core error types
//!
//! These never cross the public surface; `visit()` degrades every failure
//! to "not intercepted" so the caller's default navigation keeps working.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("URL error: {0}")]
    Url(#[from] intralink_url::UrlError),

    #[error("External target: {0}")]
    External(String),

    #[error("Interceptor not started")]
    NotStarted,
}
