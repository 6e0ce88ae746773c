//! Site access error types.

use crate::extract::ParseError;

/// Errors from fetching or extracting a site page.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The page does not exist (stale route or stop reference)
    #[error("page not found: {0}")]
    NotFound(String),

    /// Site returned a non-success status
    #[error("site error {status}: {message}")]
    Api { status: u16, message: String },

    /// Page was fetched but could not be extracted
    #[error("extraction failed: {0}")]
    Parse(#[from] ParseError),
}
