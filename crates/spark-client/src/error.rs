//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when delivering a form submission.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to read the response body.
    #[error("Failed to read response: {0}")]
    ParseError(String),
}
