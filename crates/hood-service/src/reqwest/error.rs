//! Error types for the reqwest-based clients.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for reqwest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reqwest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The remote service answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl From<Error> for crate::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    crate::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    crate::Error::network_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else if e.is_decode() {
                    crate::Error::serialization()
                        .with_message("Invalid response body")
                        .with_source(e)
                } else {
                    crate::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Status { status, body } => {
                let kind = match status {
                    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                        crate::ErrorKind::Authentication
                    }
                    StatusCode::TOO_MANY_REQUESTS => crate::ErrorKind::RateLimited,
                    _ => crate::ErrorKind::ExternalError,
                };

                crate::Error::new(kind).with_message(format!("{status}: {body}"))
            }
        }
    }
}
