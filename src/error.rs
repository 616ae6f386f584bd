//! Error types for the Memescan client

use thiserror::Error;

/// Result type alias for the Memescan client
pub type Result<T> = std::result::Result<T, Error>;

/// Memescan client errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport error raised by a non-HTTP transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP error (connect failure, non-success status, undecodable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status reported by the service, if the failure carried one
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
