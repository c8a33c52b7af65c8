//! Error types for client operations

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, MultiverseClientError>;

/// Errors that can occur during client operations
#[derive(Error, Debug)]
pub enum MultiverseClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// No location with the requested id
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Requested page does not exist
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Id was not a number
    #[error("Bad parameter: {0}")]
    BadParam(String),

    /// Id list was malformed
    #[error("Bad array: {0}")]
    BadArray(String),

    /// Server returned an unclassified error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl MultiverseClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }
}
