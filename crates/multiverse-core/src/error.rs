//! Error types for location queries and dataset loading

use thiserror::Error;

/// Result type for location queries
pub type LocationResult<T> = Result<T, LocationError>;

/// Message for a numeric id with no matching record
pub const NO_LOCATION: &str = "Location not found";
/// Message for a single id that is not a number
pub const BAD_PARAM: &str = "Hey! that parameter is not allowed, try with a number instead ;)";
/// Message for a malformed id list
pub const BAD_ARRAY: &str = "Bad... bad array :/";
/// Message for a page past the end of the results
pub const NO_PAGE: &str = "There is nothing here";

/// Errors a location query can produce.
///
/// The `Display` output of every variant is exactly its classification
/// message, so clients can match on a stable substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Single numeric id with no matching record
    #[error("{}", NO_LOCATION)]
    NotFound(u64),

    /// Single id that is not a plain run of digits
    #[error("{}", BAD_PARAM)]
    BadParam(String),

    /// Id list with unbalanced brackets, empty or non-numeric tokens
    #[error("{}", BAD_ARRAY)]
    BadArray(String),

    /// Requested page does not exist for the current filter
    #[error("{}", NO_PAGE)]
    NoPage(String),
}

impl LocationError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            LocationError::NotFound(_) => 404,
            LocationError::NoPage(_) => 404,
            LocationError::BadParam(_) => 500,
            LocationError::BadArray(_) => 500,
        }
    }

    /// Short machine name of the classification, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            LocationError::NotFound(_) => "no_location",
            LocationError::BadParam(_) => "bad_param",
            LocationError::BadArray(_) => "bad_array",
            LocationError::NoPage(_) => "no_page",
        }
    }
}

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate location id: {0}")]
    DuplicateId(u32),

    /// Ids must run 1..=N without gaps
    #[error("Location ids are not contiguous: expected {expected}, found {found}")]
    NonContiguous { expected: u32, found: u32 },

    #[error("Location {id} has an invalid created timestamp: {value}")]
    InvalidTimestamp { id: u32, value: String },
}
