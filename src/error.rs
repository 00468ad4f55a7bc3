//! Error types for the Europeana client library.

use thiserror::Error;

/// The main error type for all Europeana client operations.
#[derive(Error, Debug)]
pub enum EuropeanaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request parameter failed client-side validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API answered with a non-2xx HTTP status
    #[error("{code}: {reason}")]
    Status {
        /// Numeric HTTP status code
        code: u16,
        /// Canonical reason phrase for the status code
        reason: String,
    },

    /// The API reported a failure in an otherwise well-formed response body
    #[error("{message}")]
    Api {
        /// The `error` field text returned by the API
        message: String,
    },
}

impl EuropeanaError {
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            code: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }
}

/// Validation errors for search request parameters.
///
/// Raised synchronously at request construction or mutation time; an invalid
/// parameter never reaches the network layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Reusability value outside the accepted set
    #[error("{value:?} is not a valid reusability filter (expected open, restricted or permission)")]
    InvalidReusability {
        /// The rejected value
        value: String,
    },

    /// Profile value outside the accepted set
    #[error("{value:?} is not a valid profile (expected minimal, standard or rich)")]
    InvalidProfile {
        /// The rejected value
        value: String,
    },

    /// Pagination parameter that does not parse as a base-10 integer
    #[error("{field} must be an integer, got {value:?}")]
    PaginationNotAnInteger {
        /// Parameter name ("rows" or "start")
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Pagination parameter below its minimum
    #[error("{field} can't be < {min}, got {value}")]
    PaginationOutOfRange {
        /// Parameter name ("rows" or "start")
        field: &'static str,
        /// Smallest accepted value
        min: i64,
        /// The rejected value
        value: i64,
    },
}
