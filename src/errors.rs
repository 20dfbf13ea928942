//! Error types for Fusion API operations.

use thiserror::Error;

/// Errors that can occur while requesting a token or running a search.
///
/// Every failure is delivered through the same `Result` path as success;
/// exactly one variant fires per failed call.
#[derive(Debug, Error)]
pub enum FusionApiError {
    /// The assembled request string did not parse as a URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The request string that failed to parse
        url: String,
        /// The reason parsing failed
        reason: String,
    },

    /// Transport-layer failure before a response body was available.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The server response carried no body at all.
    #[error("Server response did not include any data")]
    EmptyResponse,

    /// The response body was not JSON, or not a JSON object.
    #[error("Could not decode JSON response: {reason}")]
    InvalidJson {
        /// The reason decoding failed
        reason: String,
    },

    /// The decoded response object lacked a required field.
    #[error("Response field '{field}' missing or mistyped")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },
}
