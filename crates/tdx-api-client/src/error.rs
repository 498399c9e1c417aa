//! Error types for the TDX API client.

use serde_json::Value;
use thiserror::Error;


/// Client error types.
///
/// The four variants keep the failure origins apart — transport, HTTP
/// status, JSON parse, envelope contract — even though the checker renders
/// them all the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text, if any.
        message: String,
    },

    /// Response body is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body is valid JSON but does not match the standard
    /// `{"code": 0, ...}` envelope.
    #[error("unexpected response body: {payload}")]
    UnexpectedBody {
        /// The full parsed payload.
        payload: Value,
    },
}
