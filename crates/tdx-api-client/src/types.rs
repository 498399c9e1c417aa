//! Endpoint descriptors for the TDX market-data API.

use serde::{Deserialize, Serialize};
use serde_json::Value;


/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Validation applied to a parsed response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCheck {
    /// Body must be a JSON object with `"code": 0`.
    Envelope,
    /// Any valid JSON body is accepted.
    None,
}

/// One HTTP call to exercise against the API.
///
/// Descriptors are trusted static configuration: `path` carries the query
/// string verbatim and `name` is the key under which the outcome is
/// reported.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Report key, unique within the table.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Relative URL path, including the query string.
    pub path: &'static str,
    /// JSON request body, for POST endpoints that need one.
    pub body: Option<Value>,
    /// Response body validation.
    pub check: ResponseCheck,
}

impl Endpoint {
    /// Creates a GET endpoint checked against the standard envelope.
    #[must_use]
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::Get,
            path,
            body: None,
            check: ResponseCheck::Envelope,
        }
    }

    /// Creates a POST endpoint with a JSON body, checked against the
    /// standard envelope.
    #[must_use]
    pub fn post(name: &'static str, path: &'static str, body: Value) -> Self {
        Self {
            name,
            method: Method::Post,
            path,
            body: Some(body),
            check: ResponseCheck::Envelope,
        }
    }

    /// Creates a GET endpoint whose response schema is allowed to diverge
    /// from the standard envelope.
    #[must_use]
    pub const fn get_raw(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: Method::Get,
            path,
            body: None,
            check: ResponseCheck::None,
        }
    }
}
