//! HTTP client for the TDX market-data API.

use crate::error::Error;
use crate::types::{Endpoint, Method, ResponseCheck};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://127.0.0.1:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(25),
        }
    }
}

/// HTTP client for the TDX market-data API.
#[derive(Debug, Clone)]
pub struct TdxClient {
    client: Client,
    base_url: String,
}

impl TdxClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues the request described by `endpoint` and returns the parsed
    /// response payload.
    ///
    /// For [`ResponseCheck::Envelope`] endpoints the payload must be a JSON
    /// object whose `code` field equals `0`; [`ResponseCheck::None`]
    /// endpoints accept any valid JSON. There are no retries — the first
    /// failure of any kind is the call's outcome.
    ///
    /// # Errors
    /// Returns error on transport failure, error status, invalid JSON, or
    /// an envelope that fails the check.
    pub async fn call(&self, endpoint: &Endpoint) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, endpoint.path);

        let request = match endpoint.method {
            Method::Get => self.client.get(&url),
            Method::Post => {
                let request = self.client.post(&url);
                match &endpoint.body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };

        let resp = request.send().await?;
        let payload = self.handle_response(resp).await?;

        match endpoint.check {
            ResponseCheck::None => Ok(payload),
            ResponseCheck::Envelope => {
                if envelope_code(&payload) == Some(0) {
                    Ok(payload)
                } else {
                    Err(Error::UnexpectedBody { payload })
                }
            }
        }
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

/// Reads the `code` field of the standard response envelope.
fn envelope_code(payload: &Value) -> Option<i64> {
    payload.as_object()?.get("code")?.as_i64()
}
