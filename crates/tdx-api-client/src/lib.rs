//! HTTP client library for the TDX market-data API.
//!
//! This crate provides the request side of the API smoke checker: endpoint
//! descriptors, a thin client over [`reqwest`], and the standard response
//! envelope contract (`{"code": 0, ...}`) used by every endpoint except the
//! health check.
//!
//! # Example
//!
//! ```no_run
//! use tdx_api_client::{ClientConfig, Endpoint, TdxClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tdx_api_client::Error> {
//!     let client = TdxClient::new(ClientConfig {
//!         base_url: "http://127.0.0.1:8080".into(),
//!         timeout: Duration::from_secs(25),
//!     })?;
//!
//!     let payload = client
//!         .call(&Endpoint::get("quote", "/api/quote?code=000001"))
//!         .await?;
//!     println!("{payload}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, TdxClient};
pub use error::Error;
pub use types::{Endpoint, Method, ResponseCheck};
