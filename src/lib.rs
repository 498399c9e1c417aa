//! # TDX API Check - Market-Data API Smoke Checker
//!
//! A smoke-test harness for a locally running TDX market-data HTTP API.
//! It sweeps a fixed list of endpoints once, in order, verifies that each
//! response is well-formed, and prints a pass/fail summary whose exit code
//! reflects overall success.
//!
//! Every endpoint except `/api/health` is expected to answer with the
//! standard envelope `{"code": 0, "message": ..., "data": ...}`; the health
//! check may return any valid JSON. Successful responses are additionally
//! probed for a count-like metric (`count=`, `Count=`, `total=`, `items=`)
//! to make the summary more informative.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Runtime configuration from the environment |
//! | [`endpoints`] | The fixed endpoint table |
//! | [`metric`] | Best-effort metric extraction from payloads |
//! | [`report`] | Sweep driver and summary reporting |
//!
//! The request side lives in the `tdx-api-client` crate: endpoint
//! descriptors, the `reqwest`-based client, and the envelope contract.
//!
//! ## Example Usage
//!
//! ```bash
//! # Sweep the default server at http://127.0.0.1:8080
//! cargo run
//!
//! # Against another host, with a shorter timeout
//! API_BASE_URL=http://192.168.1.10:8080 API_CHECK_TIMEOUT_SECS=5 cargo run
//! ```
//!
//! Exit code is `0` when every endpoint passed, `1` otherwise.

pub mod config;
pub mod endpoints;
pub mod metric;
pub mod report;
