//! TDX API smoke checker.
//!
//! Sweeps the fixed endpoint table against a running market-data API server
//! and exits non-zero if any endpoint fails.

use anyhow::Context;
use tdx_api_check::config::CheckConfig;
use tdx_api_check::endpoints::endpoint_table;
use tdx_api_check::report::run_sweep;
use tdx_api_client::{ClientConfig, TdxClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CheckConfig::from_env().context("loading configuration")?;
    let client = TdxClient::new(ClientConfig {
        base_url: config.base_url.clone(),
        timeout: config.timeout,
    })
    .context("building HTTP client")?;

    let endpoints = endpoint_table();
    info!(
        "Checking {} endpoints against {}",
        endpoints.len(),
        client.base_url()
    );

    let report = run_sweep(&client, &endpoints).await;
    report.print();

    std::process::exit(report.exit_code());
}
