//! Sweep driver and summary reporting.

use crate::metric::extract_metric;
use tdx_api_client::{Endpoint, TdxClient};
use tracing::debug;


/// Aggregated outcome of one endpoint sweep.
///
/// Success and failure lines are kept in two buckets, each in table order,
/// and rendered successes-first the way the summary is printed.
#[derive(Debug, Default)]
pub struct Report {
    successes: Vec<String>,
    failures: Vec<String>,
}

impl Report {
    /// Success lines, in table order.
    #[must_use]
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Failure lines, in table order.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Whether every endpoint passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit code for this report: 0 if all passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Renders the human-readable summary.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("\n=== API endpoint test summary ===\n");
        for line in &self.successes {
            out.push_str(line);
            out.push('\n');
        }
        for line in &self.failures {
            out.push_str(line);
            out.push('\n');
        }

        if self.all_passed() {
            out.push_str(&format!("\nAll {} endpoints passed\n", self.successes.len()));
        } else {
            out.push_str(&format!(
                "\nPassed: {} | Failed: {}\n",
                self.successes.len(),
                self.failures.len()
            ));
        }

        out
    }

    /// Prints the summary to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    fn record_success(&mut self, name: &str, metric: Option<String>) {
        let line = match metric {
            Some(metric) => format!("[OK] {name}: {metric}"),
            None => format!("[OK] {name}"),
        };
        self.successes.push(line);
    }

    fn record_failure(&mut self, name: &str, error: &tdx_api_client::Error) {
        self.failures.push(format!("[FAIL] {name}: {error}"));
    }
}

/// Calls every endpoint in declared order and collects the outcomes.
///
/// Calls are strictly sequential; each endpoint's failure is recorded and
/// the sweep moves on. Every dispatch error kind is treated the same way
/// here — the distinction lives in [`tdx_api_client::Error`].
pub async fn run_sweep(client: &TdxClient, endpoints: &[Endpoint]) -> Report {
    let mut report = Report::default();

    for endpoint in endpoints {
        debug!(
            name = endpoint.name,
            method = %endpoint.method,
            path = endpoint.path,
            "checking endpoint"
        );

        match client.call(endpoint).await {
            Ok(payload) => report.record_success(endpoint.name, extract_metric(&payload)),
            Err(error) => report.record_failure(endpoint.name, &error),
        }
    }

    report
}
