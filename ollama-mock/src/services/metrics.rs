//! Prometheus exposition for the mock.
//!
//! HTTP request metrics come from `service_core::middleware::metrics`; this
//! module installs the recorder they are written to and adds the generate
//! counter.

use crate::services::extractor::MatchSource;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;
use tokio::task::JoinHandle;

/// How often buffered histogram samples are folded into their summaries.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

pub static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the global Prometheus recorder. Safe to call more than once; only
/// the first call installs anything.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            tracing::info!("Prometheus metrics initialized");
            Some(handle)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    });
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .and_then(Option::as_ref)
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Drain buffered histogram samples into the recorder's summaries.
///
/// Samples recorded through the handle are only folded when this or
/// [`get_metrics`] runs, so an unscraped server needs it called periodically.
pub fn run_upkeep() {
    if let Some(handle) = METRICS_HANDLE.get().and_then(Option::as_ref) {
        handle.run_upkeep();
    }
}

/// Run [`run_upkeep`] every `period` on the current runtime.
pub fn spawn_upkeep(period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            run_upkeep();
        }
    })
}

/// Count a generate call by the extractor rule that produced the word.
pub fn record_generation(source: MatchSource) {
    counter!("ollama_mock_generate_requests_total", "source" => source.as_str()).increment(1);
}
