//! Prometheus metrics
//!
//! Recorded through the `metrics` facade. A scan is a short-lived process, so
//! instead of serving an endpoint the rendered exposition text is written to a
//! file for a textfile collector to pick up.

use crate::signal::SignalKind;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::path::Path;
use std::time::Duration;

const INSTRUMENTS_TOTAL: &str = "signals_instruments_total";
const SCAN_DURATION: &str = "signals_scan_duration_seconds";
const ANALYSIS_DURATION: &str = "signals_analysis_duration_seconds";

/// Outcome of one instrument in a scan
#[derive(Debug, Clone, Copy)]
pub enum ScanOutcome {
    Signal(SignalKind),
    /// History could not be coerced or the analysis task failed
    Failed,
}

impl ScanOutcome {
    fn label(&self) -> &'static str {
        match self {
            ScanOutcome::Signal(SignalKind::Buy) => "buy",
            ScanOutcome::Signal(SignalKind::Sell) => "sell",
            ScanOutcome::Signal(SignalKind::Neutral) => "neutral",
            ScanOutcome::Signal(SignalKind::InsufficientData) => "insufficient_data",
            ScanOutcome::Failed => "failed",
        }
    }
}

/// Install the Prometheus recorder
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))
}

/// Count one instrument outcome
pub fn record_outcome(outcome: ScanOutcome) {
    ::metrics::counter!(INSTRUMENTS_TOTAL, "outcome" => outcome.label()).increment(1);
}

/// Record time spent analyzing a single instrument
pub fn record_analysis(duration: Duration) {
    ::metrics::histogram!(ANALYSIS_DURATION).record(duration.as_secs_f64());
}

/// Record wall time of a whole scan
pub fn record_scan(duration: Duration) {
    ::metrics::histogram!(SCAN_DURATION).record(duration.as_secs_f64());
}

/// Write the current exposition text to `path`
pub fn write_metrics(handle: &PrometheusHandle, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, handle.render())?;
    tracing::debug!(path = %path.display(), "Wrote metrics");
    Ok(())
}
