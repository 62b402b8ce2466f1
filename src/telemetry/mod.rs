//! Telemetry module
//!
//! Logging and metrics

mod logging;
mod metrics;

pub use self::logging::{init_logging, LogFormat};
pub use self::metrics::{
    init_metrics, record_analysis, record_outcome, record_scan, write_metrics, ScanOutcome,
};

use crate::config::TelemetryConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;

/// Holds the metrics handle for flushing at the end of a run
pub struct TelemetryGuard {
    metrics: Option<(PrometheusHandle, PathBuf)>,
}

impl TelemetryGuard {
    /// Write metrics to the configured file, if any
    pub fn flush(&self) -> anyhow::Result<()> {
        if let Some((handle, path)) = &self.metrics {
            write_metrics(handle, path)?;
        }
        Ok(())
    }
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    let metrics = match &config.metrics_path {
        Some(path) => Some((init_metrics()?, path.clone())),
        None => None,
    };

    Ok(TelemetryGuard { metrics })
}
