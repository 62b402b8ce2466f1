//! Configuration types for pivot-signals

use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Signal engine parameters
///
/// Passed by value into every analysis call; nothing in the engine holds on
/// to it between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Fast RSI period
    #[serde(default = "default_rsi_fast_period", alias = "rsiFastPeriod")]
    pub rsi_fast_period: usize,

    /// Slow RSI period
    #[serde(default = "default_rsi_slow_period", alias = "rsiSlowPeriod")]
    pub rsi_slow_period: usize,

    /// Bars on each side that a pivot must dominate
    #[serde(default = "default_pivot_lookback", alias = "pivotLookback")]
    pub pivot_lookback: usize,

    /// Minimum bar distance between kept pivots
    #[serde(default = "default_min_pivot_distance", alias = "minPivotDistance")]
    pub min_pivot_distance: usize,
}

fn default_rsi_fast_period() -> usize {
    21
}
fn default_rsi_slow_period() -> usize {
    55
}
fn default_pivot_lookback() -> usize {
    5
}
fn default_min_pivot_distance() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_fast_period: 21,
            rsi_slow_period: 55,
            pivot_lookback: 5,
            min_pivot_distance: 10,
        }
    }
}

impl EngineConfig {
    /// Shortest history the engine will analyze
    pub fn minimum_bars(&self) -> usize {
        self.rsi_slow_period.max(self.pivot_lookback * 2) + 10
    }
}

/// Dataset and signals database locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Organized daily OHLCV dataset (JSON array)
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Signals database written after each scan
    #[serde(default = "default_signals_path")]
    pub signals_path: PathBuf,

    /// Number of scan summaries kept in the history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Instruments analyzed at the same time
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("./public/organized_nepse_data.json")
}
fn default_signals_path() -> PathBuf {
    PathBuf::from("./public/signals-database.json")
}
fn default_history_limit() -> usize {
    30
}
fn default_max_concurrent() -> usize {
    8
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            signals_path: default_signals_path(),
            history_limit: 30,
            max_concurrent: 8,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Prometheus text file written after each scan
    #[serde(default)]
    pub metrics_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_path: None,
        }
    }
}

/// Invalid configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero periods, lookbacks, distances and limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("engine.rsi_fast_period", self.engine.rsi_fast_period),
            ("engine.rsi_slow_period", self.engine.rsi_slow_period),
            ("engine.pivot_lookback", self.engine.pivot_lookback),
            ("engine.min_pivot_distance", self.engine.min_pivot_distance),
            ("data.history_limit", self.data.history_limit),
            ("data.max_concurrent", self.data.max_concurrent),
        ];

        match checks.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::NotPositive(*name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [engine]
            rsi_fast_period = 14
            rsi_slow_period = 50
            pivot_lookback = 3
            min_pivot_distance = 8

            [data]
            input_path = "./data/organized.json"
            signals_path = "./data/signals.json"
            history_limit = 10
            max_concurrent = 2

            [telemetry]
            log_level = "debug"
            log_format = "json"
            metrics_path = "./data/signals.prom"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.engine.rsi_fast_period, 14);
        assert_eq!(config.engine.minimum_bars(), 60);
        assert_eq!(config.data.history_limit, 10);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert!(config.telemetry.metrics_path.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.data.history_limit, 30);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.telemetry.metrics_path.is_none());
    }

    #[test]
    fn test_partial_engine_section() {
        let config: Config = toml::from_str("[engine]\npivot_lookback = 7\n").unwrap();
        assert_eq!(config.engine.pivot_lookback, 7);
        assert_eq!(config.engine.rsi_slow_period, 55);
    }

    #[test]
    fn test_camel_case_aliases() {
        let toml = r#"
            [engine]
            rsiFastPeriod = 9
            rsiSlowPeriod = 34
            pivotLookback = 4
            minPivotDistance = 6
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.engine,
            EngineConfig {
                rsi_fast_period: 9,
                rsi_slow_period: 34,
                pivot_lookback: 4,
                min_pivot_distance: 6,
            }
        );
    }

    #[test]
    fn test_default_minimum_bars() {
        assert_eq!(EngineConfig::default().minimum_bars(), 65);
    }

    #[test]
    fn test_minimum_bars_lookback_dominates() {
        let engine = EngineConfig {
            rsi_slow_period: 8,
            pivot_lookback: 6,
            ..EngineConfig::default()
        };
        assert_eq!(engine.minimum_bars(), 22);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let mut config = Config::default();
        config.engine.min_pivot_distance = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("engine.min_pivot_distance"))
        );
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }
}
