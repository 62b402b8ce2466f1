//! pivot-signals: daily equity signal scanner
//!
//! This library provides the core components for:
//! - Dual-period RSI momentum and bias classification
//! - Pivot high/low detection and distance filtering
//! - Trendline projection through pivot pairs
//! - BUY/SELL/NEUTRAL verdicts on trendline breaks
//! - Concurrent batch analysis and the signals database
//! - Logging and metrics

pub mod batch;
pub mod cli;
pub mod config;
pub mod data;
pub mod momentum;
pub mod pivot;
pub mod signal;
pub mod telemetry;
pub mod trendline;

#[cfg(test)]
mod test_util;
