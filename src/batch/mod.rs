//! Batch module
//!
//! Runs the signal engine across all instruments and aggregates the results

mod analyzer;
mod types;

pub use analyzer::BatchAnalyzer;
pub use types::{BatchReport, SignalRecord};
