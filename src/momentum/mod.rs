//! Momentum module
//!
//! Dual-period RSI used to classify bullish or bearish bias before any
//! trendline break is considered.

mod rsi;
mod types;

pub use rsi::{compute, last_crossovers};
pub use types::{Crossovers, MomentumBias, MomentumSeries};
