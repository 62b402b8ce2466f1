//! Signal generation module
//!
//! Turns one instrument's daily history into a BUY/SELL/NEUTRAL verdict

mod engine;
mod types;

pub use engine::{analyze, diagnose, Diagnostics};
pub use types::{SignalDetails, SignalKind, SignalVerdict};
