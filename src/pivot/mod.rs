//! Pivot module
//!
//! Local highs and lows confirmed by a symmetric window, thinned so that
//! trendlines are drawn between well separated turning points.

mod detector;
mod filter;
mod types;

pub use detector::{detect_highs, detect_lows};
pub use filter::filter_by_distance;
pub use types::Pivot;
