//! Momentum series types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// RSI values aligned to the tail of the bar sequence they were computed on
///
/// The first `period` bars are warm-up and carry no value, so
/// `values()[0]` belongs to bar index `period`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomentumSeries {
    period: usize,
    values: Vec<Decimal>,
}

impl MomentumSeries {
    pub(crate) fn new(period: usize, values: Vec<Decimal>) -> Self {
        Self { period, values }
    }

    /// Lookback period the series was computed with
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bar index of the first value
    pub fn first_bar_index(&self) -> usize {
        self.period
    }

    /// One past the bar index of the last value
    pub fn end_bar_index(&self) -> usize {
        self.period + self.values.len()
    }

    /// Most recent value
    pub fn latest(&self) -> Option<Decimal> {
        self.values.last().copied()
    }

    /// Value for the bar at `bar_index`, if it lies past the warm-up window
    pub fn at_bar(&self, bar_index: usize) -> Option<Decimal> {
        bar_index
            .checked_sub(self.period)
            .and_then(|i| self.values.get(i).copied())
    }
}

/// Relationship between the fast and slow oscillators at the latest bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentumBias {
    /// Fast above slow
    Bullish,
    /// Fast below slow
    Bearish,
    /// Exactly equal; neither direction is tested
    Flat,
}

impl MomentumBias {
    /// Classify from the latest fast and slow values
    pub fn classify(fast: Decimal, slow: Decimal) -> Self {
        match fast.cmp(&slow) {
            std::cmp::Ordering::Greater => MomentumBias::Bullish,
            std::cmp::Ordering::Less => MomentumBias::Bearish,
            std::cmp::Ordering::Equal => MomentumBias::Flat,
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, MomentumBias::Bullish)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, MomentumBias::Bearish)
    }
}

/// Most recent fast/slow crossings, as bar indices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crossovers {
    pub last_cross_up: Option<usize>,
    pub last_cross_down: Option<usize>,
}
