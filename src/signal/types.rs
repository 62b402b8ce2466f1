//! Signal types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Verdict classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
    /// History too short for the configured periods; no opinion
    InsufficientData,
    Neutral,
    Buy,
    Sell,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SignalKind::InsufficientData => "INSUFFICIENT_DATA",
            SignalKind::Neutral => "NEUTRAL",
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
        };
        f.write_str(label)
    }
}

/// Supporting metrics for a verdict
///
/// Values are rounded to two decimal places and serialize as decimal
/// strings. Strength is `None` only when the projected line sits at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum SignalDetails {
    /// Close crossed above a descending line through pivot highs
    Breakout {
        rsi_fast: Decimal,
        rsi_slow: Decimal,
        downtrend_price: Decimal,
        breakout_strength: Option<Decimal>,
    },
    /// Close crossed below an ascending line through pivot lows
    Breakdown {
        rsi_fast: Decimal,
        rsi_slow: Decimal,
        uptrend_price: Decimal,
        breakdown_strength: Option<Decimal>,
    },
    Neutral {
        rsi_fast: Decimal,
        rsi_slow: Decimal,
        rsi_bullish: bool,
        rsi_bearish: bool,
    },
}

impl SignalDetails {
    pub fn rsi_fast(&self) -> Decimal {
        match self {
            SignalDetails::Breakout { rsi_fast, .. }
            | SignalDetails::Breakdown { rsi_fast, .. }
            | SignalDetails::Neutral { rsi_fast, .. } => *rsi_fast,
        }
    }

    pub fn rsi_slow(&self) -> Decimal {
        match self {
            SignalDetails::Breakout { rsi_slow, .. }
            | SignalDetails::Breakdown { rsi_slow, .. }
            | SignalDetails::Neutral { rsi_slow, .. } => *rsi_slow,
        }
    }
}

/// Result of one analysis call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalVerdict {
    pub signal: SignalKind,
    /// Date of the latest bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Close of the latest bar, as a JSON number
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub details: Option<SignalDetails>,
}

impl SignalVerdict {
    /// Verdict for a history too short to analyze
    pub fn insufficient_data() -> Self {
        Self {
            signal: SignalKind::InsufficientData,
            date: None,
            price: None,
            details: None,
        }
    }

    /// Verdict for a fully analyzed history
    pub fn new(signal: SignalKind, date: NaiveDate, price: Decimal, details: SignalDetails) -> Self {
        Self {
            signal,
            date: Some(date),
            price: Some(price),
            details: Some(details),
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self.signal, SignalKind::Buy | SignalKind::Sell)
    }
}
