//! Batch result types

use crate::signal::{SignalDetails, SignalKind, SignalVerdict};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An actionable verdict attributed to an instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    pub symbol: String,
    pub signal: SignalKind,
    /// Date of the bar that produced the signal
    pub date: NaiveDate,
    /// Day the scan ran
    pub generated_on: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub details: SignalDetails,
}

impl SignalRecord {
    /// Build from a BUY or SELL verdict; other verdicts carry no record
    pub fn from_verdict(
        symbol: impl Into<String>,
        verdict: SignalVerdict,
        generated_on: NaiveDate,
    ) -> Option<Self> {
        if !verdict.is_actionable() {
            return None;
        }
        Some(Self {
            symbol: symbol.into(),
            signal: verdict.signal,
            date: verdict.date?,
            generated_on,
            price: verdict.price?,
            details: verdict.details?,
        })
    }
}

/// Outcome of analyzing every instrument once
#[derive(Debug, Default)]
pub struct BatchReport {
    pub buy_signals: Vec<SignalRecord>,
    pub sell_signals: Vec<SignalRecord>,
    pub neutral: Vec<String>,
    pub insufficient: Vec<String>,
    /// Instruments that could not be analyzed
    pub failed: Vec<String>,
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of instruments that produced a verdict
    pub fn processed(&self) -> usize {
        self.buy_signals.len() + self.sell_signals.len() + self.neutral.len() + self.insufficient.len()
    }

    pub(crate) fn record(&mut self, symbol: String, verdict: SignalVerdict, generated_on: NaiveDate) {
        match verdict.signal {
            SignalKind::Neutral => self.neutral.push(symbol),
            SignalKind::InsufficientData => self.insufficient.push(symbol),
            SignalKind::Buy | SignalKind::Sell => {
                let kind = verdict.signal;
                match SignalRecord::from_verdict(symbol.clone(), verdict, generated_on) {
                    Some(record) if kind == SignalKind::Buy => self.buy_signals.push(record),
                    Some(record) => self.sell_signals.push(record),
                    None => self.failed.push(symbol),
                }
            }
        }
    }

    /// Order every list by symbol so output does not depend on task timing
    pub(crate) fn sort(&mut self) {
        self.buy_signals.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        self.sell_signals.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        self.neutral.sort();
        self.insufficient.sort();
        self.failed.sort();
    }

    /// Log the end-of-scan summary
    pub fn log_summary(&self) {
        tracing::info!(
            processed = self.processed(),
            errors = self.failed.len(),
            duration_secs = %format!("{:.2}", self.elapsed.as_secs_f64()),
            buy = self.buy_signals.len(),
            sell = self.sell_signals.len(),
            neutral = self.neutral.len(),
            insufficient = self.insufficient.len(),
            "Signal analysis complete"
        );

        for record in self.buy_signals.iter().chain(&self.sell_signals) {
            tracing::info!(
                signal = %record.signal,
                symbol = %record.symbol,
                price = %record.price,
                rsi = %format!("{}/{}", record.details.rsi_fast(), record.details.rsi_slow()),
                "Signal"
            );
        }
    }
}
