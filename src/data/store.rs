//! Signals database
//!
//! A single JSON document holding the latest BUY/SELL lists and a short
//! rolling history of scan summaries.

use super::types::DataError;
use crate::batch::{BatchReport, SignalRecord};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Compact symbol/price pair kept in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&SignalRecord> for SignalSummary {
    fn from(record: &SignalRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            price: record.price,
        }
    }
}

/// One scan's summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub buy_count: usize,
    pub sell_count: usize,
    pub buy_signals: Vec<SignalSummary>,
    pub sell_signals: Vec<SignalSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalsDatabase {
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_buy_signals: Vec<SignalRecord>,
    #[serde(default)]
    pub current_sell_signals: Vec<SignalRecord>,
    #[serde(default)]
    pub signal_history: Vec<HistoryEntry>,
}

impl SignalsDatabase {
    /// Read the database at `path`
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Read the database, starting fresh if it is missing or unreadable
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No signals database yet, starting empty");
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(database) => database,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load signals database, starting empty");
                Self::default()
            }
        }
    }

    /// Write pretty-printed JSON, creating the parent directory if needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DataError> {
        let path = path.as_ref();
        let io_error = |source| DataError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(io_error)?;

        tracing::info!(path = %path.display(), "Signals database saved");
        Ok(())
    }

    /// Replace the current lists with a scan's results and append its
    /// summary, keeping at most `history_limit` entries
    pub fn apply_report(&mut self, report: &BatchReport, now: DateTime<Utc>, history_limit: usize) {
        self.last_updated = Some(now);
        self.current_buy_signals = report.buy_signals.clone();
        self.current_sell_signals = report.sell_signals.clone();

        self.signal_history.push(HistoryEntry {
            date: now.date_naive(),
            buy_count: report.buy_signals.len(),
            sell_count: report.sell_signals.len(),
            buy_signals: report.buy_signals.iter().map(SignalSummary::from).collect(),
            sell_signals: report.sell_signals.iter().map(SignalSummary::from).collect(),
        });

        let excess = self.signal_history.len().saturating_sub(history_limit);
        self.signal_history.drain(..excess);
    }
}
