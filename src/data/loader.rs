//! Organized daily dataset loader
//!
//! Reads the flat JSON array of `{symbol, time, open, high, low, close, volume}`
//! records, coerces loosely typed numbers and date tokens, and groups the
//! result per symbol. A symbol with any unusable record is rejected as a whole
//! so one bad row never poisons the rest of the batch.

use super::types::{Bar, DataError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A numeric field as it appears in the dataset: a JSON number or a string
/// that may carry thousands separators
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    fn as_text(&self) -> String {
        match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s.trim().replace(',', ""),
        }
    }
}

/// One record of the organized dataset
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub symbol: Option<String>,
    pub time: String,
    #[serde(default)]
    pub open: Option<RawNumber>,
    #[serde(default)]
    pub high: Option<RawNumber>,
    #[serde(default)]
    pub low: Option<RawNumber>,
    #[serde(default)]
    pub close: Option<RawNumber>,
    #[serde(default)]
    pub volume: Option<RawNumber>,
}

impl RawRecord {
    /// Coerce into a typed bar
    pub fn to_bar(&self) -> Result<Bar, DataError> {
        Ok(Bar {
            time: parse_bar_date(&self.time)?,
            open: parse_decimal("open", self.open.as_ref())?,
            high: parse_decimal("high", self.high.as_ref())?,
            low: parse_decimal("low", self.low.as_ref())?,
            close: parse_decimal("close", self.close.as_ref())?,
            volume: parse_volume(self.volume.as_ref())?,
        })
    }
}

/// A symbol dropped during loading
#[derive(Debug)]
pub struct RejectedInstrument {
    pub symbol: String,
    pub error: DataError,
}

/// Bars grouped per symbol, plus the symbols that could not be coerced
#[derive(Debug, Default)]
pub struct LoadedData {
    pub instruments: BTreeMap<String, Vec<Bar>>,
    pub rejected: Vec<RejectedInstrument>,
}

impl LoadedData {
    /// Number of loaded instruments
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// True when no instrument survived loading
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

/// Read raw records from a JSON file
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, DataError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content)
}

/// Parse raw records from JSON text
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Load and group the dataset at `path`
pub fn load_dataset(path: impl AsRef<Path>) -> Result<LoadedData, DataError> {
    let records = read_records(path)?;
    let data = group_by_symbol(records);
    tracing::info!(
        instruments = data.len(),
        rejected = data.rejected.len(),
        "Loaded price history"
    );
    Ok(data)
}

/// Group records per symbol, coercing each into a bar
///
/// Records without a symbol are skipped. Bar order inside a symbol follows
/// file order; the engine sorts on its own.
pub fn group_by_symbol(records: Vec<RawRecord>) -> LoadedData {
    let mut grouped: BTreeMap<String, Vec<RawRecord>> = BTreeMap::new();
    for record in records {
        let Some(symbol) = record
            .symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
        else {
            continue;
        };
        grouped.entry(symbol).or_default().push(record);
    }

    let mut data = LoadedData::default();
    for (symbol, records) in grouped {
        match records
            .iter()
            .map(RawRecord::to_bar)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(bars) => {
                data.instruments.insert(symbol, bars);
            }
            Err(error) => {
                tracing::warn!(%symbol, %error, "Rejecting instrument with malformed history");
                data.rejected.push(RejectedInstrument { symbol, error });
            }
        }
    }
    data
}

/// Parse a price field, stripping thousands separators
pub fn parse_decimal(field: &'static str, raw: Option<&RawNumber>) -> Result<Decimal, DataError> {
    let text = raw.map(RawNumber::as_text).unwrap_or_default();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| DataError::InvalidNumber { field, value: text })
}

/// Parse a volume field; fractional volumes are truncated
///
/// A record without a volume loads as zero volume. Only a volume that is
/// present and unparseable is an error.
pub fn parse_volume(raw: Option<&RawNumber>) -> Result<u64, DataError> {
    let Some(raw) = raw else {
        return Ok(0);
    };
    let text = raw.as_text();
    let value = text
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| DataError::InvalidVolume(text.clone()))?;
    value
        .trunc()
        .to_u64()
        .ok_or(DataError::InvalidVolume(text))
}

/// Parse a date token such as `2024_01_15`, `2024-01-15`, `2024/01/15` or an
/// RFC 3339 timestamp
pub fn parse_bar_date(token: &str) -> Result<NaiveDate, DataError> {
    let normalized = token.trim().replace(['_', '/'], "-");

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S") {
        return Ok(ts.date());
    }
    Err(DataError::InvalidDate(token.to_string()))
}
