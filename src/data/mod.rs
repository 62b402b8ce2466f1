//! Data module
//!
//! Price history ingestion and the signals database

mod loader;
mod store;
mod types;

pub use loader::{
    group_by_symbol, load_dataset, parse_bar_date, parse_decimal, parse_records, parse_volume,
    read_records, LoadedData, RawNumber, RawRecord, RejectedInstrument,
};
pub use store::{HistoryEntry, SignalSummary, SignalsDatabase};
pub use types::{Bar, DataError};
