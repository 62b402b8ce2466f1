//! Pivot types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A confirmed local extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pivot {
    /// Position in the sorted bar sequence
    pub index: usize,
    /// The extremal high or low
    pub price: Decimal,
    pub time: NaiveDate,
}

impl Pivot {
    pub fn new(index: usize, price: Decimal, time: NaiveDate) -> Self {
        Self { index, price, time }
    }
}
