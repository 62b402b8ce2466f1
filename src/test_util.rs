//! Bar builders shared by unit tests

use crate::data::Bar;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset as u64)
}

pub fn bar(index: usize, high: Decimal, low: Decimal, close: Decimal) -> Bar {
    Bar::new(day(index), close, high, low, close, 1_000)
}

/// Bars whose open, high, low and close all equal the given close
pub fn bars_from_closes(closes: &[Decimal]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| bar(i, *close, *close, *close))
        .collect()
}

/// Bars from separate high and low sequences with a neutral close
pub fn bars_from_extremes(highs: &[Decimal], lows: &[Decimal]) -> Vec<Bar> {
    highs
        .iter()
        .zip(lows)
        .enumerate()
        .map(|(i, (high, low))| bar(i, *high, *low, (*high + *low) / dec!(2)))
        .collect()
}

/// Closes alternating 86/87 under a flat 91 high and 84 low
fn sideways(len: usize) -> Vec<Bar> {
    (0..len)
        .map(|i| {
            let close = if i % 2 == 0 { dec!(86) } else { dec!(87) };
            bar(i, dec!(91), dec!(84), close)
        })
        .collect()
}

/// Lower highs at bars 20 (100) and 40 (96); the line projects to 90.2 at
/// bar 69 and the last two closes cross it from 89.9 to 95
pub fn breakout_series() -> Vec<Bar> {
    let mut bars = sideways(70);
    bars[20].high = dec!(100);
    bars[40].high = dec!(96);
    bars[68].close = dec!(89.9);
    bars[69].close = dec!(95);
    bars[69].high = dec!(95.5);
    bars
}

/// Higher lows at bars 20 (75) and 40 (79); the line projects to 84.8 at
/// bar 69 and the last two closes cross it from 85.1 to 80
pub fn breakdown_series() -> Vec<Bar> {
    let mut bars = sideways(70);
    bars[20].low = dec!(75);
    bars[40].low = dec!(79);
    bars[68].close = dec!(85.1);
    bars[69].close = dec!(80);
    bars[69].low = dec!(79.5);
    bars
}
