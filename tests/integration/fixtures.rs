//! Synthetic price histories

use chrono::{Days, NaiveDate};
use pivot_signals::data::Bar;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset as u64)
}

fn sideways(len: usize) -> Vec<Bar> {
    (0..len)
        .map(|i| {
            let close = if i % 2 == 0 { dec!(86) } else { dec!(87) };
            Bar::new(day(i), close, dec!(91), dec!(84), close, 5_000)
        })
        .collect()
}

/// Lower highs at bars 20 and 40, closes crossing the line at the last bar
pub fn breakout() -> Vec<Bar> {
    let mut bars = sideways(70);
    bars[20].high = dec!(100);
    bars[40].high = dec!(96);
    bars[68].close = dec!(89.9);
    bars[69].close = dec!(95);
    bars[69].high = dec!(95.5);
    bars
}

/// Higher lows at bars 20 and 40, closes crossing the line at the last bar
pub fn breakdown() -> Vec<Bar> {
    let mut bars = sideways(70);
    bars[20].low = dec!(75);
    bars[40].low = dec!(79);
    bars[68].close = dec!(85.1);
    bars[69].close = dec!(80);
    bars[69].low = dec!(79.5);
    bars
}

pub fn rising(len: usize) -> Vec<Bar> {
    (0..len)
        .map(|i| {
            let close = Decimal::from(200 + i);
            Bar::new(day(i), close, close + dec!(1), close - dec!(1), close, 1_000)
        })
        .collect()
}

/// Render bars as organized dataset records, with underscore dates and
/// string prices as the upstream dataset has them
pub fn to_records(symbol: &str, bars: &[Bar]) -> Vec<serde_json::Value> {
    bars.iter()
        .map(|bar| {
            serde_json::json!({
                "symbol": symbol,
                "time": bar.time.format("%Y_%m_%d").to_string(),
                "open": bar.open.to_string(),
                "high": bar.high.to_string(),
                "low": bar.low.to_string(),
                "close": bar.close.to_string(),
                "volume": format!("{},000", bar.volume / 1_000),
            })
        })
        .collect()
}
