//! Pivot detection over a symmetric lookback window

use super::types::Pivot;
use crate::data::Bar;
use rust_decimal::Decimal;

/// Find bars whose high is strictly above every high within `lookback`
/// bars on either side
pub fn detect_highs(bars: &[Bar], lookback: usize) -> Vec<Pivot> {
    detect(bars, lookback, |bar| bar.high, |candidate, other| candidate > other)
}

/// Find bars whose low is strictly below every low within `lookback` bars
/// on either side
pub fn detect_lows(bars: &[Bar], lookback: usize) -> Vec<Pivot> {
    detect(bars, lookback, |bar| bar.low, |candidate, other| candidate < other)
}

fn detect<P, B>(bars: &[Bar], lookback: usize, price: P, beats: B) -> Vec<Pivot>
where
    P: Fn(&Bar) -> Decimal,
    B: Fn(Decimal, Decimal) -> bool,
{
    // Bars within `lookback` of either end never have a full window
    if bars.len() <= lookback * 2 {
        return Vec::new();
    }

    (lookback..bars.len() - lookback)
        .filter_map(|i| {
            let candidate = price(&bars[i]);
            let left = &bars[i - lookback..i];
            let right = &bars[i + 1..=i + lookback];

            let confirmed = left.iter().all(|b| beats(candidate, price(b)))
                && right.iter().all(|b| beats(candidate, price(b)));

            confirmed.then(|| Pivot::new(i, candidate, bars[i].time))
        })
        .collect()
}
