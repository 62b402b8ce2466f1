//! RSI bias plus pivot trendline break detection
//!
//! Each call is self-contained: bars are sorted, both oscillators and both
//! pivot sets are rebuilt, and the latest bar is tested against the line
//! through the two most recent filtered pivots. BUY is tested before SELL,
//! though the bias classification makes both firing on one bar impossible.

use super::types::{SignalDetails, SignalKind, SignalVerdict};
use crate::config::EngineConfig;
use crate::data::Bar;
use crate::momentum::{self, Crossovers, MomentumBias, MomentumSeries};
use crate::pivot::{detect_highs, detect_lows, filter_by_distance, Pivot};
use crate::trendline::Trendline;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Filtered pivots retained per side; only the last two form the trendline
const RECENT_PIVOTS: usize = 3;

/// Fast and slow oscillators with their latest reading
struct MomentumReading {
    fast: MomentumSeries,
    slow: MomentumSeries,
    fast_latest: Decimal,
    slow_latest: Decimal,
    bias: MomentumBias,
}

impl MomentumReading {
    fn compute(bars: &[Bar], config: &EngineConfig) -> Option<Self> {
        let fast = momentum::compute(bars, config.rsi_fast_period)?;
        let slow = momentum::compute(bars, config.rsi_slow_period)?;
        let fast_latest = fast.latest()?;
        let slow_latest = slow.latest()?;

        Some(Self {
            bias: MomentumBias::classify(fast_latest, slow_latest),
            fast,
            slow,
            fast_latest,
            slow_latest,
        })
    }
}

/// Most recent filtered pivots on each side
struct RecentPivots {
    highs: Vec<Pivot>,
    lows: Vec<Pivot>,
}

impl RecentPivots {
    fn detect(bars: &[Bar], config: &EngineConfig) -> Self {
        let highs = filter_by_distance(
            &detect_highs(bars, config.pivot_lookback),
            config.min_pivot_distance,
        );
        let lows = filter_by_distance(
            &detect_lows(bars, config.pivot_lookback),
            config.min_pivot_distance,
        );

        Self {
            highs: tail(highs, RECENT_PIVOTS),
            lows: tail(lows, RECENT_PIVOTS),
        }
    }
}

fn tail(mut pivots: Vec<Pivot>, n: usize) -> Vec<Pivot> {
    let skip = pivots.len().saturating_sub(n);
    pivots.drain(..skip);
    pivots
}

fn sorted(bars: &[Bar]) -> Vec<Bar> {
    let mut data = bars.to_vec();
    data.sort_by_key(|bar| bar.time);
    data
}

/// Analyze one instrument's history
///
/// Input may be in any order. Returns `InsufficientData` when fewer than
/// [`EngineConfig::minimum_bars`] bars are supplied or either oscillator is
/// undefined.
pub fn analyze(bars: &[Bar], config: &EngineConfig) -> SignalVerdict {
    let data = sorted(bars);
    if data.len() < config.minimum_bars() {
        return SignalVerdict::insufficient_data();
    }

    let Some(reading) = MomentumReading::compute(&data, config) else {
        return SignalVerdict::insufficient_data();
    };
    let pivots = RecentPivots::detect(&data, config);

    if reading.bias.is_bullish() {
        if let Some(verdict) = breakout(&data, &reading, &pivots.highs) {
            return verdict;
        }
    }

    if reading.bias.is_bearish() {
        if let Some(verdict) = breakdown(&data, &reading, &pivots.lows) {
            return verdict;
        }
    }

    neutral(&data, &reading)
}

/// Close crossing up through a line of lower highs
fn breakout(data: &[Bar], reading: &MomentumReading, highs: &[Pivot]) -> Option<SignalVerdict> {
    let line = Trendline::from_latest(highs)?;
    if !line.is_descending() {
        return None;
    }

    let (previous, current) = last_two(data)?;
    let downtrend_price = line.price_at(data.len() - 1);
    if !(current.close > downtrend_price && previous.close <= downtrend_price) {
        return None;
    }

    let strength = percent_of(current.close - downtrend_price, downtrend_price);
    tracing::debug!(
        date = %current.time,
        close = %current.close,
        %downtrend_price,
        pivot_from = line.start.index,
        pivot_to = line.end.index,
        "Trendline breakout"
    );

    Some(SignalVerdict::new(
        SignalKind::Buy,
        current.time,
        current.close,
        SignalDetails::Breakout {
            rsi_fast: round2(reading.fast_latest),
            rsi_slow: round2(reading.slow_latest),
            downtrend_price: round2(downtrend_price),
            breakout_strength: strength.map(round2),
        },
    ))
}

/// Close crossing down through a line of higher lows
fn breakdown(data: &[Bar], reading: &MomentumReading, lows: &[Pivot]) -> Option<SignalVerdict> {
    let line = Trendline::from_latest(lows)?;
    if !line.is_ascending() {
        return None;
    }

    let (previous, current) = last_two(data)?;
    let uptrend_price = line.price_at(data.len() - 1);
    if !(current.close < uptrend_price && previous.close >= uptrend_price) {
        return None;
    }

    let strength = percent_of(uptrend_price - current.close, uptrend_price);
    tracing::debug!(
        date = %current.time,
        close = %current.close,
        %uptrend_price,
        pivot_from = line.start.index,
        pivot_to = line.end.index,
        "Trendline breakdown"
    );

    Some(SignalVerdict::new(
        SignalKind::Sell,
        current.time,
        current.close,
        SignalDetails::Breakdown {
            rsi_fast: round2(reading.fast_latest),
            rsi_slow: round2(reading.slow_latest),
            uptrend_price: round2(uptrend_price),
            breakdown_strength: strength.map(round2),
        },
    ))
}

fn neutral(data: &[Bar], reading: &MomentumReading) -> SignalVerdict {
    // `analyze` guarantees at least `minimum_bars` bars
    let latest = &data[data.len() - 1];
    SignalVerdict::new(
        SignalKind::Neutral,
        latest.time,
        latest.close,
        SignalDetails::Neutral {
            rsi_fast: round2(reading.fast_latest),
            rsi_slow: round2(reading.slow_latest),
            rsi_bullish: reading.bias.is_bullish(),
            rsi_bearish: reading.bias.is_bearish(),
        },
    )
}

fn last_two(data: &[Bar]) -> Option<(&Bar, &Bar)> {
    match data {
        [.., previous, current] => Some((previous, current)),
        _ => None,
    }
}

/// `delta` as a percentage of `base`; `None` when `base` is zero
fn percent_of(delta: Decimal, base: Decimal) -> Option<Decimal> {
    delta.checked_div(base).map(|ratio| ratio * dec!(100))
}

/// Round half away from zero and pin the scale to two digits
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Intermediate state of an analysis pass, for inspection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub bars: usize,
    pub minimum_bars: usize,
    pub first_date: Option<chrono::NaiveDate>,
    pub last_date: Option<chrono::NaiveDate>,
    pub rsi_fast: Option<Decimal>,
    pub rsi_slow: Option<Decimal>,
    pub bias: Option<MomentumBias>,
    pub crossovers: Option<Crossovers>,
    pub recent_highs: Vec<Pivot>,
    pub recent_lows: Vec<Pivot>,
}

/// Collect the intermediate values `analyze` works from
///
/// Unlike `analyze` this never short-circuits: whatever can be computed on a
/// short history is still reported.
pub fn diagnose(bars: &[Bar], config: &EngineConfig) -> Diagnostics {
    let data = sorted(bars);
    let reading = MomentumReading::compute(&data, config);
    let pivots = RecentPivots::detect(&data, config);

    Diagnostics {
        bars: data.len(),
        minimum_bars: config.minimum_bars(),
        first_date: data.first().map(|bar| bar.time),
        last_date: data.last().map(|bar| bar.time),
        rsi_fast: reading.as_ref().map(|r| round2(r.fast_latest)),
        rsi_slow: reading.as_ref().map(|r| round2(r.slow_latest)),
        bias: reading.as_ref().map(|r| r.bias),
        crossovers: reading
            .as_ref()
            .map(|r| momentum::last_crossovers(&r.fast, &r.slow)),
        recent_highs: pivots.highs,
        recent_lows: pivots.lows,
    }
}
