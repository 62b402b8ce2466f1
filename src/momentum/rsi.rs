//! Wilder-smoothed relative strength oscillator

use super::types::{Crossovers, MomentumSeries};
use crate::data::Bar;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Substituted for an average loss of exactly zero
const LOSS_EPSILON: Decimal = dec!(0.0001);

const HUNDRED: Decimal = dec!(100);

/// Compute the RSI of bar closes for `period`
///
/// Returns `None` when `period` is zero or fewer than `period + 1` bars are
/// supplied. The result holds `bars.len() - period` values.
pub fn compute(bars: &[Bar], period: usize) -> Option<MomentumSeries> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let period_d = Decimal::from(period);
    let carry = Decimal::from(period - 1);

    // Seed with the simple average of the first `period` changes
    let (gain, loss) = bars[..=period]
        .windows(2)
        .map(|w| w[1].close - w[0].close)
        .fold((Decimal::ZERO, Decimal::ZERO), |(gain, loss), change| {
            split_change(change, gain, loss)
        });

    let mut avg_gain = gain / period_d;
    let mut avg_loss = loss / period_d;

    let mut values = Vec::with_capacity(bars.len() - period);
    values.push(oscillator(avg_gain, avg_loss));

    for w in bars[period..].windows(2) {
        let (gain, loss) = split_change(w[1].close - w[0].close, Decimal::ZERO, Decimal::ZERO);
        avg_gain = (avg_gain * carry + gain) / period_d;
        avg_loss = (avg_loss * carry + loss) / period_d;
        values.push(oscillator(avg_gain, avg_loss));
    }

    Some(MomentumSeries::new(period, values))
}

fn split_change(change: Decimal, gain: Decimal, loss: Decimal) -> (Decimal, Decimal) {
    if change > Decimal::ZERO {
        (gain + change, loss)
    } else {
        (gain, loss + change.abs())
    }
}

fn oscillator(avg_gain: Decimal, avg_loss: Decimal) -> Decimal {
    let denominator = if avg_loss.is_zero() {
        LOSS_EPSILON
    } else {
        avg_loss
    };
    let rs = avg_gain / denominator;
    HUNDRED - HUNDRED / (Decimal::ONE + rs)
}

/// Find the latest bars where the fast series crossed the slow one
///
/// Only bars where both series are defined are compared, matched by bar
/// index rather than by position inside each series.
pub fn last_crossovers(fast: &MomentumSeries, slow: &MomentumSeries) -> Crossovers {
    let start = fast.first_bar_index().max(slow.first_bar_index());
    let end = fast.end_bar_index().min(slow.end_bar_index());

    let mut crossovers = Crossovers::default();
    for bar in (start + 1)..end {
        let (Some(f), Some(s), Some(prev_f), Some(prev_s)) = (
            fast.at_bar(bar),
            slow.at_bar(bar),
            fast.at_bar(bar - 1),
            slow.at_bar(bar - 1),
        ) else {
            continue;
        };

        if f > s && prev_f <= prev_s {
            crossovers.last_cross_up = Some(bar);
        }
        if f < s && prev_f >= prev_s {
            crossovers.last_cross_down = Some(bar);
        }
    }
    crossovers
}
