//! Straight-line projection through two pivots

use crate::pivot::Pivot;
use rust_decimal::Decimal;

/// Value at `target_x` of the line through `(x1, y1)` and `(x2, y2)`
///
/// Extrapolates freely beyond the defining points. When `x1 == x2` the line
/// is treated as flat at `y1`.
pub fn project(x1: usize, y1: Decimal, x2: usize, y2: Decimal, target_x: usize) -> Decimal {
    if x1 == x2 {
        return y1;
    }

    let run = Decimal::from(x2) - Decimal::from(x1);
    let offset = Decimal::from(target_x) - Decimal::from(x1);

    // Multiply before dividing so both defining points are reproduced exactly
    y1 + (y2 - y1) * offset / run
}

/// A line through two same-kind pivots, recomputed on every analysis pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trendline {
    /// Older pivot
    pub start: Pivot,
    /// Newer pivot
    pub end: Pivot,
}

impl Trendline {
    pub fn through(start: Pivot, end: Pivot) -> Self {
        Self { start, end }
    }

    /// Line through the two most recent pivots
    pub fn from_latest(pivots: &[Pivot]) -> Option<Self> {
        match pivots {
            [.., start, end] => Some(Self::through(*start, *end)),
            _ => None,
        }
    }

    /// Projected price at bar `index`
    pub fn price_at(&self, index: usize) -> Decimal {
        project(
            self.start.index,
            self.start.price,
            self.end.index,
            self.end.price,
            index,
        )
    }

    /// Newer pivot below the older one (a lower high or lower low)
    pub fn is_descending(&self) -> bool {
        self.end.price < self.start.price
    }

    /// Newer pivot above the older one (a higher high or higher low)
    pub fn is_ascending(&self) -> bool {
        self.end.price > self.start.price
    }
}
