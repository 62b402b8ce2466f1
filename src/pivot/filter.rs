//! Pivot spacing filter

use super::types::Pivot;

/// Greedily drop pivots closer than `min_distance` bars to the last kept one
///
/// The first pivot is always kept and an earlier pivot always wins its
/// cluster; discarded pivots are never reconsidered.
pub fn filter_by_distance(pivots: &[Pivot], min_distance: usize) -> Vec<Pivot> {
    let mut kept: Vec<Pivot> = Vec::with_capacity(pivots.len());

    for pivot in pivots {
        let keep = match kept.last() {
            None => true,
            Some(last) => pivot
                .index
                .checked_sub(last.index)
                .is_some_and(|gap| gap >= min_distance),
        };
        if keep {
            kept.push(*pivot);
        }
    }

    kept
}
