//! Counting the cells on one row where a beacon cannot be.
//!
//! Two independent ways to get the same number: enumerating every covered
//! cell, and summing the lengths of the merged coverage.

use tracing::{debug, instrument};

use crate::coverage::intervals_for_row;
use crate::interval::merge;
use crate::sensor::Sensor;

/// Marks every covered cell of `row` in a bitmap spanning the row's coverage
/// and counts the marks that aren't in `excluded_on_row`.
///
/// The bitmap takes one byte per cell between the leftmost and rightmost
/// covered x, so this is only for rows whose coverage spans tens of millions
/// of cells at most. Use [`count_free_cells_merged`] for anything wider.
#[instrument(skip(sensors, excluded_on_row))]
pub fn count_free_cells(sensors: &[Sensor], excluded_on_row: &[i32], row: i32) -> u64 {
    let ranges = intervals_for_row(sensors, row, None);
    let (Some(lo), Some(hi)) = (
        ranges.iter().map(|r| r.start).min(),
        ranges.iter().map(|r| r.end).max(),
    ) else {
        return 0;
    };
    let offset = |x: i32| x.abs_diff(lo) as usize;

    let mut covered = vec![false; offset(hi) + 1];
    for r in &ranges {
        covered[offset(r.start)..=offset(r.end)].fill(true);
    }
    for &x in excluded_on_row {
        if (lo..=hi).contains(&x) {
            covered[offset(x)] = false;
        }
    }
    let count = covered.iter().filter(|&&c| c).count() as u64;
    debug!(cells = covered.len(), count, "enumerated row");
    count
}

/// Same result as [`count_free_cells`], from merged interval lengths.
pub fn count_free_cells_merged(sensors: &[Sensor], excluded_on_row: &[i32], row: i32) -> u64 {
    let merged = merge(intervals_for_row(sensors, row, None));
    let covered: u64 = merged.iter().map(|r| r.len()).sum();

    let mut excluded = excluded_on_row.to_vec();
    excluded.sort_unstable();
    excluded.dedup();
    let excluded_inside = excluded.iter()
        .filter(|&&x| merged.iter().any(|r| r.contains(x)))
        .count() as u64;
    covered - excluded_inside
}
