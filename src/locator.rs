//! Search of a bounded square for the one cell no sensor covers.

use tracing::{debug, instrument, trace};

use crate::coord::Coordinate;
use crate::coverage::intervals_for_row;
use crate::error::Error;
use crate::interval::{merge, Interval};
use crate::sensor::Sensor;

/// Scans rows `min..=max` top to bottom and returns the first cell within
/// `[min, max]` on both axes that no sensor covers.
#[instrument(skip(sensors), fields(n_sensors = sensors.len()))]
pub fn locate_gap(sensors: &[Sensor], min: i32, max: i32) -> Result<Coordinate, Error> {
    if min > max {
        return Err(Error::NoGap { min, max });
    }
    let bound = Interval::new(min, max);
    for row in min..=max {
        let merged = merge(intervals_for_row(sensors, row, Some(bound)));
        if merged.len() == 1 && merged[0] == bound {
            continue;
        }
        trace!(row, intervals = merged.len(), "row not fully covered");
        if let Some(x) = first_uncovered_x(&merged, bound) {
            let gap = Coordinate::new(x, row);
            debug!(%gap, "found gap");
            return Ok(gap);
        }
    }
    Err(Error::NoGap { min, max })
}

/// First x in `bound` outside every interval of `merged`, which must be
/// sorted and clamped to `bound`.
fn first_uncovered_x(merged: &[Interval], bound: Interval) -> Option<i32> {
    let mut cur = bound.start;
    for r in merged {
        if cur < r.start {
            return Some(cur);
        }
        if r.end >= bound.end {
            return None;
        }
        cur = cur.max(r.end + 1);
    }
    Some(cur)
}
