//! Sensor coverage and distress beacon search over Manhattan-distance
//! exclusion zones.

pub mod coord;
pub mod coverage;
pub mod error;
pub mod free_space;
pub mod interval;
pub mod locator;
pub mod sensor;

pub use coord::Coordinate;
pub use error::Error;
pub use interval::Interval;
pub use sensor::{Sensor, Survey};

/// Row examined by part 1 of the puzzle.
pub const DEFAULT_ROW: i32 = 2_000_000;
/// Upper edge of the square searched for the distress beacon.
pub const DEFAULT_BOUND_MAX: i32 = 4_000_000;
/// Multiplier applied to `x` when computing the tuning frequency.
pub const TUNING_SCALE: i64 = 4_000_000;
