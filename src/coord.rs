use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Widened to `u64`: the two axis distances can each be near `u32::MAX`.
    pub fn manhattan_distance(&self, o: &Self) -> u64 {
        u64::from(self.x.abs_diff(o.x)) + u64::from(self.y.abs_diff(o.y))
    }

    /// `x * scale + y`, widened so large coordinates don't wrap.
    pub fn tuning_frequency(&self, scale: i64) -> i64 {
        i64::from(self.x) * scale + i64::from(self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TUNING_SCALE;

    #[test]
    fn test_manhattan_distance() {
        let a = Coordinate::new(8, 7);
        let b = Coordinate::new(2, 10);
        assert_eq!(a.manhattan_distance(&b), 9);
        assert_eq!(b.manhattan_distance(&a), 9);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_manhattan_distance_negative() {
        let a = Coordinate::new(-3, -4);
        let b = Coordinate::new(2, 1);
        assert_eq!(a.manhattan_distance(&b), 10);
    }

    #[test]
    fn test_manhattan_distance_extremes() {
        let a = Coordinate::new(i32::MIN, i32::MIN);
        let b = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(a.manhattan_distance(&b), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_tuning_frequency_example() {
        assert_eq!(Coordinate::new(14, 11).tuning_frequency(TUNING_SCALE), 56000011);
    }

    #[test]
    fn test_tuning_frequency_does_not_wrap() {
        let c = Coordinate::new(4_000_000, 4_000_000);
        assert_eq!(c.tuning_frequency(4_000_001), 16_000_008_000_000);
        assert_eq!(c.tuning_frequency(TUNING_SCALE), 16_000_004_000_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(-2, 15).to_string(), "-2,15");
    }
}
