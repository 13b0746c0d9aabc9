use crate::interval::Interval;
use crate::sensor::Sensor;

impl Sensor {
    /// Cells on `row` within this sensor's radius.
    pub fn range_covered_at_row(&self, row: i32) -> Option<Interval> {
        let ydist = self.position().y.abs_diff(row);
        if ydist > self.radius() as u32 {
            return None;
        }
        let reach = self.radius() - ydist as i32;
        let mid = self.position().x;
        Some(Interval::new(mid.saturating_sub(reach), mid.saturating_add(reach)))
    }
}

/// Unmerged coverage of `row`, one interval per sensor that reaches it, in
/// sensor order. With a `clamp`, intervals are cut to it and dropped when
/// nothing is left.
pub fn intervals_for_row(sensors: &[Sensor], row: i32, clamp: Option<Interval>) -> Vec<Interval> {
    sensors.iter()
        .filter_map(|s| s.range_covered_at_row(row))
        .filter_map(|r| match clamp {
            Some(bound) => r.clamp(&bound),
            None => Some(r),
        })
        .collect()
}
