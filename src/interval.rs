/// Closed range of integers `start..=end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        debug_assert!(start <= end, "empty interval {start}..={end}");
        Interval { start, end }
    }

    pub fn contains(&self, v: i32) -> bool {
        v >= self.start && v <= self.end
    }

    /// True if the two share at least one point. Intervals that merely sit
    /// next to each other, like `0..=4` and `5..=9`, don't overlap.
    pub fn overlaps(&self, o: &Self) -> bool {
        self.contains(o.start) || self.contains(o.end)
            || o.contains(self.start) || o.contains(self.end)
    }

    pub fn combine(&self, o: &Self) -> Self {
        Interval::new(self.start.min(o.start), self.end.max(o.end))
    }

    /// Intersection with `bound`, or None if they are disjoint.
    pub fn clamp(&self, bound: &Self) -> Option<Self> {
        let start = self.start.max(bound.start);
        let end = self.end.min(bound.end);
        if start > end {
            return None;
        }
        Some(Interval::new(start, end))
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        u64::from(self.end.abs_diff(self.start)) + 1
    }
}

/// Folds `intervals` into the smallest set of non-overlapping intervals
/// covering the same points, sorted by start.
pub fn merge<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut merged: Vec<Interval> = Vec::new();
    for interval in intervals {
        let mut acc = interval;
        // Everything in `merged` is pairwise disjoint, so anything disjoint
        // from `acc` now stays disjoint after `acc` grows.
        merged.retain(|m| {
            if m.overlaps(&acc) {
                acc = acc.combine(m);
                false
            } else {
                true
            }
        });
        merged.push(acc);
    }
    merged.sort_unstable_by_key(|m| m.start);
    merged
}
