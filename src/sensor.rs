use std::collections::HashSet;
use std::io::BufRead;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::coord::Coordinate;
use crate::error::Error;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^Sensor at x=([-0-9]+), y=([-0-9]+): closest beacon is at x=([-0-9]+), y=([-0-9]+)$"#)
        .unwrap()
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sensor {
    position: Coordinate,
    radius: i32,
}

impl Sensor {
    /// None if `radius` is negative.
    pub fn new(position: Coordinate, radius: i32) -> Option<Self> {
        (radius >= 0).then_some(Sensor { position, radius })
    }

    /// Sensor whose radius reaches exactly to its closest beacon.
    pub fn from_beacon(position: Coordinate, beacon: Coordinate) -> Option<Self> {
        let radius = i32::try_from(position.manhattan_distance(&beacon)).ok()?;
        Some(Sensor { position, radius })
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn covers(&self, c: &Coordinate) -> bool {
        self.position.manhattan_distance(c) <= self.radius as u64
    }
}

/// Everything known from the sensor reports: the sensors in input order, and
/// the beacons, which are never gaps.
#[derive(Debug, Default, PartialEq)]
pub struct Survey {
    pub sensors: Vec<Sensor>,
    pub beacons: HashSet<Coordinate>,
}

impl Survey {
    pub fn read(r: impl BufRead) -> Result<Self, Error> {
        let mut records = Vec::new();
        for (i, line) in r.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_line(i + 1, line.trim())?);
        }
        Survey::from_records(records)
    }

    /// Builds the survey from `(line_no, sensor, beacon)` records.
    pub fn from_records<I>(records: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, Coordinate, Coordinate)>,
    {
        records.into_iter().try_fold(Survey::default(), |mut survey, (line_no, pos, beacon)| {
            let sensor = Sensor::from_beacon(pos, beacon).ok_or(Error::RadiusOverflow {
                line_no,
                distance: pos.manhattan_distance(&beacon),
            })?;
            survey.sensors.push(sensor);
            survey.beacons.insert(beacon);
            Ok(survey)
        })
    }

    /// x positions of the known beacons on `row`, sorted.
    pub fn excluded_on_row(&self, row: i32) -> Vec<i32> {
        let mut xs: Vec<i32> = self.beacons.iter()
            .filter(|b| b.y == row)
            .map(|b| b.x)
            .collect();
        xs.sort_unstable();
        xs
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<(usize, Coordinate, Coordinate), Error> {
    let Some(caps) = LINE_RE.captures(line) else {
        return Err(Error::BadLine { line_no, line: line.to_owned() });
    };
    let mut coords = [0i32; 4];
    for (slot, m) in coords.iter_mut().zip(caps.iter().skip(1).flatten()) {
        *slot = m.as_str().parse::<i32>().map_err(|source| Error::BadNumber {
            line_no,
            text: m.as_str().to_owned(),
            source,
        })?;
    }
    let [sx, sy, bx, by] = coords;
    Ok((line_no, Coordinate::new(sx, sy), Coordinate::new(bx, by)))
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    pub(crate) fn example() -> Survey {
        Survey::read(EXAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_read_survey() {
        let survey = example();
        assert_eq!(survey.sensors.len(), 14);
        assert_eq!(survey.sensors[0], Sensor::new(Coordinate::new(2, 18), 7).unwrap());
        assert_eq!(survey.sensors[6], Sensor::new(Coordinate::new(8, 7), 9).unwrap());
        // Several sensors share beacons.
        assert_eq!(survey.beacons.len(), 6);
        assert!(survey.beacons.contains(&Coordinate::new(-2, 15)));
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let input = "\nSensor at x=0, y=0: closest beacon is at x=1, y=1\n\n";
        let survey = Survey::read(input.as_bytes()).unwrap();
        assert_eq!(survey.sensors, vec![Sensor::new(Coordinate::new(0, 0), 2).unwrap()]);
    }

    #[test]
    fn test_read_bad_line() {
        let input = "Sensor at x=0, y=0: closest beacon is at x=1, y=1\nSensor at x=3\n";
        match Survey::read(input.as_bytes()) {
            Err(Error::BadLine { line_no, line }) => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "Sensor at x=3");
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_bad_number() {
        let input = "Sensor at x=0, y=99999999999: closest beacon is at x=1, y=1";
        let err = Survey::read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::BadNumber { line_no: 1, .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_radius_overflow() {
        let input = "Sensor at x=-2000000000, y=0: closest beacon is at x=2000000000, y=0";
        let err = Survey::read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RadiusOverflow { line_no: 1, distance: 4_000_000_000 }));
    }

    #[test]
    fn test_radius_overflow_across_both_axes() {
        // Each axis distance fits in u32, their sum doesn't.
        let input = "Sensor at x=-2147483648, y=0: closest beacon is at x=2147483647, y=1";
        let err = Survey::read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RadiusOverflow { line_no: 1, distance: 4_294_967_296 }));
    }

    #[test]
    fn test_new_rejects_negative_radius() {
        assert_eq!(Sensor::new(Coordinate::new(0, 0), -1), None);
        assert_eq!(Sensor::new(Coordinate::new(0, 0), 0).map(|s| s.radius()), Some(0));
    }

    #[test]
    fn test_covers_far_corner() {
        let s = Sensor::new(Coordinate::new(i32::MIN, i32::MIN), i32::MAX).unwrap();
        assert!(!s.covers(&Coordinate::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn test_excluded_on_row() {
        let survey = example();
        assert_eq!(survey.excluded_on_row(10), vec![2]);
        assert_eq!(survey.excluded_on_row(16), vec![10]);
        assert!(survey.excluded_on_row(11).is_empty());
    }

    #[test]
    fn test_covers() {
        let s = Sensor::new(Coordinate::new(8, 7), 9).unwrap();
        assert!(s.covers(&Coordinate::new(2, 10)));
        assert!(s.covers(&Coordinate::new(8, -2)));
        assert!(!s.covers(&Coordinate::new(8, -3)));
    }
}
