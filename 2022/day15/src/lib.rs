use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const TUNING_MULTIPLIER: i64 = 4000000;

#[derive(Debug)]
pub enum Error {
    InvalidSensorText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSensorText(s) => write!(f, "Invalid text({}) for sensor report.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Row checked for positions where no beacon can be.
    #[arg(long, default_value_t = 2000000)]
    pub row: i64,
    /// Largest coordinate the distress beacon may have.
    #[arg(long, default_value_t = 4000000)]
    pub bound: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i64,
    y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn tuning_frequency(&self) -> i64 {
        self.x * TUNING_MULTIPLIER + self.y
    }

    fn manhattan_distance(&self, other: &Position) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[derive(Debug, Clone)]
pub struct Sensor {
    pos: Position,
    beacon: Position,
    radius: i64,
}

impl TryFrom<&str> for Sensor {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static SENSOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)",
            )
            .unwrap()
        });

        let caps = SENSOR_PATTERN
            .captures(value)
            .ok_or(Error::InvalidSensorText(value.to_string()))?;
        let coord = |ind: usize| {
            caps[ind]
                .parse::<i64>()
                .map_err(|_| Error::InvalidSensorText(value.to_string()))
        };
        let pos = Position::new(coord(1)?, coord(2)?);
        let beacon = Position::new(coord(3)?, coord(4)?);

        Ok(Sensor {
            pos,
            beacon,
            radius: pos.manhattan_distance(&beacon),
        })
    }
}

impl Sensor {
    /// Columns of row `y` this sensor covers.
    fn coverage(&self, y: i64) -> Option<RangeInclusive<i64>> {
        let half_width = self.radius - (self.pos.y - y).abs();
        (half_width >= 0).then(|| (self.pos.x - half_width)..=(self.pos.x + half_width))
    }
}

#[derive(Debug, Clone)]
pub struct Sensors {
    sensors: Vec<Sensor>,
}

impl Sensors {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self { sensors }
    }

    /// Number of positions in row `y` where no beacon can be.
    pub fn no_beacon_count(&self, y: i64) -> usize {
        let covered = self
            .covered_ranges(y)
            .iter()
            .map(|range| (range.end() - range.start() + 1) as usize)
            .sum::<usize>();
        let beacons_in_row = self
            .sensors
            .iter()
            .map(|sensor| sensor.beacon)
            .filter(|beacon| beacon.y == y)
            .collect::<HashSet<_>>()
            .len();

        covered - beacons_in_row
    }

    /// The only position within `0..=bound` on both axes that no sensor
    /// covers.
    pub fn distress_beacon(&self, bound: i64) -> Option<Position> {
        for y in 0..=bound {
            let mut next_x = 0;
            for range in self.covered_ranges(y) {
                if *range.end() < next_x {
                    continue;
                }
                if *range.start() > next_x {
                    break;
                }
                next_x = range.end() + 1;
            }

            if next_x <= bound {
                debug!(x = next_x, y, "found uncovered position");
                return Some(Position::new(next_x, y));
            }
        }

        None
    }

    /// Sorted, disjoint and non-adjacent ranges covered in row `y`.
    fn covered_ranges(&self, y: i64) -> Vec<RangeInclusive<i64>> {
        let mut ranges = self
            .sensors
            .iter()
            .filter_map(|sensor| sensor.coverage(y))
            .collect::<Vec<_>>();
        ranges.sort_unstable_by_key(|range| *range.start());

        let mut merged: Vec<RangeInclusive<i64>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end() + 1 => {
                    if range.end() > last.end() {
                        *last = *last.start()..=*range.end();
                    }
                }
                _ => merged.push(range),
            }
        }

        merged
    }
}

pub fn read_sensors<P: AsRef<Path>>(path: P) -> Result<Sensors> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut sensors = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        sensors.push(Sensor::try_from(line.as_str())?);
    }

    Ok(Sensors::new(sensors))
}
