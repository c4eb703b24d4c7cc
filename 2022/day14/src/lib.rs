use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

pub const SAND_SOURCE: Point = Point { x: 500, y: 0 };

#[derive(Debug)]
pub enum Error {
    InvalidPointText(String),
    DiagonalSegment(Point, Point),
    EmptyPath,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPointText(s) => write!(f, "Invalid text({}) for point.", s),
            Error::DiagonalSegment(from, to) => write!(
                f,
                "Rock segment from ({}, {}) to ({}, {}) is neither horizontal nor vertical.",
                from.x, from.y, to.x, to.y
            ),
            Error::EmptyPath => write!(f, "Rock path has no point."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl TryFrom<&str> for Point {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (x, y) = value
            .trim()
            .split_once(',')
            .ok_or(Error::InvalidPointText(value.to_string()))?;
        let parse = |s: &str| {
            s.trim()
                .parse::<i32>()
                .map_err(|_| Error::InvalidPointText(value.to_string()))
        };

        Ok(Point {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

impl Point {
    fn falls(&self) -> [Point; 3] {
        [
            Point { x: self.x, y: self.y + 1 },
            Point { x: self.x - 1, y: self.y + 1 },
            Point { x: self.x + 1, y: self.y + 1 },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bottom {
    /// Sand falling below the lowest rock is lost.
    Abyss,
    /// An endless floor two units below the lowest rock.
    Floor,
}

#[derive(Debug, Clone)]
pub struct Cave {
    rocks: HashSet<Point>,
    max_rock_y: i32,
}

impl Cave {
    pub fn new() -> Self {
        Self {
            rocks: HashSet::new(),
            max_rock_y: SAND_SOURCE.y,
        }
    }

    pub fn add_rock_path(&mut self, text: &str) -> Result<(), Error> {
        let points = text
            .split("->")
            .map(Point::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if points.is_empty() {
            return Err(Error::EmptyPath);
        }

        self.add_rock(points[0]);
        for segment in points.windows(2) {
            let (from, to) = (segment[0], segment[1]);
            if from.x != to.x && from.y != to.y {
                return Err(Error::DiagonalSegment(from, to));
            }

            for x in from.x.min(to.x)..=from.x.max(to.x) {
                for y in from.y.min(to.y)..=from.y.max(to.y) {
                    self.add_rock(Point { x, y });
                }
            }
        }

        Ok(())
    }

    fn add_rock(&mut self, point: Point) {
        self.rocks.insert(point);
        self.max_rock_y = self.max_rock_y.max(point.y);
    }

    /// Pours sand from [`SAND_SOURCE`] and counts the grains that come to
    /// rest before sand starts falling into the abyss or the source is
    /// blocked.
    pub fn pour_sand(&self, bottom: Bottom) -> usize {
        let floor_y = self.max_rock_y + 2;
        let mut blocked = self.rocks.clone();
        let mut rest_n = 0;
        // Each grain retraces the previous grain's route until it diverges.
        let mut route = vec![SAND_SOURCE];
        while let Some(&cur) = route.last() {
            if bottom == Bottom::Abyss && cur.y > self.max_rock_y {
                break;
            }

            let next = cur
                .falls()
                .into_iter()
                .find(|p| p.y < floor_y && !blocked.contains(p));
            match next {
                Some(next) => route.push(next),
                None => {
                    blocked.insert(cur);
                    rest_n += 1;
                    route.pop();
                }
            }
        }
        debug!(rest_n, ?bottom, "sand stopped");

        rest_n
    }
}

impl Default for Cave {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_cave<P: AsRef<Path>>(path: P) -> Result<Cave> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut cave = Cave::new();
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

        cave.add_rock_path(&line)
            .with_context(|| format!("Failed to parse rock path in line {}.", ind + 1))?;
    }

    Ok(cave)
}
