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

#[derive(Debug)]
pub enum Error {
    InvalidMotionText(String),
    InvalidDirectionText(String),
    InvalidStepCount(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMotionText(s) => write!(f, "Invalid text({}) for motion.", s),
            Error::InvalidDirectionText(s) => write!(f, "Invalid text({}) for direction.", s),
            Error::InvalidStepCount(s) => write!(f, "Invalid text({}) for step count.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl TryFrom<&str> for Direction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value {
            "U" => Ok(Direction::Up),
            "R" => Ok(Direction::Right),
            "D" => Ok(Direction::Down),
            "L" => Ok(Direction::Left),
            other => Err(Error::InvalidDirectionText(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    x: isize,
    y: isize,
}

impl Position {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    fn step(&self, dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::new(self.x, self.y + 1),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Down => Self::new(self.x, self.y - 1),
            Direction::Left => Self::new(self.x - 1, self.y),
        }
    }

    /// Where this knot ends up after the knot in front of it moved to
    /// `leader`. Knots only move when they stop touching.
    fn follow(&self, leader: &Position) -> Self {
        let dx = leader.x - self.x;
        let dy = leader.y - self.y;
        if dx.abs() <= 1 && dy.abs() <= 1 {
            *self
        } else {
            Self::new(self.x + dx.signum(), self.y + dy.signum())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    dir: Direction,
    steps_n: usize,
}

impl TryFrom<&str> for Motion {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let (dir_text, steps_text) = value
            .trim()
            .split_once(' ')
            .ok_or(Error::InvalidMotionText(value.to_string()))?;
        let dir = Direction::try_from(dir_text)?;
        let steps_n = steps_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidStepCount(steps_text.to_string()))?;

        Ok(Motion { dir, steps_n })
    }
}

#[derive(Debug)]
pub struct Rope {
    knots: Vec<Position>,
    tail_visited: HashSet<Position>,
}

impl Rope {
    /// A rope of `knot_n` knots (at least the head), all at the origin.
    pub fn new(knot_n: usize) -> Self {
        let knots = vec![Position::default(); knot_n.max(1)];
        let tail_visited = HashSet::from([Position::default()]);
        Self {
            knots,
            tail_visited,
        }
    }

    pub fn apply(&mut self, motion: &Motion) {
        for _ in 0..motion.steps_n {
            self.knots[0] = self.knots[0].step(motion.dir);
            for ind in 1..self.knots.len() {
                let moved = self.knots[ind].follow(&self.knots[ind - 1]);
                if moved == self.knots[ind] {
                    break;
                }
                self.knots[ind] = moved;
            }
            if let Some(tail) = self.knots.last() {
                self.tail_visited.insert(*tail);
            }
        }
    }

    pub fn tail_visited_n(&self) -> usize {
        self.tail_visited.len()
    }
}

pub fn read_motions<P: AsRef<Path>>(path: P) -> Result<Vec<Motion>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map(|s| !s.trim().is_empty()).unwrap_or(true))
        .map(|(ind, line)| {
            line.with_context(|| {
                format!(
                    "Failed to read line {} from given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .and_then(|s| {
                Motion::try_from(s.as_str())
                    .with_context(|| format!("Failed to parse motion in line {}.", ind + 1))
            })
        })
        .collect()
}
