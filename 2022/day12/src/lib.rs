use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::Edge;
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForHeight(char),
    NoStart,
    NoEnd,
    DuplicateMark(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForHeight(c) => write!(f, "Invalid character({}) for height.", c),
            Error::NoStart => write!(f, "No start position(S) in height map."),
            Error::NoEnd => write!(f, "No best signal position(E) in height map."),
            Error::DuplicateMark(c) => write!(f, "Mark({}) appears more than once.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    fn manhattan_distance(&self, other: &Position) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

#[derive(Debug)]
pub struct HeightMap {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
    start: Position,
    end: Position,
}

impl HeightMap {
    /// Fewest steps from the marked start to the best signal position.
    pub fn fewest_steps_from_start(&self) -> Option<usize> {
        self.fewest_steps(&[self.start])
    }

    /// Fewest steps from any square at the lowest elevation.
    pub fn fewest_steps_from_lowest(&self) -> Option<usize> {
        let starts = (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| Position::new(r, c)))
            .filter(|pos| self.height(pos) == 0)
            .collect::<Vec<_>>();
        debug!(start_n = starts.len(), "search from lowest squares");

        self.fewest_steps(&starts)
    }

    fn fewest_steps(&self, starts: &[Position]) -> Option<usize> {
        common::search(
            starts,
            &self.end,
            |pos| self.climbable_neighbors(pos),
            |pos, goal| pos.manhattan_distance(goal),
        )
        .map(|(_, steps)| steps)
    }

    fn climbable_neighbors(&self, pos: &Position) -> Vec<Edge<Position, usize>> {
        let max_height = self.height(pos) + 1;
        let Position { r, c } = *pos;
        [
            r.checked_sub(1).map(|r| Position::new(r, c)),
            (r + 1 < self.row_n).then(|| Position::new(r + 1, c)),
            c.checked_sub(1).map(|c| Position::new(r, c)),
            (c + 1 < self.col_n).then(|| Position::new(r, c + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(|next| self.height(next) <= max_height)
        .map(|next| Edge::new(next, 1))
        .collect()
    }

    fn height(&self, pos: &Position) -> u8 {
        self.heights[pos.r * self.col_n + pos.c]
    }
}

#[derive(Debug, Default)]
struct HeightMapBuilder {
    heights: Vec<u8>,
    row_n: usize,
    col_n: Option<usize>,
    start: Option<Position>,
    end: Option<Position>,
}

impl HeightMapBuilder {
    fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(0), this_col_n));
        }

        for (c, ch) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, c);
            let height = match ch {
                'S' => {
                    Self::mark(&mut self.start, pos, ch)?;
                    b'a'
                }
                'E' => {
                    Self::mark(&mut self.end, pos, ch)?;
                    b'z'
                }
                'a'..='z' => ch as u8,
                _ => return Err(Error::InvalidCharForHeight(ch)),
            };
            self.heights.push(height - b'a');
        }
        self.row_n += 1;

        Ok(())
    }

    fn mark(slot: &mut Option<Position>, pos: Position, ch: char) -> Result<(), Error> {
        if slot.replace(pos).is_some() {
            return Err(Error::DuplicateMark(ch));
        }

        Ok(())
    }

    fn build(self) -> Result<HeightMap, Error> {
        let start = self.start.ok_or(Error::NoStart)?;
        let end = self.end.ok_or(Error::NoEnd)?;

        Ok(HeightMap {
            heights: self.heights,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            start,
            end,
        })
    }
}

pub fn read_height_map<P: AsRef<Path>>(path: P) -> Result<HeightMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = HeightMapBuilder::default();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.is_empty() {
            continue;
        }

        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}

impl TryFrom<&str> for HeightMap {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = HeightMapBuilder::default();
        for line in value.lines().filter(|l| !l.is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }
}
