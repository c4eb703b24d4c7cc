use std::{
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
    InconsistentRow(usize, usize),
    InvalidCharForHeight(char),
    EmptyMap,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForHeight(c) => write!(f, "Invalid character({}) for tree height.", c),
            Error::EmptyMap => write!(f, "No tree in map."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug)]
pub struct Forest {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl Forest {
    pub fn visible_n(&self) -> usize {
        let mut visible = vec![false; self.heights.len()];
        for r in 0..self.row_n {
            self.mark_visible(&mut visible, (0..self.col_n).map(|c| (r, c)));
            self.mark_visible(&mut visible, (0..self.col_n).rev().map(|c| (r, c)));
        }
        for c in 0..self.col_n {
            self.mark_visible(&mut visible, (0..self.row_n).map(|r| (r, c)));
            self.mark_visible(&mut visible, (0..self.row_n).rev().map(|r| (r, c)));
        }

        visible.into_iter().filter(|v| *v).count()
    }

    pub fn max_scenic_score(&self) -> usize {
        (0..self.row_n)
            .flat_map(|r| (0..self.col_n).map(move |c| (r, c)))
            .map(|(r, c)| self.scenic_score(r, c))
            .max()
            .unwrap_or(0)
    }

    /// Product of the viewing distances in the four directions.
    pub fn scenic_score(&self, r: usize, c: usize) -> usize {
        let height = self.height(r, c);
        Direction::all_dirs()
            .iter()
            .map(|dir| {
                let line: Box<dyn Iterator<Item = (usize, usize)>> = match dir {
                    Direction::Up => Box::new((0..r).rev().map(move |r| (r, c))),
                    Direction::Right => Box::new((c + 1..self.col_n).map(move |c| (r, c))),
                    Direction::Down => Box::new((r + 1..self.row_n).map(move |r| (r, c))),
                    Direction::Left => Box::new((0..c).rev().map(move |c| (r, c))),
                };
                let mut distance = 0;
                for (r, c) in line {
                    distance += 1;
                    if self.height(r, c) >= height {
                        break;
                    }
                }
                distance
            })
            .product()
    }

    fn mark_visible(&self, visible: &mut [bool], line: impl Iterator<Item = (usize, usize)>) {
        let mut tallest = None;
        for (r, c) in line {
            let height = self.height(r, c);
            if tallest.map_or(true, |t| height > t) {
                visible[r * self.col_n + c] = true;
                tallest = Some(height);
            }
        }
    }

    fn height(&self, r: usize, c: usize) -> u8 {
        self.heights[r * self.col_n + c]
    }
}

#[derive(Debug, Default)]
struct ForestBuilder {
    heights: Vec<u8>,
    row_n: usize,
    col_n: Option<usize>,
}

impl ForestBuilder {
    fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(0), this_col_n));
        }

        for c in text.chars() {
            let height = c.to_digit(10).ok_or(Error::InvalidCharForHeight(c))?;
            self.heights.push(height as u8);
        }
        self.row_n += 1;

        Ok(())
    }

    fn build(self) -> Result<Forest, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 => Ok(Forest {
                heights: self.heights,
                row_n: self.row_n,
                col_n,
            }),
            _ => Err(Error::EmptyMap),
        }
    }
}

pub fn read_forest<P: AsRef<Path>>(path: P) -> Result<Forest> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = ForestBuilder::default();
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

        builder.add_row(line.as_str())?
    }

    Ok(builder.build()?)
}
