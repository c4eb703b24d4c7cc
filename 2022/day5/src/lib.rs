use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    EmptyDrawing,
    InvalidDrawingRow(String),
    InvalidMoveText(String),
    InvalidStackIndex(usize),
    NotEnoughCrates(usize, usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyDrawing => write!(f, "No stack in drawing."),
            Error::InvalidDrawingRow(s) => write!(f, "Invalid text({}) for drawing row.", s),
            Error::InvalidMoveText(s) => write!(f, "Invalid text({}) for move.", s),
            Error::InvalidStackIndex(ind) => write!(f, "Invalid stack index({}).", ind),
            Error::NotEnoughCrates(stack_ind, expect_n, have_n) => write!(
                f,
                "Expect to take {} crate(s) from stack {}, but it only has {}.",
                expect_n, stack_ind, have_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraneModel {
    /// Moves one crate at a time, so a block ends up reversed.
    CrateMover9000,
    /// Moves the whole block at once, keeping its order.
    CrateMover9001,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

impl TryFrom<&str> for Move {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static MOVE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^move (\d+) from (\d+) to (\d+)$").unwrap());

        let caps = MOVE_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidMoveText(value.to_string()))?;
        let parse = |ind: usize| {
            caps[ind]
                .parse::<usize>()
                .map_err(|_| Error::InvalidMoveText(value.to_string()))
        };
        let count = parse(1)?;
        let from = parse(2)?;
        let to = parse(3)?;
        if from == 0 {
            return Err(Error::InvalidStackIndex(from));
        }
        if to == 0 {
            return Err(Error::InvalidStackIndex(to));
        }

        Ok(Move {
            count,
            from: from - 1,
            to: to - 1,
        })
    }
}

/// Stacks of crates, bottom first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stacks {
    stacks: Vec<Vec<char>>,
}

impl Stacks {
    pub fn apply(&mut self, mv: &Move, model: CraneModel) -> Result<(), Error> {
        let stack_n = self.stacks.len();
        if mv.from >= stack_n {
            return Err(Error::InvalidStackIndex(mv.from + 1));
        }
        if mv.to >= stack_n {
            return Err(Error::InvalidStackIndex(mv.to + 1));
        }

        let from_stack = &mut self.stacks[mv.from];
        if from_stack.len() < mv.count {
            return Err(Error::NotEnoughCrates(
                mv.from + 1,
                mv.count,
                from_stack.len(),
            ));
        }
        let mut block = from_stack.split_off(from_stack.len() - mv.count);
        if model == CraneModel::CrateMover9000 {
            block.reverse();
        }
        self.stacks[mv.to].extend(block);

        Ok(())
    }

    /// Top crate of each stack, a space for an empty stack.
    pub fn tops(&self) -> String {
        self.stacks
            .iter()
            .map(|s| s.last().copied().unwrap_or(' '))
            .collect()
    }
}

#[derive(Debug, Default)]
struct StacksBuilder {
    rows: Vec<Vec<Option<char>>>,
}

impl StacksBuilder {
    /// The label row under the drawing is skipped.
    fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let chars = text.chars().collect::<Vec<_>>();
        if chars.iter().all(|c| c.is_ascii_digit() || *c == ' ') {
            return Ok(());
        }

        let mut row = Vec::new();
        for cell in chars.chunks(4) {
            match cell {
                ['[', c, ']', ..] if c.is_ascii_alphabetic() => row.push(Some(*c)),
                [' ', ' ', ' ', ..] => row.push(None),
                _ => return Err(Error::InvalidDrawingRow(text.to_string())),
            }
        }
        self.rows.push(row);

        Ok(())
    }

    fn build(self) -> Result<Stacks, Error> {
        let stack_n = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if stack_n == 0 {
            return Err(Error::EmptyDrawing);
        }

        let mut stacks = vec![Vec::new(); stack_n];
        for row in self.rows.iter().rev() {
            for (ind, c) in row.iter().enumerate() {
                if let Some(c) = c {
                    stacks[ind].push(*c);
                }
            }
        }

        Ok(Stacks { stacks })
    }
}

pub fn read_procedure<P: AsRef<Path>>(path: P) -> Result<(Stacks, Vec<Move>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines().enumerate();
    let mut builder = StacksBuilder::default();
    for (ind, line) in lines.by_ref() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            break;
        }

        builder
            .add_row(&line)
            .with_context(|| format!("Failed to parse drawing in line {}.", ind + 1))?;
    }
    let stacks = builder.build()?;

    let mut moves = Vec::new();
    for (ind, line) in lines {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        moves.push(
            Move::try_from(line.as_str())
                .with_context(|| format!("Failed to parse move in line {}.", ind + 1))?,
        );
    }

    Ok((stacks, moves))
}
