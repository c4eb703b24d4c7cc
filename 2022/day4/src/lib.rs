use std::{
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

#[derive(Debug)]
pub enum Error {
    InvalidPairText(String),
    InvalidSectionId(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPairText(s) => write!(f, "Invalid text({}) for assignment pair.", s),
            Error::InvalidSectionId(s) => write!(f, "Invalid text({}) for section id.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    sections: RangeInclusive<usize>,
}

impl Assignment {
    /// Bounds may be given in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            sections: a.min(b)..=a.max(b),
        }
    }

    pub fn contains(&self, other: &Assignment) -> bool {
        self.sections.start() <= other.sections.start()
            && other.sections.end() <= self.sections.end()
    }

    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.sections.start() <= other.sections.end()
            && other.sections.start() <= self.sections.end()
    }
}

#[derive(Debug, Clone)]
pub struct Pair {
    first: Assignment,
    second: Assignment,
}

impl TryFrom<&str> for Pair {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PAIR_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$").unwrap());

        let caps = PAIR_PATTERN
            .captures(value.trim())
            .ok_or(Error::InvalidPairText(value.to_string()))?;
        let mut ids = [0; 4];
        for (ind, id) in ids.iter_mut().enumerate() {
            let text = &caps[ind + 1];
            *id = text
                .parse::<usize>()
                .map_err(|_| Error::InvalidSectionId(text.to_string()))?;
        }

        Ok(Pair {
            first: Assignment::new(ids[0], ids[1]),
            second: Assignment::new(ids[2], ids[3]),
        })
    }
}

impl Pair {
    pub fn new(first: Assignment, second: Assignment) -> Self {
        Self { first, second }
    }

    pub fn one_contains_other(&self) -> bool {
        self.first.contains(&self.second) || self.second.contains(&self.first)
    }

    pub fn overlaps(&self) -> bool {
        self.first.overlaps(&self.second)
    }
}

pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<Pair>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut pairs = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
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

        pairs.push(
            Pair::try_from(line.as_str())
                .with_context(|| format!("Failed to parse assignment pair in line {}.", ind + 1))?,
        );
    }

    Ok(pairs)
}
