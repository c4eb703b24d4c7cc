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
    OddItemCount(usize),
    InvalidItem(char),
    NoCommonItem,
    IncompleteGroup(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OddItemCount(n) => write!(
                f,
                "Expect even count of items in rucksack, given {}.",
                n
            ),
            Error::InvalidItem(c) => write!(f, "Invalid character({}) for item.", c),
            Error::NoCommonItem => write!(f, "No common item found."),
            Error::IncompleteGroup(n) => {
                write!(f, "Expect groups of 3 rucksacks, {} left over.", n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Set of item kinds, one bit per priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemSet(u64);

impl ItemSet {
    fn from_items(items: &[u8]) -> Self {
        Self(items.iter().fold(0, |set, &item| set | (1 << priority(item))))
    }

    fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    fn single_priority(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }
}

fn priority(item: u8) -> usize {
    match item {
        b'a'..=b'z' => (item - b'a') as usize + 1,
        b'A'..=b'Z' => (item - b'A') as usize + 27,
        _ => 0,
    }
}

#[derive(Debug)]
pub struct Rucksack {
    items: Vec<u8>,
}

impl TryFrom<&str> for Rucksack {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        if let Some(c) = value.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidItem(c));
        }
        if value.len() % 2 != 0 {
            return Err(Error::OddItemCount(value.len()));
        }

        Ok(Rucksack {
            items: value.as_bytes().to_vec(),
        })
    }
}

impl Rucksack {
    /// Priority of the item kind found in both compartments.
    pub fn misplaced_priority(&self) -> Result<usize, Error> {
        let (left, right) = self.items.split_at(self.items.len() / 2);
        ItemSet::from_items(left)
            .intersect(ItemSet::from_items(right))
            .single_priority()
            .ok_or(Error::NoCommonItem)
    }

    fn item_set(&self) -> ItemSet {
        ItemSet::from_items(&self.items)
    }
}

/// Sum of the badge priorities, a badge being the item kind shared by all
/// three rucksacks of a group.
pub fn badge_priority_sum(rucksacks: &[Rucksack]) -> Result<usize, Error> {
    if rucksacks.len() % 3 != 0 {
        return Err(Error::IncompleteGroup(rucksacks.len() % 3));
    }

    rucksacks
        .chunks(3)
        .map(|group| {
            group
                .iter()
                .map(Rucksack::item_set)
                .reduce(ItemSet::intersect)
                .and_then(ItemSet::single_priority)
                .ok_or(Error::NoCommonItem)
        })
        .sum()
}

pub fn read_rucksacks<P: AsRef<Path>>(path: P) -> Result<Vec<Rucksack>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut rucksacks = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.is_empty() {
            continue;
        }

        rucksacks.push(
            Rucksack::try_from(line.as_str())
                .with_context(|| format!("Failed to parse rucksack in line {}.", ind + 1))?,
        );
    }

    Ok(rucksacks)
}
