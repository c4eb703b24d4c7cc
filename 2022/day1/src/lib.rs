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
    InvalidCalorieText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCalorieText(s) => write!(f, "Invalid text({}) for calories.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct Elf {
    calories: Vec<usize>,
}

impl Elf {
    pub fn total_calories(&self) -> usize {
        self.calories.iter().sum()
    }
}

/// Sum of the calories carried by the `n` elves carrying the most.
pub fn top_n_calories(elves: &[Elf], n: usize) -> usize {
    let mut totals = elves.iter().map(Elf::total_calories).collect::<Vec<_>>();
    totals.sort_unstable_by(|a, b| b.cmp(a));
    totals.iter().take(n).sum()
}

pub fn read_elves<P: AsRef<Path>>(path: P) -> Result<Vec<Elf>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut elves = Vec::new();
    let mut cur_elf = Elf::default();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() {
            if !cur_elf.calories.is_empty() {
                elves.push(std::mem::take(&mut cur_elf));
            }
            continue;
        }

        let calories = text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCalorieText(text.to_string()))?;
        cur_elf.calories.push(calories);
    }

    if !cur_elf.calories.is_empty() {
        elves.push(cur_elf);
    }

    Ok(elves)
}
