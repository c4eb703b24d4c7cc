use std::{
    collections::HashMap,
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

pub const CHAMBER_WIDTH: usize = 7;
pub const PART1_ROCK_N: u64 = 2022;
pub const PART2_ROCK_N: u64 = 1000000000000;
const SPAWN_LEFT_GAP: usize = 2;
const SPAWN_BOTTOM_GAP: usize = 3;

#[derive(Debug)]
pub enum Error {
    InvalidCharForJet(char),
    NoJet,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCharForJet(c) => write!(f, "Invalid character({}) for jet.", c),
            Error::NoJet => write!(f, "No jet in given pattern."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jet {
    Left,
    Right,
}

impl TryFrom<char> for Jet {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '<' => Ok(Jet::Left),
            '>' => Ok(Jet::Right),
            _ => Err(Error::InvalidCharForJet(value)),
        }
    }
}

/// Cells of each rock as (x, y) offsets from its bottom left corner, in the
/// order the rocks fall.
static ROCKS: [&[(usize, usize)]; 5] = [
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
];

/// Top of the tower seen from above: how far below the tower height the
/// highest rock of each column is.
type Surface = [usize; CHAMBER_WIDTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChamberState {
    rock_ind: usize,
    jet_ind: usize,
    surface: Surface,
}

#[derive(Debug, Clone)]
pub struct Chamber {
    jets: Vec<Jet>,
    // One bit per column.
    rows: Vec<u8>,
    rock_ind: usize,
    jet_ind: usize,
}

impl Chamber {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let jets = pattern
            .trim()
            .chars()
            .map(Jet::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if jets.is_empty() {
            return Err(Error::NoJet);
        }

        Ok(Self {
            jets,
            rows: Vec::new(),
            rock_ind: 0,
            jet_ind: 0,
        })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Tower height after `rock_n` rocks have come to rest in an empty
    /// chamber. Once the chamber repeats a state, whole cycles are skipped.
    pub fn tower_height(mut self, rock_n: u64) -> u64 {
        let mut seen: HashMap<ChamberState, (u64, usize)> = HashMap::new();
        let mut skipped_height = 0;
        let mut cycle_skipped = false;
        let mut dropped_n = 0;
        while dropped_n < rock_n {
            self.drop_rock();
            dropped_n += 1;
            if cycle_skipped {
                continue;
            }

            let state = self.state();
            if let Some((prev_dropped_n, prev_height)) =
                seen.insert(state, (dropped_n, self.height()))
            {
                let cycle_len = dropped_n - prev_dropped_n;
                let cycle_height = (self.height() - prev_height) as u64;
                let cycle_n = (rock_n - dropped_n) / cycle_len;
                debug!(dropped_n, cycle_len, cycle_height, cycle_n, "found cycle");
                dropped_n += cycle_n * cycle_len;
                skipped_height = cycle_n * cycle_height;
                cycle_skipped = true;
            }
        }

        self.height() as u64 + skipped_height
    }

    /// Lets the next rock fall until it comes to rest.
    pub fn drop_rock(&mut self) {
        let rock = ROCKS[self.rock_ind];
        self.rock_ind = (self.rock_ind + 1) % ROCKS.len();
        let (mut x, mut y) = (SPAWN_LEFT_GAP, self.height() + SPAWN_BOTTOM_GAP);
        loop {
            let jet = self.jets[self.jet_ind];
            self.jet_ind = (self.jet_ind + 1) % self.jets.len();
            let pushed_x = match jet {
                Jet::Left => x.checked_sub(1),
                Jet::Right => Some(x + 1),
            };
            if let Some(pushed_x) = pushed_x.filter(|&px| self.fits(rock, px, y)) {
                x = pushed_x;
            }

            match y.checked_sub(1).filter(|&dy| self.fits(rock, x, dy)) {
                Some(lower_y) => y = lower_y,
                None => break,
            }
        }

        for &(dx, dy) in rock {
            let row = y + dy;
            if row >= self.rows.len() {
                self.rows.resize(row + 1, 0);
            }
            self.rows[row] |= 1 << (x + dx);
        }
    }

    fn fits(&self, rock: &[(usize, usize)], x: usize, y: usize) -> bool {
        rock.iter().all(|&(dx, dy)| {
            let (cx, cy) = (x + dx, y + dy);
            cx < CHAMBER_WIDTH && self.rows.get(cy).map_or(true, |row| row & (1 << cx) == 0)
        })
    }

    fn state(&self) -> ChamberState {
        let mut surface = [self.height(); CHAMBER_WIDTH];
        for (col, depth) in surface.iter_mut().enumerate() {
            if let Some(top) = self.rows.iter().rposition(|row| row & (1 << col) != 0) {
                *depth = self.height() - top - 1;
            }
        }

        ChamberState {
            rock_ind: self.rock_ind,
            jet_ind: self.jet_ind,
            surface,
        }
    }
}

pub fn read_chamber<P: AsRef<Path>>(path: P) -> Result<Chamber> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(Chamber::new(&text)?)
}
