use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub const SCREEN_WIDTH: usize = 40;
pub const SCREEN_HEIGHT: usize = 6;

#[derive(Debug)]
pub enum Error {
    InvalidInstructionText(String),
    InvalidOperand(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInstructionText(s) => write!(f, "Invalid text({}) for instruction.", s),
            Error::InvalidOperand(s) => write!(f, "Invalid text({}) for operand.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    AddX(isize),
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("noop"), None, None) => Ok(Instruction::Noop),
            (Some("addx"), Some(operand), None) => operand
                .parse::<isize>()
                .map(Instruction::AddX)
                .map_err(|_| Error::InvalidOperand(operand.to_string())),
            _ => Err(Error::InvalidInstructionText(value.to_string())),
        }
    }
}

impl Instruction {
    fn cycle_n(&self) -> usize {
        match self {
            Instruction::Noop => 1,
            Instruction::AddX(_) => 2,
        }
    }
}

/// Value of register X during every cycle, first cycle first.
pub fn x_during_cycles(program: &[Instruction]) -> Vec<isize> {
    let mut x = 1;
    let mut values = Vec::new();
    for inst in program {
        values.extend(std::iter::repeat(x).take(inst.cycle_n()));
        if let Instruction::AddX(v) = inst {
            x += v;
        }
    }

    values
}

/// Sum of `cycle * X` at cycles 20, 60, 100, 140, 180 and 220.
pub fn signal_strength_sum(program: &[Instruction]) -> isize {
    x_during_cycles(program)
        .into_iter()
        .enumerate()
        .map(|(ind, x)| (ind + 1, x))
        .filter(|(cycle, _)| *cycle <= 220 && *cycle % 40 == 20)
        .map(|(cycle, x)| cycle as isize * x)
        .sum()
}

/// Pixels drawn by the CRT: lit where the 3-wide sprite centred on X covers
/// the column being drawn.
pub fn render(program: &[Instruction]) -> String {
    let mut screen = String::with_capacity((SCREEN_WIDTH + 1) * SCREEN_HEIGHT);
    for (ind, x) in x_during_cycles(program)
        .into_iter()
        .take(SCREEN_WIDTH * SCREEN_HEIGHT)
        .enumerate()
    {
        let col = (ind % SCREEN_WIDTH) as isize;
        screen.push(if (col - x).abs() <= 1 { '#' } else { '.' });
        if ind % SCREEN_WIDTH == SCREEN_WIDTH - 1 {
            screen.push('\n');
        }
    }

    screen
}

pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>> {
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
                Instruction::try_from(s.as_str())
                    .with_context(|| format!("Failed to parse instruction in line {}.", ind + 1))
            })
        })
        .collect()
}
