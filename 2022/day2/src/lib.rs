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
    InvalidRoundText(String),
    InvalidOpponentCode(String),
    InvalidResponseCode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRoundText(s) => write!(f, "Invalid text({}) for round.", s),
            Error::InvalidOpponentCode(s) => write!(f, "Invalid opponent code({}).", s),
            Error::InvalidResponseCode(s) => write!(f, "Invalid response code({}).", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn from_ind(ind: usize) -> Self {
        match ind % 3 {
            0 => Shape::Rock,
            1 => Shape::Paper,
            _ => Shape::Scissors,
        }
    }

    fn ind(&self) -> usize {
        match self {
            Shape::Rock => 0,
            Shape::Paper => 1,
            Shape::Scissors => 2,
        }
    }

    pub fn score(&self) -> usize {
        self.ind() + 1
    }

    pub fn beats(&self) -> Shape {
        Shape::from_ind(self.ind() + 2)
    }

    pub fn beaten_by(&self) -> Shape {
        Shape::from_ind(self.ind() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    pub fn of(mine: Shape, theirs: Shape) -> Self {
        if mine == theirs {
            Outcome::Draw
        } else if mine.beats() == theirs {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn score(&self) -> usize {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// The shape to play against `theirs` to end up with this outcome.
    pub fn pick_against(&self, theirs: Shape) -> Shape {
        match self {
            Outcome::Lose => theirs.beats(),
            Outcome::Draw => theirs,
            Outcome::Win => theirs.beaten_by(),
        }
    }
}

/// One line of the strategy guide. What the second column means is up to the
/// caller, so it's kept as the raw index 0..=2.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    opponent: Shape,
    response: usize,
}

impl TryFrom<&str> for Round {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut parts = value.split_whitespace();
        let (Some(opponent_text), Some(response_text), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidRoundText(value.to_string()));
        };
        let opponent = match opponent_text {
            "A" => Shape::Rock,
            "B" => Shape::Paper,
            "C" => Shape::Scissors,
            other => return Err(Error::InvalidOpponentCode(other.to_string())),
        };
        let response = match response_text {
            "X" => 0,
            "Y" => 1,
            "Z" => 2,
            other => return Err(Error::InvalidResponseCode(other.to_string())),
        };

        Ok(Round { opponent, response })
    }
}

impl Round {
    /// Score when the second column names the shape to play.
    pub fn score_as_shape(&self) -> usize {
        let mine = Shape::from_ind(self.response);
        mine.score() + Outcome::of(mine, self.opponent).score()
    }

    /// Score when the second column names how the round must end.
    pub fn score_as_outcome(&self) -> usize {
        let outcome = match self.response {
            0 => Outcome::Lose,
            1 => Outcome::Draw,
            _ => Outcome::Win,
        };
        outcome.pick_against(self.opponent).score() + outcome.score()
    }
}

pub fn read_rounds<P: AsRef<Path>>(path: P) -> Result<Vec<Round>> {
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
                Round::try_from(s.as_str())
                    .with_context(|| format!("Failed to parse round in line {}.", ind + 1))
            })
        })
        .collect()
}
