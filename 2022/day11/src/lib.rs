use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    InvalidMonkeyText(String),
    InvalidItemText(String),
    InvalidOperationText(String),
    UnknownTargetMonkey(usize, usize),
    ZeroDivisor(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMonkeyText(s) => write!(f, "Invalid text({}) for monkey.", s),
            Error::InvalidItemText(s) => write!(f, "Invalid text({}) for item worry level.", s),
            Error::InvalidOperationText(s) => write!(f, "Invalid text({}) for operation.", s),
            Error::UnknownTargetMonkey(from, to) => {
                write!(f, "Monkey {} throws to unknown monkey {}.", from, to)
            }
            Error::ZeroDivisor(id) => write!(f, "Monkey {} tests divisibility by zero.", id),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Const(u64),
}

impl Operand {
    fn value(&self, old: u64) -> u64 {
        match self {
            Operand::Old => old,
            Operand::Const(n) => *n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    fn apply(&self, old: u64) -> u64 {
        match self {
            Operation::Add(operand) => old + operand.value(old),
            Operation::Mul(operand) => old * operand.value(old),
        }
    }
}

impl TryFrom<&str> for Operation {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut parts = value.split_whitespace();
        let (Some("old"), Some(op), Some(operand_text), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidOperationText(value.to_string()));
        };
        let operand = match operand_text {
            "old" => Operand::Old,
            n => n
                .parse::<u64>()
                .map(Operand::Const)
                .map_err(|_| Error::InvalidOperationText(value.to_string()))?,
        };

        match op {
            "+" => Ok(Operation::Add(operand)),
            "*" => Ok(Operation::Mul(operand)),
            _ => Err(Error::InvalidOperationText(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    true_target: usize,
    false_target: usize,
}

impl TryFrom<&str> for Monkey {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static MONKEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(concat!(
                r"Monkey (\d+):\s*",
                r"Starting items:([\d, ]*)\s*",
                r"Operation: new = ([^\n]+?)\s*\n\s*",
                r"Test: divisible by (\d+)\s*",
                r"If true: throw to monkey (\d+)\s*",
                r"If false: throw to monkey (\d+)",
            ))
            .unwrap()
        });

        let caps = MONKEY_PATTERN
            .captures(value)
            .ok_or(Error::InvalidMonkeyText(value.to_string()))?;
        let number = |ind: usize| {
            caps[ind]
                .parse::<u64>()
                .map_err(|_| Error::InvalidMonkeyText(value.to_string()))
        };
        let items = caps[2]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| Error::InvalidItemText(s.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let id = number(1)? as usize;
        let divisor = number(4)?;
        if divisor == 0 {
            return Err(Error::ZeroDivisor(id));
        }

        Ok(Monkey {
            items,
            operation: Operation::try_from(&caps[3])?,
            divisor,
            true_target: number(5)? as usize,
            false_target: number(6)? as usize,
        })
    }
}

impl Monkey {
    fn target(&self, worry: u64) -> usize {
        if worry % self.divisor == 0 {
            self.true_target
        } else {
            self.false_target
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    /// Worry level is divided by three after each inspection.
    DivideByThree,
    /// No relief. Worry levels are reduced modulo the product of all
    /// divisors, which keeps every divisibility test intact.
    Modular,
}

#[derive(Debug, Clone)]
pub struct Troop {
    monkeys: Vec<Monkey>,
    inspected_counts: Vec<usize>,
}

impl Troop {
    pub fn new(monkeys: Vec<Monkey>) -> Result<Self, Error> {
        let monkey_n = monkeys.len();
        for (id, monkey) in monkeys.iter().enumerate() {
            for target in [monkey.true_target, monkey.false_target] {
                if target >= monkey_n || target == id {
                    return Err(Error::UnknownTargetMonkey(id, target));
                }
            }
        }

        Ok(Self {
            inspected_counts: vec![0; monkey_n],
            monkeys,
        })
    }

    pub fn play(&mut self, round_n: usize, relief: Relief) {
        let modulus = self.monkeys.iter().map(|m| m.divisor).product::<u64>();
        for _ in 0..round_n {
            for id in 0..self.monkeys.len() {
                let items = std::mem::take(&mut self.monkeys[id].items);
                self.inspected_counts[id] += items.len();
                for item in items {
                    let monkey = &self.monkeys[id];
                    let worry = match relief {
                        Relief::DivideByThree => monkey.operation.apply(item) / 3,
                        Relief::Modular => monkey.operation.apply(item) % modulus,
                    };
                    let target = monkey.target(worry);
                    self.monkeys[target].items.push(worry);
                }
            }
        }
        debug!(counts = ?self.inspected_counts, "rounds played");
    }

    /// Product of the inspection counts of the two most active monkeys.
    pub fn monkey_business(&self) -> usize {
        let mut counts = self.inspected_counts.clone();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts.iter().take(2).product()
    }
}

pub fn read_troop<P: AsRef<Path>>(path: P) -> Result<Troop> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let monkeys = text
        .split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(ind, s)| {
            Monkey::try_from(s).with_context(|| format!("Failed to parse monkey #{}.", ind))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Troop::new(monkeys)?)
}
