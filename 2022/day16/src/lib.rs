use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use common::floyd_warshall::{floyd_warshall, WeightedEdge};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const START_VALVE: &str = "AA";
pub const MAX_WORKING_VALVE_N: usize = 20;

#[derive(Debug)]
pub enum Error {
    InvalidValveText(String),
    NoStartValve,
    TooManyWorkingValves(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidValveText(s) => write!(f, "Invalid text({}) for valve.", s),
            Error::NoStartValve => write!(f, "No start valve({}) in scan.", START_VALVE),
            Error::TooManyWorkingValves(n) => write!(
                f,
                "Expect at most {} valves with positive flow rate, given {}.",
                MAX_WORKING_VALVE_N, n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ValveReport {
    name: String,
    flow_rate: u32,
    tunnels: Vec<String>,
}

impl TryFrom<&str> for ValveReport {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static VALVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (\w+(?:, \w+)*)",
            )
            .unwrap()
        });

        let caps = VALVE_PATTERN
            .captures(value)
            .ok_or(Error::InvalidValveText(value.to_string()))?;

        Ok(ValveReport {
            name: caps[1].to_string(),
            flow_rate: caps[2]
                .parse()
                .map_err(|_| Error::InvalidValveText(value.to_string()))?,
            tunnels: caps[3].split(", ").map(str::to_string).collect(),
        })
    }
}

/// Only valves worth opening are kept, together with the travel time between
/// every pair of them and from the start valve.
#[derive(Debug, Clone)]
pub struct Volcano {
    flow_rates: Vec<u32>,
    // Row and column `flow_rates.len()` belong to the start valve.
    distances: Vec<Option<u32>>,
}

impl Volcano {
    pub fn new(reports: &[ValveReport]) -> Result<Self, Error> {
        let names = reports.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        let edges = reports
            .iter()
            .flat_map(|r| {
                r.tunnels
                    .iter()
                    .map(|to| WeightedEdge::new(r.name.clone(), to.clone(), 1u32))
            })
            .collect::<Vec<_>>();
        let all_distances = floyd_warshall(&names, &edges);

        let start = reports
            .iter()
            .find(|r| r.name == START_VALVE)
            .ok_or(Error::NoStartValve)?;
        let mut valves = reports
            .iter()
            .filter(|r| r.flow_rate > 0)
            .collect::<Vec<_>>();
        if valves.len() > MAX_WORKING_VALVE_N {
            return Err(Error::TooManyWorkingValves(valves.len()));
        }
        valves.push(start);

        let mut distances = Vec::with_capacity(valves.len() * valves.len());
        for from in &valves {
            for to in &valves {
                distances.push(all_distances.cost(&from.name, &to.name));
            }
        }
        valves.pop();
        debug!(working_valve_n = valves.len(), "built volcano");

        Ok(Self {
            flow_rates: valves.iter().map(|v| v.flow_rate).collect(),
            distances,
        })
    }

    /// Most pressure one can release alone within `minutes`.
    pub fn max_pressure(&self, minutes: u32) -> u32 {
        let mut best = 0;
        self.search_best(self.start(), minutes, 0, 0, &mut best);

        best
    }

    /// Most pressure released within `minutes` by two workers opening
    /// disjoint sets of valves.
    pub fn max_pressure_in_pair(&self, minutes: u32) -> u32 {
        let valve_n = self.flow_rates.len();
        let mut best_by_set = vec![0; 1 << valve_n];
        self.search_all_sets(self.start(), minutes, 0, 0, &mut best_by_set);

        // Widen each entry to the best over all subsets of its set.
        for bit in 0..valve_n {
            for set in 0..best_by_set.len() {
                if set & (1 << bit) != 0 {
                    best_by_set[set] = best_by_set[set].max(best_by_set[set ^ (1 << bit)]);
                }
            }
        }

        let full = best_by_set.len() - 1;
        (0..=full)
            .map(|set| best_by_set[set] + best_by_set[full ^ set])
            .max()
            .unwrap_or(0)
    }

    fn search_best(&self, pos: usize, time_left: u32, opened: usize, released: u32, best: &mut u32) {
        *best = (*best).max(released);
        if released + self.gain_bound(pos, time_left, opened) <= *best {
            return;
        }

        for (next, next_time_left) in self.openable(pos, time_left, opened) {
            self.search_best(
                next,
                next_time_left,
                opened | (1 << next),
                released + self.flow_rates[next] * next_time_left,
                best,
            );
        }
    }

    fn search_all_sets(
        &self,
        pos: usize,
        time_left: u32,
        opened: usize,
        released: u32,
        best_by_set: &mut [u32],
    ) {
        best_by_set[opened] = best_by_set[opened].max(released);
        for (next, next_time_left) in self.openable(pos, time_left, opened) {
            self.search_all_sets(
                next,
                next_time_left,
                opened | (1 << next),
                released + self.flow_rates[next] * next_time_left,
                best_by_set,
            );
        }
    }

    /// Unopened valves that can still be reached and opened with time to
    /// spare, with the time left once each is open.
    fn openable(
        &self,
        pos: usize,
        time_left: u32,
        opened: usize,
    ) -> impl Iterator<Item = (usize, u32)> + '_ {
        (0..self.flow_rates.len())
            .filter(move |&valve| opened & (1 << valve) == 0)
            .filter_map(move |valve| {
                let cost = self.distance(pos, valve)? + 1;
                (cost < time_left).then(|| (valve, time_left - cost))
            })
    }

    /// What opening every remaining valve straight from `pos` would add.
    fn gain_bound(&self, pos: usize, time_left: u32, opened: usize) -> u32 {
        self.openable(pos, time_left, opened)
            .map(|(valve, valve_time_left)| self.flow_rates[valve] * valve_time_left)
            .sum()
    }

    fn start(&self) -> usize {
        self.flow_rates.len()
    }

    fn distance(&self, from: usize, to: usize) -> Option<u32> {
        self.distances[from * (self.flow_rates.len() + 1) + to]
    }
}

pub fn read_volcano<P: AsRef<Path>>(path: P) -> Result<Volcano> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut reports = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        reports.push(ValveReport::try_from(line.as_str())?);
    }

    Ok(Volcano::new(&reports)?)
}
