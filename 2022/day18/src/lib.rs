use std::{
    collections::{HashSet, VecDeque},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    InvalidCubeText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCubeText(s) => write!(f, "Invalid text({}) for cube.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<&str> for Cube {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let coords = value
            .trim()
            .split(',')
            .map(|s| s.trim().parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidCubeText(value.to_string()))?;
        match coords[..] {
            [x, y, z] => Ok(Cube::new(x, y, z)),
            _ => Err(Error::InvalidCubeText(value.to_string())),
        }
    }
}

impl Cube {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    fn neighbors(&self) -> [Cube; 6] {
        let Cube { x, y, z } = *self;
        [
            Cube::new(x - 1, y, z),
            Cube::new(x + 1, y, z),
            Cube::new(x, y - 1, z),
            Cube::new(x, y + 1, z),
            Cube::new(x, y, z - 1),
            Cube::new(x, y, z + 1),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Droplet {
    cubes: HashSet<Cube>,
}

impl Droplet {
    pub fn new(cubes: impl IntoIterator<Item = Cube>) -> Self {
        Self {
            cubes: cubes.into_iter().collect(),
        }
    }

    /// Faces not shared with another cube, air pockets included.
    pub fn surface_area(&self) -> usize {
        self.cubes
            .iter()
            .flat_map(|cube| cube.neighbors())
            .filter(|n| !self.cubes.contains(n))
            .count()
    }

    /// Faces reachable by water flowing around the droplet.
    pub fn exterior_surface_area(&self) -> usize {
        let Some((min, max)) = self.bounds() else {
            return 0;
        };
        let in_box = |c: &Cube| {
            (min.x..=max.x).contains(&c.x)
                && (min.y..=max.y).contains(&c.y)
                && (min.z..=max.z).contains(&c.z)
        };

        let mut water = HashSet::from([min]);
        let mut queue = VecDeque::from([min]);
        let mut face_n = 0;
        while let Some(cur) = queue.pop_front() {
            for next in cur.neighbors() {
                if !in_box(&next) {
                    continue;
                }
                if self.cubes.contains(&next) {
                    face_n += 1;
                } else if water.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        debug!(water_n = water.len(), "water filled");

        face_n
    }

    /// Box enclosing every cube with one unit of air on each side.
    fn bounds(&self) -> Option<(Cube, Cube)> {
        let mut cubes = self.cubes.iter();
        let first = *cubes.next()?;
        let (min, max) = cubes.fold((first, first), |(min, max), c| {
            (
                Cube::new(min.x.min(c.x), min.y.min(c.y), min.z.min(c.z)),
                Cube::new(max.x.max(c.x), max.y.max(c.y), max.z.max(c.z)),
            )
        });

        Some((
            Cube::new(min.x - 1, min.y - 1, min.z - 1),
            Cube::new(max.x + 1, max.y + 1, max.z + 1),
        ))
    }
}

pub fn read_droplet<P: AsRef<Path>>(path: P) -> Result<Droplet> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut cubes = Vec::new();
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

        cubes.push(Cube::try_from(line.as_str())?);
    }

    Ok(Droplet::new(cubes))
}
