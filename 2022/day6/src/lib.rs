use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    NonAsciiSignal,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NonAsciiSignal => write!(f, "Expect only ASCII characters in datastream."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub const PACKET_MARKER_LEN: usize = 4;
pub const MESSAGE_MARKER_LEN: usize = 14;

#[derive(Debug)]
pub struct Datastream {
    signal: Vec<u8>,
}

impl Datastream {
    pub fn new(text: &str) -> Result<Self, Error> {
        if !text.is_ascii() {
            return Err(Error::NonAsciiSignal);
        }

        Ok(Self {
            signal: text.trim().as_bytes().to_vec(),
        })
    }

    /// Count of characters read when the last `marker_len` of them are all
    /// different, i.e. the position right after the first marker.
    pub fn marker_end(&self, marker_len: usize) -> Option<usize> {
        if marker_len == 0 {
            return Some(0);
        }

        let mut counts = [0usize; 128];
        let mut distinct_n = 0;
        for (ind, &c) in self.signal.iter().enumerate() {
            counts[c as usize] += 1;
            if counts[c as usize] == 1 {
                distinct_n += 1;
            }
            if ind >= marker_len {
                let old = self.signal[ind - marker_len] as usize;
                counts[old] -= 1;
                if counts[old] == 0 {
                    distinct_n -= 1;
                }
            }
            if distinct_n == marker_len {
                return Some(ind + 1);
            }
        }

        None
    }
}

pub fn read_datastream<P: AsRef<Path>>(path: P) -> Result<Datastream> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    Ok(Datastream::new(&text)?)
}
