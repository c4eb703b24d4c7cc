use std::{
    collections::HashMap,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

pub const SMALL_DIR_LIMIT: usize = 100_000;
pub const DISK_SIZE: usize = 70_000_000;
pub const UPDATE_SIZE: usize = 30_000_000;

#[derive(Debug)]
pub enum Error {
    InvalidCommand(String),
    InvalidListingText(String),
    OutputWithoutListing(String),
    NoParentOfRoot,
    UnknownDirectory(String),
    FileOverDirectory(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCommand(s) => write!(f, "Invalid command({}).", s),
            Error::InvalidListingText(s) => write!(f, "Invalid text({}) for ls output.", s),
            Error::OutputWithoutListing(s) => {
                write!(f, "Output({}) appears without running ls.", s)
            }
            Error::NoParentOfRoot => write!(f, "Root directory has no parent."),
            Error::UnknownDirectory(s) => write!(f, "Unknown directory({}).", s),
            Error::FileOverDirectory(s) => {
                write!(f, "File({}) has the same name as a directory.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

type DirId = usize;

#[derive(Debug)]
struct Directory {
    parent: Option<DirId>,
    sub_dirs: HashMap<String, DirId>,
    files: HashMap<String, usize>,
}

impl Directory {
    fn new(parent: Option<DirId>) -> Self {
        Self {
            parent,
            sub_dirs: HashMap::new(),
            files: HashMap::new(),
        }
    }
}

/// Directory tree rebuilt from a terminal transcript.
#[derive(Debug)]
pub struct FileSystem {
    dirs: Vec<Directory>,
}

impl FileSystem {
    const ROOT: DirId = 0;

    /// Total size of every directory, indexed like the tree, root first.
    pub fn dir_sizes(&self) -> Vec<usize> {
        let mut sizes = self
            .dirs
            .iter()
            .map(|d| d.files.values().sum::<usize>())
            .collect::<Vec<_>>();
        // Children are always created after their parents.
        for id in (1..self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[id].parent {
                sizes[parent] += sizes[id];
            }
        }

        sizes
    }

    pub fn small_dirs_size(&self) -> usize {
        self.dir_sizes()
            .into_iter()
            .filter(|size| *size <= SMALL_DIR_LIMIT)
            .sum()
    }

    /// Size of the smallest directory whose removal frees enough space for
    /// the update.
    pub fn dir_to_free_size(&self) -> Option<usize> {
        let sizes = self.dir_sizes();
        let used = sizes[Self::ROOT];
        let free = DISK_SIZE.saturating_sub(used);
        if free >= UPDATE_SIZE {
            return Some(0);
        }

        let need = UPDATE_SIZE - free;
        debug!(used, need, "looking for a directory to delete");
        sizes.into_iter().filter(|size| *size >= need).min()
    }
}

#[derive(Debug)]
struct Terminal {
    fs: FileSystem,
    cwd: DirId,
    listing: bool,
}

impl Terminal {
    fn new() -> Self {
        Self {
            fs: FileSystem {
                dirs: vec![Directory::new(None)],
            },
            cwd: FileSystem::ROOT,
            listing: false,
        }
    }

    fn read_line(&mut self, text: &str) -> Result<(), Error> {
        if let Some(cmd) = text.strip_prefix("$ ") {
            self.listing = false;
            let mut parts = cmd.split_whitespace();
            return match (parts.next(), parts.next(), parts.next()) {
                (Some("cd"), Some(dir), None) => self.change_dir(dir),
                (Some("ls"), None, None) => {
                    self.listing = true;
                    Ok(())
                }
                _ => Err(Error::InvalidCommand(cmd.to_string())),
            };
        }

        if !self.listing {
            return Err(Error::OutputWithoutListing(text.to_string()));
        }

        let (kind, name) = text
            .split_once(' ')
            .filter(|(_, name)| !name.is_empty())
            .ok_or(Error::InvalidListingText(text.to_string()))?;
        if kind == "dir" {
            self.make_dir(name);
            Ok(())
        } else {
            let size = kind
                .parse::<usize>()
                .map_err(|_| Error::InvalidListingText(text.to_string()))?;
            self.touch(name, size)
        }
    }

    fn change_dir(&mut self, dir: &str) -> Result<(), Error> {
        self.cwd = match dir {
            "/" => FileSystem::ROOT,
            ".." => self.fs.dirs[self.cwd].parent.ok_or(Error::NoParentOfRoot)?,
            name => {
                if self.fs.dirs[self.cwd].files.contains_key(name) {
                    return Err(Error::UnknownDirectory(name.to_string()));
                }
                self.make_dir(name)
            }
        };

        Ok(())
    }

    fn make_dir(&mut self, name: &str) -> DirId {
        if let Some(&id) = self.fs.dirs[self.cwd].sub_dirs.get(name) {
            return id;
        }

        let id = self.fs.dirs.len();
        self.fs.dirs.push(Directory::new(Some(self.cwd)));
        self.fs.dirs[self.cwd].sub_dirs.insert(name.to_string(), id);
        id
    }

    fn touch(&mut self, name: &str, size: usize) -> Result<(), Error> {
        let cwd = &mut self.fs.dirs[self.cwd];
        if cwd.sub_dirs.contains_key(name) {
            return Err(Error::FileOverDirectory(name.to_string()));
        }
        cwd.files.insert(name.to_string(), size);

        Ok(())
    }
}

pub fn read_file_system<P: AsRef<Path>>(path: P) -> Result<FileSystem> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut terminal = Terminal::new();
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

        terminal
            .read_line(&line)
            .with_context(|| format!("Failed to replay terminal line {}.", ind + 1))?;
    }

    Ok(terminal.fs)
}
