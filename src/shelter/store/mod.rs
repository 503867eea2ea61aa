//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the persistence gateway
//! (`commands::load` / `commands::save`) and wherever the two data files
//! actually live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, two flat files in a data directory
//! - [`memory::InMemoryStore`]: In-memory storage for tests, no persistence
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── pets.txt       # one encoded pet per line (available pets only)
//! ├── adopters.txt   # one encoded adopter per line, owned pet ids inlined
//! └── config.json    # optional, renames the two files above
//! ```
//!
//! Files are written as UTF-8. Reading never fails on byte content: a line
//! that is not valid UTF-8 is decoded as Latin-1 instead.

use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFile {
    Pets,
    Adopters,
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFile::Pets => f.write_str("pet"),
            DataFile::Adopters => f.write_str("adopter"),
        }
    }
}

/// Abstract interface for the two line-oriented data files.
pub trait DataStore {
    /// Read every line of a data file, without line terminators.
    /// Returns `Ok(None)` if the file does not exist.
    fn read_lines(&self, file: DataFile) -> Result<Option<Vec<String>>>;

    /// Replace the whole file with the given lines. Each line carries its own
    /// terminator.
    fn write_lines(&mut self, file: DataFile, lines: &[String]) -> Result<()>;

    /// Where the file lives, for messages.
    fn location(&self, file: DataFile) -> PathBuf;
}

/// Splits raw file bytes into lines, decoding each one independently.
pub(crate) fn decode_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = bytes.split(|&b| b == b'\n').map(decode_line).collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

fn decode_line(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(line) => line.to_string(),
        Err(_) => raw.iter().map(|&b| char::from(b)).collect(),
    }
}
