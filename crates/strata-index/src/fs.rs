//! File-backed staging area.
//!
//! The index is a plain text file, one `"<digest> <path>"` line per
//! staged entry, appended in staging order. Repository initialization
//! creates it empty; a missing file surfaces as a read failure.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entry::StagedEntry;
use crate::error::{IndexError, IndexResult};
use crate::traits::StagingArea;

/// Filesystem implementation of [`StagingArea`].
#[derive(Debug)]
pub struct FsStagingArea {
    /// Path to the index file (e.g. `.strata/index`).
    path: PathBuf,
}

impl FsStagingArea {
    /// Create a staging area over the given index file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_failed(&self, source: std::io::Error) -> IndexError {
        IndexError::ReadFailed {
            path: self.path.clone(),
            source,
        }
    }

    fn write_failed(&self, source: std::io::Error) -> IndexError {
        IndexError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

impl StagingArea for FsStagingArea {
    fn append(&self, entry: &StagedEntry) -> IndexResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_failed(e))?;
        writeln!(file, "{}", entry.to_line()).map_err(|e| self.write_failed(e))?;
        debug!(path = %entry.path, "staged entry appended");
        Ok(())
    }

    fn entries(&self) -> IndexResult<Vec<StagedEntry>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.read_failed(e))?;
        contents
            .lines()
            .enumerate()
            .map(|(i, line)| StagedEntry::parse_line(line, i + 1))
            .collect()
    }

    fn clear(&self) -> IndexResult<()> {
        fs::write(&self.path, "").map_err(|e| self.write_failed(e))?;
        debug!(index = %self.path.display(), "staging area cleared");
        Ok(())
    }
}
