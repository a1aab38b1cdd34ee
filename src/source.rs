//! Filesystem access seam for the wrapping pipeline.
//!
//! The pipeline never calls `std::fs` directly; it goes through
//! [`SourceReader`] so tests can substitute an in-memory implementation.

use std::fs;
use std::io;
use std::path::Path;

/// Read-only access to candidate input files.
pub trait SourceReader {
    /// Whether `path` names an existing regular file. A directory does not
    /// count, matching the behavior of a plain file-exists check.
    fn is_file(&self, path: &Path) -> bool;

    /// Read the entire contents of `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `Err` on permission or I/O failures, or if the contents are
    /// not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`SourceReader`] backed by the real filesystem.
pub struct FsReader;

impl SourceReader for FsReader {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
