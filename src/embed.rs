//! The wrapping pipeline: resolve an input file and produce the embeddable
//! text.
//!
//! Split out from the CLI so the whole load-and-wrap sequence can be
//! exercised against in-memory fixtures without touching the filesystem.

use crate::source::SourceReader;
use crate::wrap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A user-facing failure while loading the input file.
///
/// Argument-shape errors never reach this type; they are rejected by the
/// CLI layer before the pipeline runs.
#[derive(Debug)]
pub enum EmbedError {
    /// The path does not name an existing regular file.
    NotFound(PathBuf),
    /// The file exists but could not be read as text.
    Read {
        /// The offending path, included in the diagnostic.
        path: PathBuf,
        /// The underlying failure (permissions, I/O, invalid UTF-8).
        source: io::Error,
    },
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            EmbedError::Read { path, source } => {
                write!(f, "could not read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmbedError::NotFound(_) => None,
            EmbedError::Read { source, .. } => Some(source),
        }
    }
}

/// Load `path` through `reader` and wrap its lines for embedding.
///
/// The file is read fully into memory before the transform runs; the caller
/// decides where the result goes.
///
/// # Errors
///
/// Returns `Err` if `path` does not name an existing regular file, or if
/// the file cannot be read as UTF-8 text. No read is attempted for a
/// missing file.
pub fn embed_file<R: SourceReader>(path: &Path, reader: &R) -> Result<String, EmbedError> {
    if !reader.is_file(path) {
        return Err(EmbedError::NotFound(path.to_path_buf()));
    }

    let raw = reader
        .read_to_string(path)
        .map_err(|source| EmbedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(wrap::wrap_lines(&raw))
}
