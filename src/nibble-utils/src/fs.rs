//! Whole-file byte transfer used by the bit stream types.
//!
//! Failures carry the offending path so callers can report them
//! without having to thread it through separately.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that may occur when moving bytes between memory and a file.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened or read in full.
    #[error("failed to read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be created or written in full.
    #[error("failed to write file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Gets the path of the file the failed operation targeted.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Gets the [`io::ErrorKind`] of the underlying I/O failure.
    #[inline]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}

/// Reads the entire contents of the file at `path` into a byte vector.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| FileError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Writes `bytes` to the file at `path`, replacing any previous contents.
pub fn write_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::write(path, bytes).map_err(|source| FileError::Write {
        path: path.to_owned(),
        source,
    })
}
