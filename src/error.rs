use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::element::ElementKind;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error produced while converting TetGen output or loading a `.tetra` file.
///
/// Every variant carries the path (or stream name) it came from, and the
/// 1-based line number where one is known.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{}: file not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}: cannot read file: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: malformed header: {reason}", .path.display())]
    MalformedHeader {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{}:{line}: malformed row: {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{}: cannot write output: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: header declares {declared} {kind} rows but {found} were found", .path.display())]
    CountMismatch {
        path: PathBuf,
        kind: ElementKind,
        declared: i64,
        found: usize,
    },
}

impl ConvertError {
    /// Classify an error from opening an input file.
    pub(crate) fn open(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => ConvertError::FileNotFound { path },
            _ => ConvertError::FileUnreadable { path, source: err },
        }
    }
}
