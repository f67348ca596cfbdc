use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while resolving, scanning or writing.
///
/// Every variant is fatal to the run. Each one carries the path that caused it
/// so the CLI can report it without extra context.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("cannot walk directory {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid translation function name: \"{0}\"")]
    InvalidFunction(String),
}

pub type ScanResult<T> = Result<T, ScanError>;
