//! Error types for logscrub
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for logscrub operations
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Main error type for logscrub operations
#[derive(Error, Debug)]
pub enum ScrubError {
    /// Open, read, or write failed
    ///
    /// Display omits the path; per-file reports print it themselves.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("stream did not contain valid UTF-8 (invalid byte at offset {offset})")]
    Encoding { path: PathBuf, offset: usize },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// A configured method name is not a plain identifier
    #[error("invalid method name '{method}' - expected an identifier like 'log'")]
    InvalidMethod { method: String },

    /// Neither the command line nor the config named any file
    #[error("no files to process - pass paths or set `files` in the config")]
    NoFiles,
}

impl ScrubError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrubError::Io {
            path: path.into(),
            source,
        }
    }

    /// File the error is about, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScrubError::Io { path, .. } | ScrubError::Encoding { path, .. } => Some(path),
            ScrubError::InvalidConfig { file, .. } => Some(file),
            ScrubError::InvalidMethod { .. } | ScrubError::NoFiles => None,
        }
    }
}
