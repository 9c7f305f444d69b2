//! Error types for burn.
//!
//! Every operation returns [`Result`]. Whether a failure is reported and
//! skipped or aborts the process is decided by the CLI layer, not here.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Gather(#[from] GatherError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while reading local artifacts.
#[derive(Error, Debug)]
pub enum GatherError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("could not determine home directory")]
    HomeNotFound,

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' has no Credentials object", .0.display())]
    MissingCredentials(PathBuf),
}

/// Failures while talking to AWS.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{operation} failed: {message}")]
    Sdk {
        operation: &'static str,
        message: String,
    },

    #[error("response missing field: {0}")]
    MissingField(&'static str),

    #[error("aws CLI not found on PATH")]
    CliNotFound,

    #[error("aws CLI exited with {status}: {stderr}")]
    CliFailed { status: String, stderr: String },

    #[error("invalid user-data: {0}")]
    Decode(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("instance metadata disabled by {0}")]
    MetadataDisabled(&'static str),

    #[error("{0} requires the `aws` feature")]
    Unsupported(&'static str),
}

impl GatherError {
    /// Map an I/O failure on `path` to `NotFound` or `Read`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Read { path, source }
        }
    }
}

impl ProbeError {
    pub fn sdk(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Sdk {
            operation,
            message: err.to_string(),
        }
    }
}

impl Error {
    /// True when the underlying cause is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Gather(GatherError::NotFound(_)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
