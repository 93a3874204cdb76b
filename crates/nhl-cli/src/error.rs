use std::path::PathBuf;

use nhl_persist::PersistError;
use nhl_script::{RunError, StackTableError};

/// Everything that can stop an `nhledit` run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("failed to parse config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: PersistError,
    },

    #[error("stack size table: {0}")]
    StackTable(#[from] StackTableError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error("failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
