use std::path::PathBuf;
use thiserror::Error;

use balance_core::{OutcomeError, PlayerId};

#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("invalid match report: {0}")]
    Outcome(#[from] OutcomeError),
    #[error("player {0} is not in the roster")]
    UnknownPlayer(PlayerId),
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl LobbyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LobbyError::Io {
            path: path.into(),
            source,
        }
    }
}
