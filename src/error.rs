use std::path::PathBuf;

use crate::WIDTH;

/// Errors reported for a move request.
///
/// A full column is not an error, see [`MoveOutcome::Ignored`](crate::MoveOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} out of range, columns must be between 0 and {}", WIDTH - 1)]
    InvalidColumn { column: usize },

    #[error("the round is over, start a new round before moving")]
    RoundOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
