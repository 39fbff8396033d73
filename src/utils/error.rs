use std::fmt;
use thiserror::Error;

/// Loading stage a fetch failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transfers,
    Teams,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Transfers => f.write_str("transfers"),
            Stage::Teams => f.write_str("teams"),
        }
    }
}

/// Failure of a single endpoint read.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered with status {status}")]
    Status { status: u16 },

    #[error("unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("source unavailable: {message}")]
    Unavailable { message: String },
}

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Failed to fetch {stage}: {source}")]
    FetchFailure {
        stage: Stage,
        #[source]
        source: FetchError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BoardError {
    pub fn fetch(stage: Stage, source: FetchError) -> Self {
        BoardError::FetchFailure { stage, source }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            BoardError::FetchFailure { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BoardError::ConfigError { .. } | BoardError::InvalidConfigValueError { .. }
        )
    }

    /// Short message for terminal output.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BoardError::FetchFailure { stage, source } => match source {
                FetchError::Transport(_) => {
                    format!("Could not reach the {} endpoint", stage)
                }
                FetchError::Status { status } => {
                    format!("The {} endpoint answered with HTTP {}", stage, status)
                }
                FetchError::Decode(_) => {
                    format!("The {} endpoint returned data in an unexpected shape", stage)
                }
                FetchError::Unavailable { message } => {
                    format!("The {} source is unavailable: {}", stage, message)
                }
            },
            BoardError::IoError(e) => format!("File operation failed: {}", e),
            BoardError::ConfigError { message } => format!("Configuration problem: {}", message),
            BoardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
pub type FetchResult<T> = std::result::Result<T, FetchError>;
