//! Error types for the simulation core

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config key `{key}` has invalid value {value:?}: {reason}")]
    Config {
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid terrain mesh: {0}")]
    InvalidMesh(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn config(key: &str, value: &str, reason: impl ToString) -> Self {
        Self::Config {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
