use std::io;

use thiserror::Error;

/// Failures raised at the edges of the board: configuration, seed files and
/// user input. Store operations themselves never fail.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BoardError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
