//! Error types for RELIS corpus analytics.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Corpus error at line {line}: {message}")]
    Corpus { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
