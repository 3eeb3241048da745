use std::io;

use thiserror::Error;

/// Failure of one pipeline operation (import, generate or export).
///
/// Every variant renders as a single human-readable message; the session
/// that produced it is left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no valid records found in input")]
    Parse,

    #[error(
        "only {available} words are in the selected range but {requested} questions were requested"
    )]
    InsufficientData { available: usize, requested: usize },

    #[error("invalid value for {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("no vocabulary has been imported yet")]
    NoRecords,

    #[error("no test has been generated yet")]
    NoTest,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
