//! Error types for the moral spectrum core engine

use thiserror::Error;

/// Main error type for the moral spectrum core engine
///
/// Errors only surface at construction boundaries: parsing labels and
/// loading a roster. Reactions, timelines and spectra never fail.
#[derive(Error, Debug)]
pub enum MoralSpectrumError {
    #[error("Unknown belief category: {0}")]
    UnknownBelief(String),

    #[error("Unknown event category: {0}")]
    UnknownEvent(String),

    #[error("Unknown outcome: {0}")]
    UnknownOutcome(String),

    #[error("Moral score out of range [0, 100]: {0}")]
    ScoreOutOfRange(i32),

    #[error("Duplicate individual id: {0}")]
    DuplicateId(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for MoralSpectrumError {
    fn from(err: serde_json::Error) -> Self {
        MoralSpectrumError::DeserializationError(err.to_string())
    }
}

/// Result type alias for the moral spectrum core engine
pub type Result<T> = std::result::Result<T, MoralSpectrumError>;
