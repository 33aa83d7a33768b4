use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Malformed day slot {slot:?}: {reason}")]
    MalformedDaySlot { slot: String, reason: String },
    #[error("Unknown day index: {0}")]
    UnknownDayIndex(usize),
    #[error("Malformed day sequence token: {0:?}")]
    MalformedSequence(String),
    #[error("Shape mismatch in {category:?}: expected {expected} day slots, got {got}")]
    ShapeMismatch { category: String, expected: usize, got: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FormatError {
    pub fn malformed_slot(slot: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDaySlot { slot: slot.to_string(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
