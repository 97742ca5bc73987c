use thiserror::Error;

/// Errors raised by the fallible surfaces of the crate.
///
/// Problem and quest generation never fail; these cover settings loading,
/// theme parsing and progress tracking.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("invalid number range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("number range {min}..={max} exceeds the operand limit of ±{limit}")]
    RangeOutOfBounds { min: i64, max: i64, limit: i64 },

    #[error("multiplication table {0} is outside 1..=10")]
    InvalidTable(u32),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("no active quest for theme {0}")]
    NoActiveQuest(String),

    #[error("quest {found} is not the active quest {expected}")]
    QuestMismatch { expected: String, found: String },

    #[error("invalid progress snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrillError>;
