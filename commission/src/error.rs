use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommissionError {
    #[error("employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("tier not found: {0}")]
    TierNotFound(String),

    #[error("tier {id} is inverted: from {from} > to {to}")]
    InvertedTier { id: String, from: u64, to: u64 },

    #[error("tier {id} starts at {from}, overlapping the previous tier ending at {prev_to}")]
    OverlappingTiers { id: String, from: u64, prev_to: u64 },

    #[error("tiered commission requires at least one tier")]
    EmptyTiers,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, CommissionError>;
