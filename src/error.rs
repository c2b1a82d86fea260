use thiserror::Error;

#[derive(Debug, Error)]
pub enum HyfiError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Invalid option at position {index}: {reason}")]
    InvalidOption { index: usize, reason: String },

    #[error("Duplicate option value: {0}")]
    DuplicateOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
