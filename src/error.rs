//! Error types for Report Desk.

use thiserror::Error;

/// Common error type for Report Desk.
#[derive(Error, Debug)]
pub enum DeskError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A folder id that is already present somewhere in the tree.
    #[error("duplicate folder id: {0}")]
    DuplicateId(String),

    /// Malformed seed document.
    #[error("seed error: {0}")]
    Seed(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DeskError {
    fn from(e: serde_json::Error) -> Self {
        DeskError::Seed(e.to_string())
    }
}

impl DeskError {
    /// Whether this error is a miss the UI treats as a silent no-op.
    pub fn is_silent(&self) -> bool {
        matches!(self, DeskError::NotFound(_) | DeskError::Validation(_))
    }
}

/// Result type alias for Report Desk operations.
pub type Result<T> = std::result::Result<T, DeskError>;
