//! Error types for chromix

use thiserror::Error;

/// Result type for chromix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chromix operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Buffer size mismatch between a batch source and destination
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// An RGB working space could not be constructed from its primaries
    #[error("Invalid RGB working space: {0}")]
    InvalidWorkingSpace(String),
}
