//! Error types for colour transfer operations

use thiserror::Error;

/// Result type for colour transfer operations
pub type TransferResult<T> = Result<T, TransferError>;

/// Errors that can occur while preparing or running a colour transfer
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Image codec error: {0}")]
    Image(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
