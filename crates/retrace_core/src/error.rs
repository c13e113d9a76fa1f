//! Core error types

use thiserror::Error;

/// Errors raised while parsing input descriptions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Key name has no known key code
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Key binding string is malformed
    #[error("Invalid key binding: {0}")]
    InvalidBinding(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
