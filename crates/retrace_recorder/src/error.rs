//! Recorder error types

use thiserror::Error;

use crate::store::PathId;

/// Recorder-related errors
#[derive(Error, Debug)]
pub enum RecorderError {
    /// Operation named a path id that `new_path` never handed out
    #[error("Invalid path: {0} was never allocated")]
    InvalidPath(PathId),

    /// Replay requested before any sample was captured
    #[error("Nothing to replay: the path buffer is empty")]
    EmptyBufferReplay,

    /// Interchange text could not be written or read
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Result type for recorder operations
pub type Result<T> = std::result::Result<T, RecorderError>;
