//! File system errors

use std::path::Path;

use super::MergeError;

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> MergeError {
    MergeError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MergeError {
    MergeError::IoError {
        message: message.into(),
    }
}
