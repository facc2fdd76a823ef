//! Manifest errors

use std::path::Path;

use super::MergeError;

/// Creates a manifest not found error
pub fn not_found(path: &Path) -> MergeError {
    MergeError::ManifestNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a manifest read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> MergeError {
    MergeError::ManifestReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> MergeError {
    MergeError::ManifestParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error for a document that is not a mapping
pub fn invalid(path: &Path, kind: impl Into<String>) -> MergeError {
    MergeError::InvalidManifest {
        path: path.display().to_string(),
        kind: kind.into(),
    }
}

/// Creates a version mismatch error
pub fn version_mismatch(intel: impl Into<String>, arm: impl Into<String>) -> MergeError {
    MergeError::VersionMismatch {
        intel: intel.into(),
        arm: arm.into(),
    }
}
