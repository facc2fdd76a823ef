//! Error types and handling for mac-latest-merge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest loading and reconciliation errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod manifest;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for manifest merge operations
#[derive(Error, Diagnostic, Debug)]
pub enum MergeError {
    // Manifest errors
    #[error("Missing YAML file: {path}")]
    #[diagnostic(
        code(mac_latest_merge::manifest::not_found),
        help("Check that both macOS build jobs uploaded their latest-mac.yml")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(mac_latest_merge::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(mac_latest_merge::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("YAML must contain a mapping: {path} (found {kind})")]
    #[diagnostic(
        code(mac_latest_merge::manifest::invalid),
        help("A latest-mac.yml manifest is a top-level mapping with version, files and releaseDate")
    )]
    InvalidManifest { path: String, kind: String },

    #[error("Version mismatch between macOS builds ({intel} vs {arm})")]
    #[diagnostic(
        code(mac_latest_merge::manifest::version_mismatch),
        help("Both builds must be produced from the same release version")
    )]
    VersionMismatch { intel: String, arm: String },

    #[error("Failed to serialize merged manifest: {reason}")]
    #[diagnostic(code(mac_latest_merge::manifest::serialize_failed))]
    SerializeFailed { reason: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mac_latest_merge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mac_latest_merge::fs::io_error))]
    IoError { message: String },
}

impl From<serde_yaml::Error> for MergeError {
    fn from(err: serde_yaml::Error) -> Self {
        MergeError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MergeError>;
