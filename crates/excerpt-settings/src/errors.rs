//! Errors raised while loading settings.
//!
//! A missing settings file is not an error (defaults apply), and bad
//! environment overrides are only logged. Everything here comes from a file
//! that exists but cannot be used.

use std::path::PathBuf;

use thiserror::Error;

/// Why a settings file could not be loaded.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file exists but could not be read.
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or does not match the settings shape.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A field parsed but is outside its accepted range.
    #[error("invalid settings value for {key}: {reason}")]
    InvalidValue {
        /// camelCase path of the field, e.g. `truncate.maxLength`.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
