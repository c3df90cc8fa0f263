//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`,
//! so a settings file only needs the fields it changes.

use excerpt_core::constants::{DEFAULT_CONTINUATION_MARKER, DEFAULT_MAX_LENGTH};
use excerpt_core::encoding::EncodingMode;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Largest budget accepted from a settings file or the environment.
pub const MAX_LENGTH_LIMIT: usize = 1_000_000;

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "truncate": { "maxLength": 140, "continuationMarker": "…" },
///   "logging": { "level": "info" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExcerptSettings {
    /// How fragments are truncated.
    pub truncate: TruncateSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl ExcerptSettings {
    /// Reject values that parsed but cannot be used.
    pub fn check_ranges(&self) -> Result<()> {
        let max_length = self.truncate.max_length;
        if max_length > MAX_LENGTH_LIMIT {
            return Err(SettingsError::InvalidValue {
                key: "truncate.maxLength",
                reason: format!("{max_length} exceeds {MAX_LENGTH_LIMIT}"),
            });
        }
        Ok(())
    }

    /// Correct values that have a harmless fallback.
    ///
    /// Called automatically during loading, after env overrides.
    pub fn validate(&mut self) {
        if self.logging.level.trim().is_empty() {
            tracing::warn!("empty logging level, using default");
            self.logging.level = LoggingSettings::default().level;
        }
    }
}

/// Truncation defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TruncateSettings {
    /// Approximate visible character budget.
    pub max_length: usize,
    /// Appended after the cut node's text.
    pub continuation_marker: String,
    /// Normalization applied to input before parsing.
    pub encoding: EncodingMode,
}

impl Default for TruncateSettings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            encoding: EncodingMode::Preserve,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: excerpt_core::logging::DEFAULT_LEVEL.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
