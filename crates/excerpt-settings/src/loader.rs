//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`ExcerptSettings::default()`]
//! 2. If `~/.excerpt/settings.json` exists, deep-merge user values over defaults
//! 3. Apply `EXCERPT_*` environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use excerpt_core::encoding::EncodingMode;
use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::{ExcerptSettings, MAX_LENGTH_LIMIT};

/// Env var overriding `truncate.maxLength`.
pub const ENV_MAX_LENGTH: &str = "EXCERPT_MAX_LENGTH";
/// Env var overriding `truncate.continuationMarker`.
pub const ENV_CONTINUATION_MARKER: &str = "EXCERPT_CONTINUATION_MARKER";
/// Env var overriding `truncate.encoding`.
pub const ENV_ENCODING: &str = "EXCERPT_ENCODING";
/// Env var overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "EXCERPT_LOG_LEVEL";

/// Resolve the path to the settings file (`~/.excerpt/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".excerpt").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<ExcerptSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON or an out-of-range value, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<ExcerptSettings> {
    let mut settings = read_settings_file(path)?;
    apply_env_overrides(&mut settings);
    settings.validate();
    Ok(settings)
}

/// Read and deep-merge a settings file over defaults, without env overrides.
pub fn read_settings_file(path: &Path) -> Result<ExcerptSettings> {
    let defaults = serde_json::to_value(ExcerptSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let settings: ExcerptSettings = serde_json::from_value(merged)?;
    settings.check_ranges()?;
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `EXCERPT_*` environment variable overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut ExcerptSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`.
///
/// Each value has strict parsing rules; invalid values are ignored with a
/// warning so the file/default value stays in effect. Empty values count as
/// unset.
pub fn apply_overrides<F>(settings: &mut ExcerptSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(val) = read(ENV_MAX_LENGTH) {
        match parse_usize_range(&val, 0, MAX_LENGTH_LIMIT) {
            Some(n) => settings.truncate.max_length = n,
            None => tracing::warn!(key = ENV_MAX_LENGTH, value = %val, "invalid length, ignoring"),
        }
    }
    if let Some(val) = read(ENV_CONTINUATION_MARKER) {
        settings.truncate.continuation_marker = val;
    }
    if let Some(val) = read(ENV_ENCODING) {
        match val.parse::<EncodingMode>() {
            Ok(mode) => settings.truncate.encoding = mode,
            Err(e) => tracing::warn!(key = ENV_ENCODING, error = %e, "invalid encoding, ignoring"),
        }
    }
    if let Some(val) = read(ENV_LOG_LEVEL) {
        settings.logging.level = val;
    }
}

/// Parse a string as a `usize` within a range.
pub fn parse_usize_range(val: &str, min: usize, max: usize) -> Option<usize> {
    let n: usize = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
