//! # excerpt-settings
//!
//! Configuration management with layered sources.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`ExcerptSettings::default()`]
//! 2. **User file** — `~/.excerpt/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `EXCERPT_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use excerpt_settings::load_settings;
//!
//! let settings = load_settings().unwrap_or_default();
//! println!("budget: {}", settings.truncate.max_length);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;
