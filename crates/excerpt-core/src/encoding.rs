//! Input encoding normalization.
//!
//! Text can optionally be folded to plain ASCII. Each non-ASCII character is
//! replaced by its closest ASCII transliteration (`é` → `e`, `—` → `--`);
//! characters with no transliteration are dropped.
//!
//! Some characters fold to markup syntax (fullwidth `＜` → `<`), so this must
//! only ever see decoded text content, never raw markup. Folding changes the
//! visible text length the truncation budget is measured against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How text content is normalized before it is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Pass input through unchanged.
    #[default]
    Preserve,
    /// Transliterate to ASCII, dropping what cannot be represented.
    Ascii,
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

/// Returned when a string does not name an [`EncodingMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding mode: {0} (expected \"preserve\" or \"ascii\")")]
pub struct ParseEncodingModeError(pub String);

impl FromStr for EncodingMode {
    type Err = ParseEncodingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "ascii" => Ok(Self::Ascii),
            _ => Err(ParseEncodingModeError(s.to_string())),
        }
    }
}

/// Normalize text content according to `mode`.
///
/// Borrows when nothing changes, which is always the case for
/// [`EncodingMode::Preserve`] and for pure-ASCII input.
pub fn normalize(input: &str, mode: EncodingMode) -> std::borrow::Cow<'_, str> {
    match mode {
        EncodingMode::Ascii if !input.is_ascii() => {
            let mut out = String::with_capacity(input.len());
            for c in input.chars() {
                if c.is_ascii() {
                    out.push(c);
                } else if let Some(ascii) = deunicode::deunicode_char(c) {
                    out.push_str(ascii);
                }
            }
            std::borrow::Cow::Owned(out)
        }
        _ => std::borrow::Cow::Borrowed(input),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
