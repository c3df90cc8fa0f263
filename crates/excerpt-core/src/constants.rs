//! Defaults shared across crates.

/// Default visible-text budget, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 15;

/// Default continuation marker appended at the cut point.
pub const DEFAULT_CONTINUATION_MARKER: &str = "...";
