//! Character-aware string helpers.
//!
//! Visible text is measured in Unicode scalar values, not bytes. Slicing a
//! `&str` by a character count needs the byte offset of that character, which
//! these helpers compute without ever landing inside a multi-byte sequence.

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `n` characters of `s`.
///
/// Returns `s` unchanged when it has `n` characters or fewer.
///
/// # Examples
///
/// ```
/// use excerpt_core::text::prefix_chars;
///
/// assert_eq!(prefix_chars("hello", 3), "hel");
/// assert_eq!(prefix_chars("café au lait", 4), "café");
/// assert_eq!(prefix_chars("hi", 10), "hi");
/// ```
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
