//! Entry points: parse, walk, prune, serialize.
//!
//! Fragments are parsed with `scraper`, which wraps them in a synthetic
//! `<html>` container. The walk starts at the container's first child and the
//! output is the container's inner HTML, so the wrapper never shows up in the
//! result.
//!
//! Encoding normalization runs on parsed text nodes, after parsing, so it can
//! change what text says but never what elements exist.

use std::borrow::Cow;

pub use excerpt_core::constants::{DEFAULT_CONTINUATION_MARKER, DEFAULT_MAX_LENGTH};
use excerpt_core::encoding::{self, EncodingMode};
use scraper::Html;
use tracing::{debug, debug_span};

use crate::policy::TruncationPolicy;
use crate::prune::PruneCollector;
use crate::tree::DomTree;
use crate::walker::walk;

/// Options for [`truncate_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Approximate visible character budget.
    pub max_length: usize,
    /// Appended after the cut node's text.
    pub continuation_marker: String,
    /// Normalization applied to the input before parsing.
    pub encoding: EncodingMode,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            encoding: EncodingMode::Preserve,
        }
    }
}

/// Result of [`truncate_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Serialized fragment.
    pub html: String,
    /// Whether the budget was exceeded and a cut was made.
    pub truncated: bool,
    /// Text length counted up to and including the cut node, before cutting.
    pub visible_length: usize,
    /// Number of nodes marked for removal after the cut.
    pub pruned: usize,
}

/// Truncate `markup` to roughly `max_length` visible characters.
///
/// ```
/// use excerpt_html::truncate;
///
/// let out = truncate("<p>Hi</p><p>there friend</p>", 4, "...");
/// assert_eq!(out, "<p>Hi</p><p>there friend...</p>");
/// ```
pub fn truncate(markup: &str, max_length: usize, continuation_marker: &str) -> String {
    let options = TruncateOptions {
        max_length,
        continuation_marker: continuation_marker.to_string(),
        ..TruncateOptions::default()
    };
    truncate_with(markup, &options).html
}

/// Truncate `markup` with explicit options and report what happened.
pub fn truncate_with(markup: &str, options: &TruncateOptions) -> Truncation {
    let span = debug_span!(
        "excerpt.truncate",
        input_len = markup.len(),
        max_length = options.max_length
    );
    let _guard = span.enter();

    let mut document = Html::parse_fragment(markup);
    let container = document.root_element().id();
    let start = document.tree.first_child(container);

    if let Some(start) = start {
        normalize_text(&mut document.tree, start, options.encoding);
    }

    let mut policy = TruncationPolicy::new(options.max_length, options.continuation_marker.as_str());
    let mut pruner = PruneCollector::new();

    if let Some(start) = start {
        walk(&mut document.tree, start, |tree, id| {
            policy.visit(tree, id, &mut pruner);
        });
    }

    let pruned = pruner.execute(&mut document.tree);
    let html = document.root_element().inner_html();

    debug!(
        truncated = policy.is_truncating(),
        visible_length = policy.running_length(),
        pruned,
        output_len = html.len(),
        "fragment truncated"
    );

    Truncation {
        html,
        truncated: policy.is_truncating(),
        visible_length: policy.running_length(),
        pruned,
    }
}

/// Rewrite every text node reachable from `start` through `mode`.
///
/// Attribute values and tag names are left alone.
fn normalize_text<T: DomTree + ?Sized>(tree: &mut T, start: T::Id, mode: EncodingMode) {
    if mode == EncodingMode::Preserve {
        return;
    }
    walk(tree, start, |tree, id| {
        let folded = tree.text(id).and_then(|text| match encoding::normalize(text, mode) {
            Cow::Owned(folded) => Some(folded),
            Cow::Borrowed(_) => None,
        });
        if let Some(folded) = folded {
            tree.set_text(id, folded);
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn t(markup: &str, max_length: usize) -> String {
        truncate(markup, max_length, "...")
    }

    // ── documented examples ─────────────────────────────────────────

    #[test]
    fn single_paragraph() {
        assert_eq!(t("<p>Hello world</p>", 5), "<p>Hello wo...</p>");
    }

    #[test]
    fn cut_in_second_paragraph_keeps_it() {
        assert_eq!(
            t("<p>Hi</p><p>there friend</p>", 4),
            "<p>Hi</p><p>there friend...</p>"
        );
    }

    #[test]
    fn later_paragraphs_removed() {
        assert_eq!(t("<p>A</p><p>B</p><p>C</p>", 1), "<p>A</p><p>B...</p>");
    }

    // ── budget edges ────────────────────────────────────────────────

    #[test]
    fn under_budget_is_unchanged() {
        let input = "<p>Short <em>and</em> sweet</p>";
        assert_eq!(t(input, 15), input);
    }

    #[test]
    fn exactly_at_budget_is_unchanged() {
        assert_eq!(t("<p>Hello</p>", 5), "<p>Hello</p>");
    }

    #[test]
    fn zero_budget_keeps_first_text_whole() {
        assert_eq!(t("<p>Hello</p><p>World</p>", 0), "<p>Hello...</p>");
    }

    #[test]
    fn long_node_overshoots_budget() {
        assert_eq!(
            t("<p>ab</p><p>abcdefghijklmnopqrstuvwxyz</p>", 10),
            "<p>ab</p><p>abcdefghijklmnopqrst...</p>"
        );
    }

    #[test]
    fn default_budget() {
        let out = truncate(
            "<p>The quick brown fox jumps over the lazy dog</p>",
            DEFAULT_MAX_LENGTH,
            DEFAULT_CONTINUATION_MARKER,
        );
        // 43 - 15 = 28 over, keep 30
        assert_eq!(out, "<p>The quick brown fox jumps over...</p>");
    }

    // ── structure ───────────────────────────────────────────────────

    #[test]
    fn nested_followers_removed() {
        assert_eq!(
            t("<div><p>Hello world</p><p>gone</p></div><p>also gone</p>", 5),
            "<div><p>Hello wo...</p></div>"
        );
    }

    #[test]
    fn attributes_preserved() {
        assert_eq!(
            t(
                r#"<p class="lead">Hello <a href="/more">world of text</a> and more</p>"#,
                8
            ),
            r#"<p class="lead">Hello <a href="/more">world of text...</a></p>"#
        );
    }

    #[test]
    fn void_elements_before_cut_kept() {
        assert_eq!(
            t("<p>Hello<br>world and more</p>", 8),
            "<p>Hello<br>world and mor...</p>"
        );
    }

    #[test]
    fn comment_after_cut_removed() {
        assert_eq!(
            t("<p>Hello world</p><!-- note --><p>x</p>", 5),
            "<p>Hello wo...</p>"
        );
    }

    #[test]
    fn comment_before_cut_kept() {
        assert_eq!(t("<!-- keep --><p>Hi</p>", 15), "<!-- keep --><p>Hi</p>");
    }

    #[test]
    fn bare_text() {
        assert_eq!(t("Hello world", 5), "Hello wo...");
    }

    #[test]
    fn unclosed_tags_are_closed() {
        assert_eq!(
            t("<p>Hello <b>bold world", 10),
            "<p>Hello <b>bold wor...</b></p>"
        );
    }

    #[test]
    fn wrapper_never_emitted() {
        let out = t("<html><body><p>Hello world</p></body></html>", 5);
        assert!(!out.contains("<html"));
        assert!(!out.contains("<body"));
        assert_eq!(out, "<p>Hello wo...</p>");
    }

    // ── text ────────────────────────────────────────────────────────

    #[test]
    fn entities_count_as_one_character() {
        assert_eq!(
            t("<p>Fish &amp; Chips forever</p>", 6),
            "<p>Fish &amp; Chips for...</p>"
        );
    }

    #[test]
    fn multibyte_text_cut_on_characters() {
        assert_eq!(t("<p>Crème brûlée</p>", 5), "<p>Crème brû...</p>");
    }

    #[test]
    fn custom_marker() {
        assert_eq!(
            truncate("<p>Hello world</p>", 5, "…"),
            "<p>Hello wo…</p>"
        );
    }

    #[test]
    fn marker_is_escaped_as_text() {
        assert_eq!(
            truncate("<p>Hello world</p>", 5, "&hellip;"),
            "<p>Hello wo&amp;hellip;</p>"
        );
    }

    #[test]
    fn ascii_mode_transliterates_before_counting() {
        let options = TruncateOptions {
            max_length: 5,
            encoding: EncodingMode::Ascii,
            ..TruncateOptions::default()
        };
        assert_eq!(
            truncate_with("<p>Crème brûlée</p>", &options).html,
            "<p>Creme bru...</p>"
        );
    }

    #[test]
    fn ascii_mode_never_creates_elements() {
        let options = TruncateOptions {
            max_length: 100,
            encoding: EncodingMode::Ascii,
            ..TruncateOptions::default()
        };
        let r = truncate_with("<p>a ＜b＞bold＜/b＞ c</p>", &options);
        assert_eq!(r.html, "<p>a &lt;b&gt;bold&lt;/b&gt; c</p>");
        assert!(!r.truncated);
    }

    #[test]
    fn ascii_mode_leaves_attributes_and_tags() {
        let options = TruncateOptions {
            max_length: 100,
            encoding: EncodingMode::Ascii,
            ..TruncateOptions::default()
        };
        assert_eq!(
            truncate_with(r#"<a href="/x">résumé ＆ co</a>"#, &options).html,
            r#"<a href="/x">resume &amp; co</a>"#
        );
    }

    // ── degenerate input ────────────────────────────────────────────

    #[test]
    fn empty_input() {
        assert_eq!(t("", 15), "");
        assert_eq!(t("", 0), "");
    }

    #[test]
    fn whitespace_only_input_under_budget() {
        let out = t("   ", 15);
        assert!(out.trim().is_empty());
        assert!(!out.contains('<'));
    }

    #[test]
    fn markup_without_text() {
        assert_eq!(t("<p></p><br>", 0), "<p></p><br>");
    }

    // ── report ──────────────────────────────────────────────────────

    #[test]
    fn report_when_truncated() {
        let r = truncate_with(
            "<p>A</p><p>B</p><p>C</p>",
            &TruncateOptions {
                max_length: 1,
                ..TruncateOptions::default()
            },
        );
        assert!(r.truncated);
        assert_eq!(r.visible_length, 2);
        assert_eq!(r.pruned, 2);
        assert_eq!(r.html, "<p>A</p><p>B...</p>");
    }

    #[test]
    fn report_when_untouched() {
        let r = truncate_with("<p>Hi</p>", &TruncateOptions::default());
        assert!(!r.truncated);
        assert_eq!(r.visible_length, 2);
        assert_eq!(r.pruned, 0);
    }

    #[test]
    fn default_options() {
        let o = TruncateOptions::default();
        assert_eq!(o.max_length, 15);
        assert_eq!(o.continuation_marker, "...");
        assert_eq!(o.encoding, EncodingMode::Preserve);
    }
}
