//! The text-length budget and the cut.
//!
//! Lengths are counted per text node: a node's full length is added before
//! the budget is checked, so the node that crosses the budget is the one that
//! gets cut, and it keeps `overflow + 2` characters, where `overflow` is how
//! far the running total went past the budget. A long node can therefore
//! leave more visible text than the budget allows.

use excerpt_core::text::{char_len, prefix_chars};
use tracing::debug;

use crate::prune::PruneCollector;
use crate::tree::DomTree;

/// Consumes the visit stream and decides the cut.
#[derive(Debug, Clone)]
pub struct TruncationPolicy<Id> {
    max_length: usize,
    marker: String,
    running_length: usize,
    truncating: bool,
    cut: Option<Id>,
}

impl<Id: Copy + std::fmt::Debug> TruncationPolicy<Id> {
    /// Policy for a budget of `max_length` characters, marking the cut with `marker`.
    pub fn new(max_length: usize, marker: impl Into<String>) -> Self {
        Self {
            max_length,
            marker: marker.into(),
            running_length: 0,
            truncating: false,
            cut: None,
        }
    }

    /// Handle one visited node.
    ///
    /// Before the cut, text nodes add to the running length and the node that
    /// pushes it past the budget is rewritten in place. Every node visited
    /// after that is marked in `pruner`.
    pub fn visit<T>(&mut self, tree: &mut T, id: Id, pruner: &mut PruneCollector<Id>)
    where
        T: DomTree<Id = Id> + ?Sized,
    {
        if self.truncating {
            pruner.mark(id);
            return;
        }

        if tree.is_text(id) {
            self.running_length += tree.text(id).map_or(0, char_len);
        }

        if self.running_length > self.max_length {
            self.truncating = true;
            self.cut = Some(id);

            let overflow = self.running_length - self.max_length;
            let keep = overflow.saturating_add(2);
            let replacement = tree
                .text(id)
                .map(|text| format!("{}{}", prefix_chars(text, keep), self.marker));
            if let Some(replacement) = replacement {
                tree.set_text(id, replacement);
            }

            debug!(
                running_length = self.running_length,
                max_length = self.max_length,
                overflow,
                keep,
                "budget exceeded, cutting text node"
            );
        }
    }

    /// Total text length counted so far. Stops growing at the cut.
    pub fn running_length(&self) -> usize {
        self.running_length
    }

    /// Whether the budget has been exceeded.
    pub fn is_truncating(&self) -> bool {
        self.truncating
    }

    /// The node whose text was cut, once the budget has been exceeded.
    pub fn cut_node(&self) -> Option<Id> {
        self.cut
    }

    /// The budget in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
