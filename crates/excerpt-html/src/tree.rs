//! Tree capabilities needed by the truncation.
//!
//! Nodes are addressed by copyable handles into an arena rather than by
//! references, so parent and sibling links never hold borrows. Handles that
//! do not belong to the tree are tolerated: navigation returns `None` and
//! edits do nothing.

use std::fmt;

use ego_tree::{NodeId, Tree};
use scraper::Node;

/// A parsed markup tree the truncation can navigate and edit.
///
/// Structure must stay unchanged while a walk is in progress. Only
/// [`set_text`](DomTree::set_text) is safe to call mid-walk;
/// [`detach`](DomTree::detach) is for after the walk ends.
pub trait DomTree {
    /// Node handle.
    type Id: Copy + Eq + fmt::Debug;

    /// First child of `id`, if any.
    fn first_child(&self, id: Self::Id) -> Option<Self::Id>;

    /// Next sibling of `id` in its parent's child order.
    fn next_sibling(&self, id: Self::Id) -> Option<Self::Id>;

    /// Parent of `id`; `None` for the tree root.
    fn parent(&self, id: Self::Id) -> Option<Self::Id>;

    /// Whether `id` is a text node.
    fn is_text(&self, id: Self::Id) -> bool;

    /// Content of a text node; `None` for every other kind.
    fn text(&self, id: Self::Id) -> Option<&str>;

    /// Replace the content of a text node. No-op for other kinds.
    fn set_text(&mut self, id: Self::Id, text: String);

    /// Remove `id` and its subtree from its parent's children.
    fn detach(&mut self, id: Self::Id);

    /// Children of `id` in order.
    fn children(&self, id: Self::Id) -> Children<'_, Self> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }
}

/// Iterator over a node's children, see [`DomTree::children`].
pub struct Children<'a, T: DomTree + ?Sized> {
    tree: &'a T,
    next: Option<T::Id>,
}

impl<T: DomTree + ?Sized> Iterator for Children<'_, T> {
    type Item = T::Id;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

impl DomTree for Tree<Node> {
    type Id = NodeId;

    fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.first_child().map(|n| n.id())
    }

    fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next_sibling().map(|n| n.id())
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent().map(|n| n.id())
    }

    fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.value().is_text())
    }

    fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.value().as_text().map(|t| &**t)
    }

    fn set_text(&mut self, id: NodeId, text: String) {
        if let Some(mut node) = self.get_mut(id) {
            if let Node::Text(t) = node.value() {
                t.text = text.into();
            }
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(mut node) = self.get_mut(id) {
            node.detach();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
