//! Iterative pre-order traversal over parent/sibling links.
//!
//! From each node the walk moves to its first child; failing that, to its
//! next sibling; failing that, up through its ancestors to the first one with
//! a next sibling. The climb stops at the start node's parent, so a walk
//! covers the start node, the siblings that follow it, and all of their
//! descendants.
//!
//! State is two handles, not a stack, so nesting depth costs nothing.

use crate::tree::DomTree;

/// Pre-order walker holding only the next node and the climb boundary.
///
/// The successor of a node is resolved before the node is returned, so a
/// caller may edit the returned node's content before asking for the next one.
#[derive(Debug, Clone)]
pub struct DepthFirstWalker<Id> {
    next: Option<Id>,
    boundary: Option<Id>,
}

impl<Id: Copy + Eq> DepthFirstWalker<Id> {
    /// Start a walk at `start`.
    pub fn new<T>(tree: &T, start: Id) -> Self
    where
        T: DomTree<Id = Id> + ?Sized,
    {
        Self {
            next: Some(start),
            boundary: tree.parent(start),
        }
    }

    /// Return the next node in document order, or `None` once the walk is done.
    pub fn next_node<T>(&mut self, tree: &T) -> Option<Id>
    where
        T: DomTree<Id = Id> + ?Sized,
    {
        let current = self.next?;
        self.next = self.successor(tree, current);
        Some(current)
    }

    fn successor<T>(&self, tree: &T, id: Id) -> Option<Id>
    where
        T: DomTree<Id = Id> + ?Sized,
    {
        if let Some(child) = tree.first_child(id) {
            return Some(child);
        }

        let mut node = id;
        loop {
            if let Some(sibling) = tree.next_sibling(node) {
                return Some(sibling);
            }
            let parent = tree.parent(node)?;
            if Some(parent) == self.boundary {
                return None;
            }
            node = parent;
        }
    }
}

/// Visit every node reachable from `start` exactly once, in document order.
///
/// `visit` may edit node content but must not change structure; collect
/// nodes for removal and detach them after `walk` returns.
pub fn walk<T, F>(tree: &mut T, start: T::Id, mut visit: F)
where
    T: DomTree + ?Sized,
    F: FnMut(&mut T, T::Id),
{
    let mut walker = DepthFirstWalker::new(&*tree, start);
    while let Some(id) = walker.next_node(&*tree) {
        visit(tree, id);
    }
}

/// Read-only iterator over the same visit order as [`walk`].
pub fn iter<T>(tree: &T, start: T::Id) -> Iter<'_, T>
where
    T: DomTree + ?Sized,
{
    Iter {
        tree,
        walker: DepthFirstWalker::new(tree, start),
    }
}

/// Iterator returned by [`iter`].
pub struct Iter<'a, T: DomTree + ?Sized> {
    tree: &'a T,
    walker: DepthFirstWalker<T::Id>,
}

impl<T: DomTree + ?Sized> Iterator for Iter<'_, T> {
    type Item = T::Id;

    fn next(&mut self) -> Option<Self::Item> {
        self.walker.next_node(self.tree)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
