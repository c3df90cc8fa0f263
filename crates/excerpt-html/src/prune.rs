//! Deferred node removal.
//!
//! Removing a node during the walk would cut the sibling and parent links the
//! walker still needs. Nodes are recorded instead and detached in one sweep
//! once the walk has finished.

use crate::tree::DomTree;

/// Nodes marked for removal, in visit order.
///
/// A descendant of a marked node may be marked too. Detaching it after its
/// ancestor is redundant and harmless.
#[derive(Debug, Clone)]
pub struct PruneCollector<Id> {
    marked: Vec<Id>,
}

impl<Id> Default for PruneCollector<Id> {
    fn default() -> Self {
        Self { marked: Vec::new() }
    }
}

impl<Id: Copy> PruneCollector<Id> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` for removal.
    pub fn mark(&mut self, id: Id) {
        self.marked.push(id);
    }

    /// Marked nodes in visit order.
    pub fn marked(&self) -> &[Id] {
        &self.marked
    }

    /// Number of marked nodes.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Whether nothing has been marked.
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Detach every marked node. Returns how many were marked.
    pub fn execute<T>(self, tree: &mut T) -> usize
    where
        T: DomTree<Id = Id> + ?Sized,
    {
        for &id in &self.marked {
            tree.detach(id);
        }
        self.marked.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
