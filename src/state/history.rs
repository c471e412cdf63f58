// Navigation history - snapshots of parent locations for cheap ascend
use crate::entry::Listing;
use std::path::{Path, PathBuf};

/// Frozen state of a location the user descended out of.
#[derive(Clone, Debug)]
pub struct NavigationNode {
    pub location: PathBuf,
    pub selection_index: usize,
    pub listing: Listing,
}

#[derive(Default)]
pub struct NavigationHistory {
    nodes: Vec<NavigationNode>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot. A node for the same location as the current top
    /// replaces it, so consecutive nodes never repeat a location.
    pub fn push(&mut self, node: NavigationNode) {
        if self.peek_matches(&node.location) {
            self.nodes.pop();
        }
        self.nodes.push(node);
    }

    pub fn peek_matches(&self, location: &Path) -> bool {
        self.nodes
            .last()
            .is_some_and(|node| node.location == location)
    }

    pub fn peek(&self) -> Option<&NavigationNode> {
        self.nodes.last()
    }

    pub fn pop(&mut self) -> Option<NavigationNode> {
        self.nodes.pop()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
