//! Parent-pointer search nodes for the uninformed engines.

use crate::search::problem::{Path, PathStep};

/// A node in the search tree: a state plus a back-reference to the node it
/// was generated from and the action that produced it.
#[derive(Debug)]
pub(crate) struct SearchNode<S, A> {
    pub state: S,
    pub action: Option<A>,
    pub parent: Option<usize>,
    pub depth: usize,
}

/// Arena holding every node generated during one search call.
///
/// Nodes form a parent-pointer tree (never a graph), indexed by insertion
/// order, so path reconstruction is a linear walk to the root. The arena is
/// owned exclusively by one engine call and dropped once the path has been
/// extracted.
#[derive(Debug)]
pub(crate) struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a node and returns its id.
    pub fn push(
        &mut self,
        state: S,
        action: Option<A>,
        parent: Option<usize>,
        depth: usize,
    ) -> usize {
        self.nodes.push(SearchNode {
            state,
            action,
            parent,
            depth,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, id: usize) -> &SearchNode<S, A> {
        &self.nodes[id]
    }

    /// Reconstructs the path from the root to `id` by following parent
    /// pointers and reversing.
    pub fn path_to_root(&self, mut id: usize) -> Path<S, A> {
        let mut path = Vec::new();
        loop {
            let node = &self.nodes[id];
            path.push(PathStep {
                state: node.state.clone(),
                action: node.action.clone(),
            });
            match node.parent {
                Some(parent) => id = parent,
                None => break,
            }
        }
        path.reverse();
        path
    }
}
