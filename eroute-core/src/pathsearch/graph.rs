//! Path solver graph traits.

use std::collections::HashMap;
use std::hash::Hash;

/// Read access to the adjacency lists of a graph.
pub trait Neighbors<T, W> {
    /// Outgoing links of `node` in insertion order. Empty for an unknown node.
    fn links(&self, node: &T) -> &[(T, W)];
}

/// Path finding functions.
pub trait GraphSolver<T, W> {
    /// Find the least-cost path from `from` node to `to` node.
    /// Returns total cost and the nodes along the path, both ends included, or `None` if unreachable.
    fn path(&self, from: &T, to: &T) -> Option<(W, Vec<T>)>;

    /// Same as `path()`, but the nodes are listed from `to` back to `from`.
    fn reverse_path(&self, from: &T, to: &T) -> Option<(W, Vec<T>)>;
}

/// Plain map of node tag to its links, handy for ad-hoc graphs.
impl<T, W> Neighbors<T, W> for HashMap<T, Vec<(T, W)>> where T: Eq + Hash {
    fn links(&self, node: &T) -> &[(T, W)] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
