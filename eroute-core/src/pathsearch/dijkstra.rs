//! Dijkstra path search implementation.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Add;

use log::trace;

use super::frontier::Frontier;
use super::graph::{GraphSolver, Neighbors};
use super::numtraits::{IntoOrd, Zero};

/// Dijkstra path search over a borrowed graph.
///
/// Every frontier entry is a partial path: a node, the cost accumulated to reach it
/// and a link to the entry it was expanded from. A node is finalized the first time it is popped,
/// so later entries for the same node are discarded.
pub struct Dijkstra<'g, G> {
    graph: &'g G,
}

/// Partial path record. The parent chain of a record spells its path backwards.
struct Record<T> {
    node: T,
    parent: Option<usize>,
}

impl<'g, G> Dijkstra<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Dijkstra { graph }
    }
}

impl<'g, G, T, W> GraphSolver<T, W> for Dijkstra<'g, G>
where
    G: Neighbors<T, W>,
    T: Clone + Eq + Hash,
    W: Clone + IntoOrd + Add<Output = W> + Zero,
{
    fn path(&self, from: &T, to: &T) -> Option<(W, Vec<T>)> {
        let (cost, mut path) = self.reverse_path(from, to)?;

        // Reverse the path, so the result will be from `from` to `to`
        path.reverse();

        Some((cost, path))
    }

    fn reverse_path(&self, from: &T, to: &T) -> Option<(W, Vec<T>)> {
        // Algorithm state
        let mut explored = HashSet::<T>::new();
        let mut frontier = Frontier::<W>::new();
        let mut records = Vec::<Record<T>>::new();

        // The starting point is the first record, with the single-node path `[from]`
        records.push(Record { node: from.clone(), parent: None });
        frontier.push(0, W::ZERO);

        while let Some((rec_idx, cost)) = frontier.pop() {
            let id = records[rec_idx].node.clone();

            // Stale record, the node was finalized with a lower (or equal, but earlier) cost
            if explored.contains(&id) {
                continue;
            }
            explored.insert(id.clone());

            // The first time the goal node is popped, its cost is the least one.
            if id == *to {
                trace!("route found after {} records, {} still queued", records.len(), frontier.len());
                return Some((cost, unwind(&records, rec_idx)));
            }

            for (n_node, n_cost) in self.graph.links(&id) {
                // If we already explored the node - skip it
                if explored.contains(n_node) {
                    continue;
                }

                records.push(Record { node: n_node.clone(), parent: Some(rec_idx) });
                frontier.push(records.len() - 1, cost.clone() + n_cost.clone());
            }
        }

        trace!("route not found, {} nodes explored", explored.len());
        None
    }
}

/// Collects nodes from the record `idx` back to the starting record.
fn unwind<T: Clone>(records: &[Record<T>], idx: usize) -> Vec<T> {
    let mut rev_path = Vec::new();
    let mut cur = Some(idx);
    while let Some(i) = cur {
        let rec = &records[i];
        rev_path.push(rec.node.clone());
        cur = rec.parent;
    }
    rev_path
}
