//! Graph export for visualization.
//!
//! A snapshot lists every node and one representative edge per unordered pair of nodes.
//! Parallel roads between the same pair are collapsed according to a `CollapsePolicy`,
//! and each representative edge records how many roads it stands for.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{NodeIdx, WeightedGraph};

/// Which of the parallel roads between two nodes represents them in a snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CollapsePolicy {
    /// Keep the weight of the road inserted first.
    FirstRegistered,
    /// Keep the weight of the road inserted last.
    LastRegistered,
}

impl Default for CollapsePolicy {
    fn default() -> Self {
        CollapsePolicy::FirstRegistered
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct GraphSnapshot {
    /// Node labels in first-seen order.
    pub nodes: Vec<String>,
    pub edges: Vec<SnapshotEdge>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SnapshotEdge {
    pub a: String,
    pub b: String,
    pub weight: f64,
    /// Number of parallel roads collapsed into this edge, at least 1.
    pub parallel: usize,
}

struct Collapsed {
    a: NodeIdx,
    b: NodeIdx,
    weight: f64,
    /// Adjacency links seen for this pair. Every road contributes two.
    links: usize,
}

impl WeightedGraph {
    /// Export nodes and collapsed edges.
    ///
    /// Edges are listed in the order they are first met when walking nodes in first-seen order,
    /// each node's links in insertion order. Self-loops are included.
    pub fn snapshot(&self, policy: CollapsePolicy) -> GraphSnapshot {
        let mut edges = Vec::<Collapsed>::new();
        let mut by_pair = HashMap::<(NodeIdx, NodeIdx), usize>::new();

        for (u, links) in self.adjacency() {
            for &(v, weight) in links {
                let key = if u <= v { (u, v) } else { (v, u) };
                if let Some(&i) = by_pair.get(&key) {
                    let edge = &mut edges[i];
                    edge.links += 1;
                    if policy == CollapsePolicy::LastRegistered {
                        edge.weight = weight;
                    }
                } else {
                    by_pair.insert(key, edges.len());
                    edges.push(Collapsed { a: u, b: v, weight, links: 1 });
                }
            }
        }

        GraphSnapshot {
            nodes: self.nodes().map(str::to_string).collect(),
            edges: edges
                .into_iter()
                .map(|e| SnapshotEdge {
                    a: self.label(e.a).to_string(),
                    b: self.label(e.b).to_string(),
                    weight: e.weight,
                    parallel: e.links / 2,
                })
                .collect(),
        }
    }
}
