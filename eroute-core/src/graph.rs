//! Undirected road graph with composite edge weights.

use std::collections::HashMap;

use log::{debug, warn};

use crate::pathsearch::Neighbors;
use crate::road::{Road, RoadEntry};

/// Dense node index, assigned in first-seen order.
pub(crate) type NodeIdx = usize;

/// Undirected weighted graph, built incrementally from road insertions.
///
/// Nodes are created implicitly by the first road that mentions them and are never removed.
/// Every road is registered in the adjacency lists of both of its ends with the same weight;
/// parallel roads are kept as separate links.
#[derive(Clone, Default, Debug)]
pub struct WeightedGraph {
    /// Links node label to its index in `nodes`.
    index: HashMap<String, NodeIdx>,

    /// Nodes in first-seen order.
    nodes: Vec<Node>,

    /// Every inserted road, in insertion order.
    roads: Vec<RoadEntry>,
}

#[derive(Clone, Debug)]
struct Node {
    label: String,
    links: Vec<(NodeIdx, f64)>,
}

impl WeightedGraph {
    /// Create new instance with empty graph.
    pub fn new() -> Self {
        WeightedGraph::default()
    }

    /// Insert a road between `from` and `to`, creating either node if absent.
    ///
    /// Labels are taken verbatim: they are expected to be trimmed and non-empty already.
    /// Numeric ranges are not checked. A self-loop (`from == to`) adds two links to the same node.
    pub fn add_edge(&mut self, from: &str, to: &str, road: Road) {
        self.insert(RoadEntry {
            from: from.to_string(),
            to: to.to_string(),
            road,
        });
    }

    /// Same as `add_edge()`, taking a whole road entry. Returns the entry as stored in the road log.
    pub fn insert(&mut self, entry: RoadEntry) -> &RoadEntry {
        let weight = entry.road.weight();
        if weight < 0.0 {
            warn!("negative weight {} on road [{}] <-> [{}], shortest routes are not guaranteed", weight, entry.from, entry.to);
        }
        if !entry.road.risk_in_range() {
            warn!("risk {} on road [{}] <-> [{}] is outside of the 1-5 scale", entry.road.risk, entry.from, entry.to);
        }

        let u = self.upsert_node(&entry.from);
        let v = self.upsert_node(&entry.to);
        self.nodes[u].links.push((v, weight));
        self.nodes[v].links.push((u, weight));

        debug!("added road [{}] <-> [{}] with weight {}", entry.from, entry.to, weight);
        self.roads.push(entry);
        &self.roads[self.roads.len() - 1]
    }

    fn upsert_node(&mut self, label: &str) -> NodeIdx {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            label: label.to_string(),
            links: Vec::new(),
        });
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Neighbors of `node` with the link weights, in insertion order.
    /// Unknown node has no neighbors.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let links = self.node_idx(node).map(|idx| self.nodes[idx].links.as_slice()).unwrap_or(&[]);
        links.iter().map(move |&(n, w)| (self.label(n), w))
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of inserted roads. Each one accounts for two adjacency links.
    pub fn edge_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node labels in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// Inserted roads, in insertion order.
    pub fn roads(&self) -> &[RoadEntry] {
        &self.roads
    }

    /// Weight of the first registered road between `u` and `v`, if any.
    pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
        let v_idx = self.node_idx(v)?;
        let u_idx = self.node_idx(u)?;
        self.nodes[u_idx].links.iter().find(|&&(n, _)| n == v_idx).map(|&(_, w)| w)
    }

    pub(crate) fn node_idx(&self, label: &str) -> Option<NodeIdx> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, idx: NodeIdx) -> &str {
        &self.nodes[idx].label
    }

    /// Adjacency lists of all nodes, in node first-seen order.
    pub(crate) fn adjacency(&self) -> impl Iterator<Item = (NodeIdx, &[(NodeIdx, f64)])> {
        self.nodes.iter().enumerate().map(|(idx, n)| (idx, n.links.as_slice()))
    }
}

impl Neighbors<NodeIdx, f64> for WeightedGraph {
    fn links(&self, node: &NodeIdx) -> &[(NodeIdx, f64)] {
        self.nodes.get(*node).map(|n| n.links.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use crate::road::Road;

    use super::WeightedGraph;

    fn neighbors(g: &WeightedGraph, node: &str) -> Vec<(String, f64)> {
        g.neighbors(node).map(|(n, w)| (n.to_string(), w)).collect()
    }

    fn s(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", Road::new(10.0, 10.0, 1.0));

        assert_eq!(neighbors(&g, "A"), vec![(s("B"), 20.0)]);
        assert_eq!(neighbors(&g, "B"), vec![(s("A"), 20.0)]);
        assert_eq!(g.weight("A", "B"), Some(20.0));
        assert_eq!(g.weight("B", "A"), Some(20.0));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_nodes_created_on_demand() {
        let mut g = WeightedGraph::new();
        assert!(g.is_empty());
        assert!(!g.has_node("A"));

        g.add_edge("A", "B", Road::new(1.0, 0.0, 1.0));
        g.add_edge("B", "C", Road::new(1.0, 0.0, 1.0));
        g.add_edge("C", "A", Road::new(1.0, 0.0, 1.0));

        assert!(g.has_node("A") && g.has_node("B") && g.has_node("C"));
        assert!(!g.has_node("D"));
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let mut g = WeightedGraph::new();
        g.add_edge("depot", "Depot", Road::new(1.0, 1.0, 1.0));
        assert_eq!(g.node_count(), 2);
        assert!(g.has_node("depot"));
        assert!(g.has_node("Depot"));
        assert!(!g.has_node("DEPOT"));
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let mut g = WeightedGraph::new();
        assert!(neighbors(&g, "X").is_empty());
        g.add_edge("A", "B", Road::new(1.0, 1.0, 1.0));
        assert!(neighbors(&g, "X").is_empty());
        assert_eq!(g.weight("A", "X"), None);
        assert_eq!(g.weight("X", "A"), None);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", Road::new(10.0, 10.0, 1.0));
        g.add_edge("A", "B", Road::new(10.0, 10.0, 1.0));
        g.add_edge("B", "A", Road::new(1.0, 0.0, 1.0));

        assert_eq!(neighbors(&g, "A"), vec![(s("B"), 20.0), (s("B"), 20.0), (s("B"), 6.0)]);
        assert_eq!(neighbors(&g, "B"), vec![(s("A"), 20.0), (s("A"), 20.0), (s("A"), 6.0)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.weight("B", "A"), Some(20.0));
    }

    #[test]
    fn test_self_loop() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "A", Road::new(0.0, 0.0, 0.0));
        assert_eq!(g.node_count(), 1);
        assert_eq!(neighbors(&g, "A"), vec![(s("A"), 0.0), (s("A"), 0.0)]);
    }

    #[test]
    fn test_symmetry_holds_for_every_road() {
        let mut g = WeightedGraph::new();
        let roads = [
            ("A", "B", 3.0, 12.0, 2.0),
            ("B", "C", 0.5, 1.0, 5.0),
            ("C", "D", 8.0, 8.0, 1.0),
            ("A", "D", 20.0, 0.0, 3.0),
            ("B", "D", 7.25, 3.5, 4.0),
        ];
        for &(u, v, d, t, r) in roads.iter() {
            g.add_edge(u, v, Road::new(d, t, r));
        }
        for &(u, v, d, t, r) in roads.iter() {
            let w = d + 0.5 * t + 5.0 * r;
            assert!(g.neighbors(u).any(|(n, nw)| n == v && nw == w));
            assert!(g.neighbors(v).any(|(n, nw)| n == u && nw == w));
        }
        assert_eq!(g.roads().len(), roads.len());
        assert_eq!(g.roads()[3].from, "A");
        assert_eq!(g.roads()[3].to, "D");
    }
}
