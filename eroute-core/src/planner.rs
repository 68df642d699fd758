//! Route planner: the boundary between raw user requests and the road graph.

use log::{debug, info};

use crate::errors::{PlannerError, Result};
use crate::graph::WeightedGraph;
use crate::request::{RoadRequest, RouteRequest};
use crate::road::{Road, RoadEntry};
use crate::route::{RouteFinder, RouteResult};
use crate::snapshot::{CollapsePolicy, GraphSnapshot};

/// Owns the road graph and answers requests against it.
///
/// Invalid input and unknown nodes are rejected here, so the graph and the search
/// only ever see well-formed data.
#[derive(Clone, Default, Debug)]
pub struct RoutePlanner {
    graph: WeightedGraph,
}

impl RoutePlanner {
    pub fn new() -> Self {
        RoutePlanner::default()
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Validate a raw road request and insert it. Returns the inserted road.
    pub fn add_road(&mut self, request: &RoadRequest) -> Result<&RoadEntry> {
        let entry = request.validate()?;
        Ok(self.insert_road(entry))
    }

    /// Insert a road that already went through `RoadRequest::validate()`.
    pub fn insert_road(&mut self, entry: RoadEntry) -> &RoadEntry {
        let entry = self.graph.insert(entry);
        info!("road added: {}", entry);
        entry
    }

    /// Insert an already typed road. Labels must be trimmed and non-empty.
    pub fn add_edge(&mut self, from: &str, to: &str, road: Road) {
        debug_assert!(!from.is_empty() && !to.is_empty(), "empty node label");
        self.graph.add_edge(from, to, road);
    }

    /// Find the least-cost route for a raw route request.
    ///
    /// Both labels must name known nodes, otherwise `UnknownNode` is returned without running the search.
    pub fn find_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        let (start, end) = request.labels();
        for label in &[start, end] {
            if !self.graph.has_node(label) {
                debug!("unknown node [{}] in route request", label);
                return Err(PlannerError::UnknownNode(label.to_string()));
            }
        }
        Ok(RouteFinder::new(&self.graph).find_route(start, end))
    }

    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.graph.neighbors(node)
    }

    pub fn roads(&self) -> &[RoadEntry] {
        self.graph.roads()
    }

    pub fn snapshot(&self, policy: CollapsePolicy) -> GraphSnapshot {
        self.graph.snapshot(policy)
    }
}
