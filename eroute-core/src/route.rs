//! Least-cost route search over the road graph.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::graph::WeightedGraph;
use crate::pathsearch::{Dijkstra, GraphSolver};

/// A route between two nodes: total composite cost and the nodes along it, both ends included.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Route {
    pub cost: f64,
    pub path: Vec<String>,
}

/// Outcome of a route query.
///
/// `Unreachable` is a regular outcome rather than an error. It is distinct from a zero-cost route,
/// which is what a query from a node to itself yields.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RouteResult {
    Found(Route),
    Unreachable,
}

impl RouteResult {
    pub fn is_reachable(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }

    /// Total cost, `+inf` if unreachable.
    pub fn cost(&self) -> f64 {
        match self {
            RouteResult::Found(route) => route.cost,
            RouteResult::Unreachable => f64::INFINITY,
        }
    }

    /// Nodes along the route, empty if unreachable.
    pub fn path(&self) -> &[String] {
        match self {
            RouteResult::Found(route) => &route.path,
            RouteResult::Unreachable => &[],
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteResult::Found(route) => Some(route),
            RouteResult::Unreachable => None,
        }
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteResult::Found(Route { cost, path }) => {
                write!(f, "Optimal route: {}\nTotal cost: {:.2}", path.join(" → "), cost)
            }
            RouteResult::Unreachable => write!(f, "No path found."),
        }
    }
}

/// Computes least-cost routes in a borrowed graph.
pub struct RouteFinder<'g> {
    graph: &'g WeightedGraph,
}

impl<'g> RouteFinder<'g> {
    pub fn new(graph: &'g WeightedGraph) -> Self {
        RouteFinder { graph }
    }

    /// Find the least-cost route from `start` to `end`.
    ///
    /// Both nodes are expected to be present in the graph; an unknown node is reported as `Unreachable`.
    /// So is a route whose total cost is not finite (`inf` or `NaN` road weights).
    pub fn find_route(&self, start: &str, end: &str) -> RouteResult {
        let (from, to) = match (self.graph.node_idx(start), self.graph.node_idx(end)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                debug!("route [{}] -> [{}] requested for unknown node", start, end);
                return RouteResult::Unreachable;
            }
        };

        match Dijkstra::new(self.graph).path(&from, &to) {
            Some((cost, _)) if !cost.is_finite() => {
                debug!("route [{}] -> [{}] has non-finite cost {}, treated as unreachable", start, end, cost);
                RouteResult::Unreachable
            }
            Some((cost, path)) => {
                let path = path.into_iter().map(|idx| self.graph.label(idx).to_string()).collect();
                debug!("route [{}] -> [{}] found with cost {}", start, end, cost);
                RouteResult::Found(Route { cost, path })
            }
            None => {
                debug!("route [{}] -> [{}] is unreachable", start, end);
                RouteResult::Unreachable
            }
        }
    }
}
