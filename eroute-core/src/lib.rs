//! Least-cost route search over a road network.
//!
//! Roads are undirected edges whose cost blends distance, time and risk into a single weight.
//! The graph is built by inserting roads one by one; routes are found with Dijkstra search.

pub use self::errors::*;
pub use self::graph::WeightedGraph;
pub use self::planner::RoutePlanner;
pub use self::request::{RoadRequest, RouteRequest};
pub use self::road::*;
pub use self::route::{Route, RouteFinder, RouteResult};
pub use self::shared::SharedPlanner;
pub use self::snapshot::{CollapsePolicy, GraphSnapshot, SnapshotEdge};

mod errors;
mod graph;
mod planner;
mod request;
mod road;
mod route;
mod shared;
mod snapshot;

pub mod pathsearch;
