//! Planner shared between threads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::Result;
use crate::planner::RoutePlanner;
use crate::request::{RoadRequest, RouteRequest};
use crate::road::{Road, RoadEntry};
use crate::route::RouteResult;
use crate::snapshot::{CollapsePolicy, GraphSnapshot};

/// Cloneable handle to a planner guarded by a read-write lock.
///
/// Insertions take the lock exclusively. Queries hold the shared lock for their whole run,
/// so a search always sees one consistent state of the graph.
#[derive(Clone, Default)]
pub struct SharedPlanner {
    inner: Arc<RwLock<RoutePlanner>>,
}

impl SharedPlanner {
    pub fn new(planner: RoutePlanner) -> Self {
        SharedPlanner {
            inner: Arc::new(RwLock::new(planner)),
        }
    }

    pub fn add_road(&self, request: &RoadRequest) -> Result<RoadEntry> {
        let mut planner = self.inner.write();
        planner.add_road(request).map(RoadEntry::clone)
    }

    pub fn add_edge(&self, from: &str, to: &str, road: Road) {
        self.inner.write().add_edge(from, to, road);
    }

    pub fn find_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        self.inner.read().find_route(request)
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.inner.read().graph().has_node(node)
    }

    pub fn neighbors(&self, node: &str) -> Vec<(String, f64)> {
        let planner = self.inner.read();
        planner.neighbors(node).map(|(n, w)| (n.to_string(), w)).collect()
    }

    pub fn roads(&self) -> Vec<RoadEntry> {
        self.inner.read().roads().to_vec()
    }

    pub fn snapshot(&self, policy: CollapsePolicy) -> GraphSnapshot {
        self.inner.read().snapshot(policy)
    }

    /// Run `f` against the planner under the shared lock.
    pub fn with_planner<R, F: FnOnce(&RoutePlanner) -> R>(&self, f: F) -> R {
        f(&self.inner.read())
    }
}
