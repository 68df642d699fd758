//! Path search in a weighted graph.

pub use self::dijkstra::Dijkstra;
pub use self::graph::{GraphSolver, Neighbors};
pub use self::numtraits::{IntoOrd, Zero};

mod dijkstra;
mod frontier;
mod graph;
mod numtraits;
