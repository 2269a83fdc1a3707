//! Navgraph Library
//!
//! Directed, distance-weighted graph of navigation fixes and airports,
//! with reachability and lowest-cost route queries.

pub mod airport;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod logging;

pub use error::{NavError, Result};
pub use geometry::{Metric, Position};
pub use graph::{reachable, shortest_path, Cost, Edge, Graph, Node, NodeId, Path};
