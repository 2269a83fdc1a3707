//! Graph store and navigation queries
//!
//! Provides the graph and the algorithms that run over it:
//! - `store`: node/edge ownership and the mutation API
//! - BFS reachability ("what can I reach from X")
//! - A* route search ("cheapest way from X to Y")
//! - `path`: the immutable route value returned by the search

pub mod algos;
pub mod path;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs_reachable, reachable_edges, search, SearchOutcome};
pub use path::Path;
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{Cost, Edge, GraphStats, Node, NodeId, SearchOptions};

use crate::error::Result;
use std::collections::HashSet;

/// Set of node ids reachable from `start`, including `start` itself
pub fn reachable(graph: &dyn GraphProvider, start: &str) -> Result<HashSet<NodeId>> {
    bfs_reachable(graph, start)
}

/// Lowest-cost route from `from` to `to`.
///
/// `Ok(None)` means both endpoints exist but no route connects them;
/// an unknown endpoint is a `NotFound` error.
pub fn shortest_path(graph: &dyn GraphProvider, from: &str, to: &str) -> Result<Option<Path>> {
    Ok(search(graph, from, to, &SearchOptions::default())?.path)
}
