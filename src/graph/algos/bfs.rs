use crate::error::{NavError, Result};
use crate::graph::types::{Edge, NodeId};
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<NodeId>,
    queue: VecDeque<NodeId>,
}

impl BfsState {
    fn new(start: NodeId) -> Self {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back(start);
        Self { visited, queue }
    }
}

/// Collect every node reachable from `start` by following edges forward.
///
/// The result always contains `start`. Fails with `NotFound` when `start`
/// is not in the graph.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_reachable(provider: &dyn GraphProvider, start: &str) -> Result<HashSet<NodeId>> {
    if !provider.contains(start) {
        return Err(NavError::not_found("node", start));
    }

    let mut state = BfsState::new(NodeId::from(start));

    while let Some(current) = state.queue.pop_front() {
        for edge in provider.get_outbound_edges(current.as_str()) {
            if state.visited.insert(edge.to.clone()) {
                state.queue.push_back(edge.to.clone());
            }
        }
    }

    tracing::debug!(reachable = state.visited.len(), "bfs complete");
    Ok(state.visited)
}

/// Edges whose endpoints are both reachable from `start`
pub fn reachable_edges<'a>(
    provider: &'a dyn GraphProvider,
    start: &str,
) -> Result<Vec<&'a Edge>> {
    let reachable = bfs_reachable(provider, start)?;
    let mut edges: Vec<&Edge> = Vec::new();
    for id in &reachable {
        edges.extend(
            provider
                .get_outbound_edges(id.as_str())
                .iter()
                .filter(|edge| reachable.contains(edge.to.as_str())),
        );
    }
    edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
    Ok(edges)
}
