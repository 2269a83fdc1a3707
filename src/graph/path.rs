//! Route value type
//!
//! A [`Path`] is an immutable, non-empty node sequence starting at an origin,
//! with the cumulative cost recorded at every node. Extending a path returns
//! a new value.

use crate::error::{NavError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, NodeId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    nodes: Vec<NodeId>,
    /// `cumulative[i]` is the cost from the origin to `nodes[i]`
    cumulative: Vec<Cost>,
    cost: Cost,
}

impl Path {
    /// Zero-cost path holding only `origin`
    pub fn new(origin: impl Into<NodeId>) -> Self {
        Path {
            nodes: vec![origin.into()],
            cumulative: vec![Cost::ZERO],
            cost: Cost::ZERO,
        }
    }

    /// Return a new path extended by `id`.
    /// Fails with `NotFound` if the graph has no edge from the last node to `id`.
    pub fn append(&self, graph: &dyn GraphProvider, id: &str) -> Result<Path> {
        let last = self.last();
        let edge = graph
            .get_outbound_edges(last.as_str())
            .iter()
            .find(|edge| edge.to.as_str() == id)
            .ok_or_else(|| NavError::not_found("edge", format!("{} -> {}", last, id)))?;

        let mut extended = self.clone();
        extended.push(edge.to.clone(), edge.cost);
        Ok(extended)
    }

    /// Extend in place; callers guarantee the edge exists
    pub(crate) fn push(&mut self, id: NodeId, edge_cost: Cost) {
        self.cost += edge_cost;
        self.nodes.push(id);
        self.cumulative.push(self.cost);
    }

    pub fn origin(&self) -> &NodeId {
        &self.nodes[0]
    }

    pub fn last(&self) -> &NodeId {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes in the path (always at least one)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges crossed
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.as_str() == id)
    }

    /// Cost accumulated when `id` is first reached, before leaving it
    pub fn cost_to(&self, id: &str) -> Result<Cost> {
        self.nodes
            .iter()
            .position(|node| node.as_str() == id)
            .map(|index| self.cumulative[index])
            .ok_or_else(|| NavError::not_in_path(id))
    }

    /// Consecutive `(from, to)` pairs along the path
    pub fn legs(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Accumulated cost plus the search heuristic from the last node to `destination`
    pub fn estimated_cost(&self, graph: &dyn GraphProvider, destination: &str) -> Option<Cost> {
        let remaining = graph.remaining_estimate(self.last().as_str(), destination)?;
        Some(self.cost + remaining)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, " ({})", self.cost)
    }
}
