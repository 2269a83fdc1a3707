use crate::geometry::{Metric, Position};
use crate::graph::types::{Cost, Edge};
use crate::graph::Graph;

/// Trait for providing graph adjacency and node positions to the engines
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn get_outbound_edges(&self, id: &str) -> &[Edge];
    fn get_position(&self, id: &str) -> Option<Position>;
    /// Metric used both for edge costs and the search heuristic
    fn metric(&self) -> Metric;
    /// Whether the metric distance never overestimates the cost of a route
    fn heuristic_is_admissible(&self) -> bool;

    /// Lower bound on the cost from `from` to `to`, or None if either
    /// position is unknown. Drops to zero once the metric stops being a
    /// lower bound.
    fn remaining_estimate(&self, from: &str, to: &str) -> Option<Cost> {
        let here = self.get_position(from)?;
        let there = self.get_position(to)?;
        if !self.heuristic_is_admissible() {
            return Some(Cost::ZERO);
        }
        Some(Cost::new(self.metric().distance(here, there)))
    }
}

impl GraphProvider for Graph {
    fn contains(&self, id: &str) -> bool {
        self.contains_node(id)
    }

    fn get_outbound_edges(&self, id: &str) -> &[Edge] {
        self.outgoing_edges(id).unwrap_or_default()
    }

    fn get_position(&self, id: &str) -> Option<Position> {
        self.get_node(id).map(|node| node.position)
    }

    fn metric(&self) -> Metric {
        Graph::metric(self)
    }

    fn heuristic_is_admissible(&self) -> bool {
        Graph::heuristic_is_admissible(self)
    }
}
