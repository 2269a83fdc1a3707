//! Graph store: owns nodes and directed edges
//!
//! Nodes are keyed by [`NodeId`] and kept in insertion order; edges are
//! grouped by origin. Every mutation keeps three invariants:
//! - no two nodes share an id
//! - every edge endpoint resolves to a live node
//! - a node's adjacency list mirrors its outgoing edges

use crate::airport::AirportInfo;
use crate::config::GraphConfig;
use crate::error::{NavError, Result};
use crate::geometry::{Metric, Position};
use crate::graph::types::{Cost, Edge, GraphStats, Node, NodeId};
use crate::{bail_invalid, bail_not_found};
use std::collections::HashMap;

/// A directed, weighted navigation graph
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    metric: Metric,
    /// Insertion order of live node ids
    order: Vec<NodeId>,
    nodes: HashMap<NodeId, Node>,
    /// Outgoing edges keyed by origin id
    outgoing: HashMap<NodeId, Vec<Edge>>,
    /// Edges whose cost is below the metric distance between their endpoints
    underpriced: usize,
}

impl Graph {
    /// Create an empty graph using the given distance function
    pub fn new(name: impl Into<String>, metric: Metric) -> Self {
        Graph {
            name: name.into(),
            metric,
            order: Vec::new(),
            nodes: HashMap::new(),
            outgoing: HashMap::new(),
            underpriced: 0,
        }
    }

    /// Empty graph with Euclidean edge costs
    pub fn planar(name: impl Into<String>) -> Self {
        Graph::new(name, Metric::Planar)
    }

    /// Empty graph with great-circle edge costs in kilometers
    pub fn great_circle(name: impl Into<String>) -> Self {
        Graph::new(name, Metric::GreatCircle)
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Graph::new(config.name.clone(), config.metric)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// True while no edge is cheaper than the metric distance it spans,
    /// i.e. while the metric is a lower bound on every route cost
    pub fn heuristic_is_admissible(&self) -> bool {
        self.underpriced == 0
    }

    fn is_underpriced(&self, cost: Cost, from: Position, to: Position) -> bool {
        cost.value() < self.metric.distance(from, to)
    }

    /// Insert a node. Fails with `DuplicateId` if the id is taken.
    pub fn add_node(&mut self, mut node: Node) -> Result<()> {
        if self.nodes.contains_key(node.id.as_str()) {
            tracing::debug!(id = %node.id, "rejected duplicate node");
            return Err(NavError::duplicate_id(&node.id));
        }
        if !node.position.is_finite() {
            bail_invalid!(
                "position",
                format!("({}, {}) for node {}", node.position.x, node.position.y, node.id)
            );
        }

        // Adjacency is derived from edges, never supplied by the caller
        node.neighbors.clear();

        tracing::debug!(id = %node.id, name = %node.name, "add node");
        self.order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Remove a node together with every edge that touches it
    pub fn remove_node(&mut self, id: &str) -> Result<Node> {
        let Some(node) = self.nodes.remove(id) else {
            bail_not_found!("node", id);
        };

        self.order.retain(|existing| existing.as_str() != id);
        let mut dropped = self.outgoing.remove(id).unwrap_or_default();
        let dropped_out = dropped.len();

        for (origin, edges) in self.outgoing.iter_mut() {
            let (incoming, kept): (Vec<Edge>, Vec<Edge>) =
                edges.drain(..).partition(|edge| edge.to.as_str() == id);
            *edges = kept;
            if !incoming.is_empty() {
                dropped.extend(incoming);
                if let Some(origin_node) = self.nodes.get_mut(origin.as_str()) {
                    origin_node.neighbors.retain(|n| n.as_str() != id);
                }
            }
        }
        self.outgoing.retain(|_, edges| !edges.is_empty());
        let dropped_in = dropped.len() - dropped_out;

        // The removed node is no longer in the map; fall back to its own position
        let position_of = |key: &NodeId| {
            self.nodes
                .get(key.as_str())
                .map_or(node.position, |other| other.position)
        };
        let released = dropped
            .iter()
            .filter(|edge| {
                self.is_underpriced(edge.cost, position_of(&edge.from), position_of(&edge.to))
            })
            .count();
        self.underpriced -= released;

        tracing::debug!(id, dropped_out, dropped_in, "remove node");
        Ok(node)
    }

    /// Add a directed edge, pricing it with the graph metric when `cost` is None
    pub fn add_edge(&mut self, from: &str, to: &str, cost: Option<f64>) -> Result<Cost> {
        self.insert_edge(None, from, to, cost)
    }

    /// Add a directed edge carrying a segment label
    pub fn add_named_edge(
        &mut self,
        name: impl Into<String>,
        from: &str,
        to: &str,
        cost: Option<f64>,
    ) -> Result<Cost> {
        self.insert_edge(Some(name.into()), from, to, cost)
    }

    fn insert_edge(
        &mut self,
        name: Option<String>,
        from: &str,
        to: &str,
        cost: Option<f64>,
    ) -> Result<Cost> {
        let origin = self.require_node(from)?;
        let destination = self.require_node(to)?;

        if self.edge(from, to).is_some() {
            tracing::debug!(from, to, "rejected duplicate edge");
            return Err(NavError::duplicate_edge(from, to));
        }

        let distance = self.metric.distance(origin.position, destination.position);
        let cost = match cost {
            Some(value) if !value.is_finite() || value < 0.0 => {
                bail_invalid!("cost", format!("{} for edge {} -> {}", value, from, to))
            }
            Some(value) => Cost::new(value),
            None => Cost::new(distance),
        };
        let underpriced = self.is_underpriced(cost, origin.position, destination.position);

        let edge = Edge {
            from: origin.id.clone(),
            to: destination.id.clone(),
            cost,
            name,
        };

        tracing::debug!(from, to, cost = cost.value(), "add edge");
        if underpriced {
            // Search falls back to uniform-cost expansion while any such edge exists
            tracing::debug!(from, to, distance, "edge cost below metric distance");
            self.underpriced += 1;
        }
        if let Some(origin_node) = self.nodes.get_mut(from) {
            origin_node.neighbors.push(edge.to.clone());
        }
        self.outgoing.entry(edge.from.clone()).or_default().push(edge);
        Ok(cost)
    }

    /// Remove the directed edge `from -> to`
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<Edge> {
        let position = self
            .outgoing
            .get(from)
            .and_then(|edges| edges.iter().position(|edge| edge.to.as_str() == to));

        let (Some(index), Some(edges)) = (position, self.outgoing.get_mut(from)) else {
            bail_not_found!("edge", format!("{} -> {}", from, to));
        };

        let edge = edges.remove(index);
        if edges.is_empty() {
            self.outgoing.remove(from);
        }
        if let Some(origin_node) = self.nodes.get_mut(from) {
            origin_node.neighbors.retain(|n| n.as_str() != to);
        }
        if let (Some(origin), Some(destination)) = (self.nodes.get(from), self.nodes.get(to)) {
            if self.is_underpriced(edge.cost, origin.position, destination.position) {
                self.underpriced -= 1;
            }
        }

        tracing::debug!(from, to, "remove edge");
        Ok(edge)
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Like [`Graph::get_node`] but reports a missing id as `NotFound`
    pub fn require_node(&self, id: &str) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| NavError::not_found("node", id))
    }

    /// First node with this display name, by insertion order
    pub fn find_node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes().find(|node| node.name == name)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id.as_str()))
    }

    /// Edges grouped by origin, origins in node insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.order
            .iter()
            .filter_map(|id| self.outgoing.get(id.as_str()))
            .flatten()
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.outgoing
            .get(from)?
            .iter()
            .find(|edge| edge.to.as_str() == to)
    }

    pub fn find_edge_by_name(&self, name: &str) -> Option<&Edge> {
        self.edges().find(|edge| edge.name.as_deref() == Some(name))
    }

    /// Edges leaving `id`, in insertion order
    pub fn outgoing_edges(&self, id: &str) -> Result<&[Edge]> {
        self.require_node(id)?;
        Ok(self.outgoing.get(id).map(Vec::as_slice).unwrap_or_default())
    }

    /// Edges arriving at `id`
    pub fn incoming_edges(&self, id: &str) -> Result<Vec<&Edge>> {
        self.require_node(id)?;
        Ok(self.edges().filter(|edge| edge.to.as_str() == id).collect())
    }

    /// Adjacency list of `id`
    pub fn neighbors(&self, id: &str) -> Result<&[NodeId]> {
        Ok(self.require_node(id)?.neighbors())
    }

    /// Node closest to `position` under the graph metric.
    /// Ties go to the earliest inserted node; None on an empty graph.
    pub fn nearest_node(&self, position: Position) -> Option<&Node> {
        let mut best: Option<(&Node, f64)> = None;
        for node in self.nodes() {
            let distance = self.metric.distance(node.position, position);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((node, distance)),
            }
        }
        best.map(|(node, _)| node)
    }

    /// Metric distance between two nodes' positions
    pub fn distance_between(&self, from: &str, to: &str) -> Result<Cost> {
        let a = self.require_node(from)?;
        let b = self.require_node(to)?;
        Ok(Cost::new(self.metric.distance(a.position, b.position)))
    }

    /// Attach (or replace) airport procedures on an existing node
    pub fn attach_airport(&mut self, id: &str, airport: AirportInfo) -> Result<()> {
        let Some(node) = self.nodes.get_mut(id) else {
            bail_not_found!("node", id);
        };
        tracing::debug!(id, icao = %airport.icao, "attach airport");
        node.airport = Some(airport);
        Ok(())
    }

    pub fn airport(&self, id: &str) -> Option<&AirportInfo> {
        self.nodes.get(id)?.airport()
    }

    /// Node carrying the airport with this ICAO code
    pub fn find_airport(&self, icao: &str) -> Option<&Node> {
        self.nodes()
            .find(|node| node.airport().is_some_and(|airport| airport.icao == icao))
    }

    /// Nodes decorated as airports, in insertion order
    pub fn airports(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|node| node.airport().is_some())
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            name: self.name.clone(),
            nodes: self.node_count(),
            edges: self.edge_count(),
            airports: 0,
            total_sids: 0,
            total_stars: 0,
        };
        for airport in self.airports().filter_map(Node::airport) {
            stats.airports += 1;
            stats.total_sids += airport.sid_count();
            stats.total_stars += airport.star_count();
        }
        stats
    }
}
