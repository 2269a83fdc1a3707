use crate::airport::AirportInfo;
use crate::geometry::Position;
use serde::Serialize;

/// Stable identifier of a node within one graph.
///
/// Fix numbers and airport/waypoint names both map onto it; the id never
/// changes once the node is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<u32> for NodeId {
    fn from(number: u32) -> Self {
        NodeId(number.to_string())
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Cost of traversing one or more edges.
/// Same unit as the graph's metric (kilometers for great-circle graphs).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order over costs; edge costs are validated finite on insert
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A named point in the graph (navigation fix or airport)
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub position: Position,
    /// Directly reachable node ids, in edge insertion order
    pub(crate) neighbors: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) airport: Option<AirportInfo>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, position: Position) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            position,
            neighbors: Vec::new(),
            airport: None,
        }
    }

    /// Node decorated with airport procedures
    pub fn with_airport(mut self, airport: AirportInfo) -> Self {
        self.airport = Some(airport);
        self
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn airport(&self) -> Option<&AirportInfo> {
        self.airport.as_ref()
    }
}

/// A directed segment between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: Cost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Summary counts for a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub name: String,
    pub nodes: usize,
    pub edges: usize,
    pub airports: usize,
    pub total_sids: usize,
    pub total_stars: usize,
}

/// Options for route search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop after finalizing this many nodes (None = unbounded)
    pub max_expansions: Option<usize>,
}
