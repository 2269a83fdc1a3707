use crate::error::{NavError, Result};
use crate::graph::path::Path;
use crate::graph::types::{Cost, NodeId, SearchOptions};
use crate::graph::GraphProvider;
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by estimated total cost)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    /// Accumulated cost from the origin (`g`)
    pub accumulated_cost: Cost,
    /// `g + h`
    pub estimated_cost: Cost,
    /// Insertion sequence; earlier entries win ties
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimated_cost
            .total_cmp(&other.estimated_cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Result of a route search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Lowest-cost path, or None when the destination was not reached
    pub path: Option<Path>,
    /// Number of nodes finalized
    pub expanded: usize,
    /// True when the expansion budget stopped the search early
    pub truncated: bool,
}

/// State tracked during A* search
struct AStarState {
    open: BinaryHeap<Reverse<HeapEntry>>,
    closed: HashSet<NodeId>,
    /// Best known accumulated cost per node
    best: HashMap<NodeId, Cost>,
    /// Predecessor and the cost of the edge taken from it
    came_from: HashMap<NodeId, (NodeId, Cost)>,
    next_seq: u64,
}

impl AStarState {
    fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            best: HashMap::new(),
            came_from: HashMap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, node_id: NodeId, accumulated_cost: Cost, heuristic: Cost) {
        let entry = HeapEntry {
            node_id,
            accumulated_cost,
            estimated_cost: accumulated_cost + heuristic,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.open.push(Reverse(entry));
    }

    /// Pop the cheapest entry that is still current
    fn pop(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.open.pop() {
            if self.closed.contains(entry.node_id.as_str()) {
                continue;
            }
            // Superseded by a cheaper re-insertion
            let is_current = self
                .best
                .get(entry.node_id.as_str())
                .is_none_or(|best| entry.accumulated_cost.total_cmp(best) != Ordering::Greater);
            if is_current {
                return Some(entry);
            }
        }
        None
    }

    fn reconstruct(&self, origin: &str, destination: NodeId) -> Path {
        let mut legs: Vec<(NodeId, Cost)> = Vec::new();
        let mut current = destination;
        while current.as_str() != origin {
            let Some((pred, edge_cost)) = self.came_from.get(current.as_str()) else {
                break;
            };
            legs.push((current, *edge_cost));
            current = pred.clone();
        }

        let mut path = Path::new(current);
        for (id, edge_cost) in legs.into_iter().rev() {
            path.push(id, edge_cost);
        }
        path
    }
}

fn heuristic(provider: &dyn GraphProvider, from: &str, to: &str) -> Cost {
    provider.remaining_estimate(from, to).unwrap_or(Cost::ZERO)
}

/// Best-first search for the lowest-cost route from `from` to `to`.
///
/// Nodes are finalized at most once; ties on `g + h` go to the entry
/// inserted first. Fails with `NotFound` when either endpoint is unknown.
#[tracing::instrument(skip(provider, opts), fields(from = %from, to = %to, max_expansions = ?opts.max_expansions))]
pub fn search(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    if !provider.contains(from) {
        return Err(NavError::not_found("origin", from));
    }
    if !provider.contains(to) {
        return Err(NavError::not_found("destination", to));
    }

    if from == to {
        return Ok(SearchOutcome {
            path: Some(Path::new(from)),
            expanded: 0,
            truncated: false,
        });
    }

    let start = Instant::now();
    let mut state = AStarState::new();
    let origin = NodeId::from(from);
    state.best.insert(origin.clone(), Cost::ZERO);
    state.push(origin, Cost::ZERO, heuristic(provider, from, to));

    let mut expanded = 0;
    let mut truncated = false;
    let mut found = None;

    while let Some(current) = state.pop() {
        if current.node_id.as_str() == to {
            found = Some(state.reconstruct(from, current.node_id));
            break;
        }

        if opts.max_expansions.is_some_and(|max| expanded >= max) {
            truncated = true;
            break;
        }

        expanded += 1;
        state.closed.insert(current.node_id.clone());

        for edge in provider.get_outbound_edges(current.node_id.as_str()) {
            if state.closed.contains(edge.to.as_str()) {
                continue;
            }

            let tentative = current.accumulated_cost + edge.cost;
            let improves = state
                .best
                .get(edge.to.as_str())
                .is_none_or(|known| tentative.total_cmp(known) == Ordering::Less);
            if !improves {
                continue;
            }

            state.best.insert(edge.to.clone(), tentative);
            state
                .came_from
                .insert(edge.to.clone(), (current.node_id.clone(), edge.cost));
            let h = heuristic(provider, edge.to.as_str(), to);
            state.push(edge.to.clone(), tentative, h);
        }
    }

    match &found {
        Some(path) => tracing::debug!(
            expanded,
            hops = path.hops(),
            cost = path.cost().value(),
            "route found"
        ),
        None => tracing::debug!(expanded, truncated, "no route"),
    }
    trace_time!(start, "astar_search");

    Ok(SearchOutcome {
        path: found,
        expanded,
        truncated,
    })
}
