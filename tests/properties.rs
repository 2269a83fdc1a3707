//! Property checks for reachability and route search on random small graphs

use navgraph::{reachable, shortest_path, Graph, Node, NodeId, Position};
use proptest::prelude::*;
use std::collections::HashSet;

type Points = Vec<(i32, i32)>;
type Links = Vec<(usize, usize, f64)>;

/// Node count, positions, edges with a cost multiplier, and two query endpoints
fn graph_with_factors<F>(factor: F) -> impl Strategy<Value = (Points, Links, usize, usize)>
where
    F: Strategy<Value = f64> + Clone + 'static,
{
    (2usize..7).prop_flat_map(move |n| {
        (
            prop::collection::vec((0i32..20, 0i32..20), n),
            prop::collection::vec((0..n, 0..n, factor.clone()), 0..n * 3),
            0..n,
            0..n,
        )
    })
}

/// Edge costs are a whole multiple of the straight-line distance, so the
/// distance heuristic stays a lower bound
fn graph_strategy() -> impl Strategy<Value = (Points, Links, usize, usize)> {
    graph_with_factors((1u8..4).prop_map(f64::from))
}

/// Edge costs anywhere from free up to the straight-line distance
fn cheap_graph_strategy() -> impl Strategy<Value = (Points, Links, usize, usize)> {
    graph_with_factors(0.0f64..1.0)
}

fn id(index: usize) -> String {
    format!("N{}", index)
}

fn build(points: &[(i32, i32)], links: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::planar("prop");
    for (i, (x, y)) in points.iter().enumerate() {
        graph
            .add_node(Node::new(id(i), id(i), Position::planar(f64::from(*x), f64::from(*y))))
            .unwrap();
    }
    for (from, to, factor) in links {
        let (from, to) = (id(*from), id(*to));
        let distance = graph.distance_between(&from, &to).unwrap().value();
        // Repeated pairs are rejected as duplicates; keep the first
        let _ = graph.add_edge(&from, &to, Some(distance * factor));
    }
    graph
}

/// Cheapest simple route by exhaustive enumeration
fn brute_force(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: &str,
        to: &str,
        cost: f64,
        seen: &mut HashSet<String>,
        best: &mut Option<f64>,
    ) {
        if current == to {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for edge in graph.outgoing_edges(current).unwrap() {
            let next = edge.to.as_str();
            if seen.insert(next.to_string()) {
                walk(graph, next, to, cost + edge.cost.value(), seen, best);
                seen.remove(next);
            }
        }
    }

    let mut seen = HashSet::from([from.to_string()]);
    let mut best = None;
    walk(graph, from, to, 0.0, &mut seen, &mut best);
    best
}

fn check_against_enumeration(graph: &Graph, from: &str, to: &str) -> Result<(), TestCaseError> {
    let found = shortest_path(graph, from, to).unwrap();
    let expected = brute_force(graph, from, to);

    match (found, expected) {
        (Some(path), Some(best)) => {
            prop_assert!((path.cost().value() - best).abs() < 1e-9,
                "search {} vs exhaustive {}", path.cost().value(), best);
        }
        (None, None) => {}
        (found, expected) => {
            prop_assert!(false, "search {:?} vs exhaustive {:?}", found.map(|p| p.cost()), expected);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn reachable_contains_start((points, links, a, _b) in graph_strategy()) {
        let graph = build(&points, &links);
        let set = reachable(&graph, &id(a)).unwrap();
        prop_assert!(set.contains(id(a).as_str()));
    }

    #[test]
    fn reachable_is_closed_under_edges((points, links, a, _b) in graph_strategy()) {
        let graph = build(&points, &links);
        let set: HashSet<NodeId> = reachable(&graph, &id(a)).unwrap();
        for edge in graph.edges() {
            if set.contains(&edge.from) {
                prop_assert!(set.contains(&edge.to));
            }
        }
    }

    #[test]
    fn path_to_self_is_single_node((points, links, a, _b) in graph_strategy()) {
        let graph = build(&points, &links);
        let path = shortest_path(&graph, &id(a), &id(a)).unwrap().unwrap();
        prop_assert_eq!(path.len(), 1);
        prop_assert_eq!(path.cost().value(), 0.0);
    }

    #[test]
    fn search_matches_exhaustive_enumeration((points, links, a, b) in graph_strategy()) {
        let graph = build(&points, &links);
        check_against_enumeration(&graph, &id(a), &id(b))?;
    }

    #[test]
    fn search_matches_exhaustive_enumeration_with_cheap_edges(
        (points, links, a, b) in cheap_graph_strategy()
    ) {
        let graph = build(&points, &links);
        check_against_enumeration(&graph, &id(a), &id(b))?;
    }

    #[test]
    fn admissibility_follows_edge_removal((points, links, a, _b) in cheap_graph_strategy()) {
        let mut graph = build(&points, &links);
        graph.remove_node(&id(a)).unwrap();
        let first_edge = graph.edges().next().cloned();
        if let Some(edge) = first_edge {
            graph.remove_edge(edge.from.as_str(), edge.to.as_str()).unwrap();
        }

        let any_cheap = graph.edges().any(|edge| {
            let distance = graph.distance_between(edge.from.as_str(), edge.to.as_str()).unwrap();
            edge.cost.value() < distance.value()
        });
        prop_assert_eq!(graph.heuristic_is_admissible(), !any_cheap);
    }

    #[test]
    fn found_paths_follow_real_edges((points, links, a, b) in graph_strategy()) {
        let graph = build(&points, &links);
        if let Some(path) = shortest_path(&graph, &id(a), &id(b)).unwrap() {
            prop_assert_eq!(path.origin().as_str(), id(a));
            prop_assert_eq!(path.last().as_str(), id(b));
            let mut total = 0.0;
            for (from, to) in path.legs() {
                let edge = graph.edge(from.as_str(), to.as_str());
                prop_assert!(edge.is_some());
                total += edge.map_or(0.0, |e| e.cost.value());
            }
            prop_assert!((path.cost().value() - total).abs() < 1e-9);
        }
    }

    #[test]
    fn removing_a_node_leaves_no_references((points, links, a, _b) in graph_strategy()) {
        let mut graph = build(&points, &links);
        let victim = id(a);
        graph.remove_node(&victim).unwrap();

        prop_assert!(!graph.contains_node(&victim));
        for node in graph.nodes() {
            let here = node.id.as_str();
            for edge in graph.outgoing_edges(here).unwrap() {
                prop_assert_ne!(edge.to.as_str(), victim.as_str());
            }
            for edge in graph.incoming_edges(here).unwrap() {
                prop_assert_ne!(edge.from.as_str(), victim.as_str());
            }
            prop_assert!(node.neighbors().iter().all(|n| n.as_str() != victim));
        }
    }
}
