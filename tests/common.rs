use navgraph::{Graph, Node, Position};

/// Planar graph from `(id, x, y)` nodes and `(from, to, cost)` edges
pub fn planar_graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str, Option<f64>)]) -> Graph {
    let mut graph = Graph::planar("test");
    for (id, x, y) in nodes {
        graph
            .add_node(Node::new(*id, *id, Position::planar(*x, *y)))
            .expect("add node");
    }
    for (from, to, cost) in edges {
        graph.add_edge(from, to, *cost).expect("add edge");
    }
    graph
}

/// Nodes A..D in a chain plus an isolated E
#[allow(dead_code)]
pub fn chain_with_island() -> Graph {
    planar_graph(
        &[
            ("A", 0.0, 0.0),
            ("B", 1.0, 0.0),
            ("C", 2.0, 1.0),
            ("D", 4.0, 1.0),
            ("E", 9.0, 9.0),
        ],
        &[("A", "B", None), ("B", "C", None), ("C", "D", None)],
    )
}

#[allow(dead_code)]
pub fn sorted_ids(ids: impl IntoIterator<Item = navgraph::NodeId>) -> Vec<String> {
    let mut ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
    ids.sort();
    ids
}
