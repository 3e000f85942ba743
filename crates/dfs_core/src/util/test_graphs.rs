//! Small hand-built graphs shared by tests and the demo binary.
use crate::edge;
use crate::graph::Graph;

/// Undirected 5-node graph, all edges at the default weight:
///
/// 0 -- 1 -- 4
///  \   |
///   \  |
///     2 -- 3
pub fn generate_demo_graph() -> Graph {
    let mut g = Graph::new(5, false);

    g.add_edge(edge!(0 => 1)).unwrap();
    g.add_edge(edge!(0 => 2)).unwrap();
    g.add_edge(edge!(1 => 2)).unwrap();
    g.add_edge(edge!(1 => 4)).unwrap();
    g.add_edge(edge!(2 => 3)).unwrap();

    g
}

/// Directed chain: 0 -> 1 -> 2 -> 3
pub fn generate_directed_chain() -> Graph {
    let mut g = Graph::new(4, true);

    g.add_edge(edge!(0 => 1)).unwrap();
    g.add_edge(edge!(1 => 2)).unwrap();
    g.add_edge(edge!(2 => 3)).unwrap();

    g
}

/// Undirected ring over `num_nodes` nodes: 0 - 1 - ... - (n-1) - 0
pub fn generate_ring(num_nodes: usize) -> Graph {
    let mut g = Graph::new(num_nodes, false);

    for i in 0..num_nodes {
        g.add_edge(edge!(i => (i + 1) % num_nodes)).unwrap();
    }

    g
}
