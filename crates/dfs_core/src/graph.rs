use std::fmt;

use crate::constants::{Weight, DEFAULT_WEIGHT};
use crate::error::{GraphError, Result};

/// Node identifier. Valid indices are `0..num_nodes` of the owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// A weighted connection from `source` to `target`.
///
/// Whether the edge is mirrored on insertion is decided by the graph's
/// directedness, not by the edge itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// An edge with [`DEFAULT_WEIGHT`].
    pub fn unweighted(source: NodeIndex, target: NodeIndex) -> Self {
        Edge::new(source, target, DEFAULT_WEIGHT)
    }
}

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: NodeIndex,
    pub weight: Weight,
}

/// Adjacency-list graph with a fixed node count.
///
/// Every node in `0..num_nodes` owns an adjacency entry from construction
/// onward. Neighbor lists keep insertion order and reject duplicate
/// `(node, weight)` pairs, so iteration order is deterministic for a given
/// insertion sequence.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Neighbor>>,
    directed: bool,
}

impl Graph {
    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize, directed: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
            directed,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub(crate) fn check_node(&self, node: NodeIndex) -> Result<()> {
        if node.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index: node.index(),
                num_nodes: self.adjacency.len(),
            })
        }
    }

    /// Add a new `edge` to the graph.
    ///
    /// Fails with [`GraphError::OutOfRange`] if either endpoint is not a
    /// node of this graph. On an undirected graph the reverse neighbor is
    /// inserted as well. Inserting an edge that is already present has no
    /// effect.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.check_node(edge.source)?;
        self.check_node(edge.target)?;

        Self::insert(
            &mut self.adjacency[edge.source.index()],
            Neighbor {
                node: edge.target,
                weight: edge.weight,
            },
        );

        if !self.directed {
            Self::insert(
                &mut self.adjacency[edge.target.index()],
                Neighbor {
                    node: edge.source,
                    weight: edge.weight,
                },
            );
        }

        Ok(())
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    fn insert(list: &mut Vec<Neighbor>, neighbor: Neighbor) {
        if !list.contains(&neighbor) {
            list.push(neighbor);
        }
    }

    /// Returns the neighbors of `node` in insertion order.
    ///
    /// Out-of-range indices yield an empty slice; `add_edge` and the
    /// search entry points are the guarded surfaces.
    pub fn neighbors(&self, node: NodeIndex) -> &[Neighbor] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns one `(node, neighbors)` pair per node in ascending node
    /// order. Pure observer; the `Display` impl renders the same dump.
    pub fn adjacency(&self) -> impl Iterator<Item = (NodeIndex, &[Neighbor])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, neighbors)| (NodeIndex::new(i), neighbors.as_slice()))
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}, directed: {}",
            self.num_nodes(),
            self.num_edges(),
            self.directed
        );
    }

    /// Number of distinct edges. Mirrored entries of an undirected graph
    /// count once.
    pub fn num_edges(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed {
            entries
        } else {
            // Self-loops are stored once even on undirected graphs.
            let self_loops = self
                .adjacency
                .iter()
                .enumerate()
                .flat_map(|(i, neighbors)| neighbors.iter().map(move |n| (i, n)))
                .filter(|(i, n)| n.node.index() == *i)
                .count();
            (entries - self_loops) / 2 + self_loops
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in self.adjacency() {
            write!(f, "node {}:", node)?;
            for neighbor in neighbors {
                write!(f, " ({}, {})", neighbor.node, neighbor.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Macro to create an edge from source to target
///
/// edge!(0 => 1) Returns an edge with the default weight
///
/// edge!(0 => 1, 3.0) Returns an edge with weight 3.0
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr => $target:expr) => {
        $crate::graph::Edge::unweighted($source.into(), $target.into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_has_an_adjacency_entry() {
        let g = Graph::new(4, true);

        let dump: Vec<_> = g.adjacency().collect();
        assert_eq!(dump.len(), 4);
        for (i, (node, neighbors)) in dump.iter().enumerate() {
            assert_eq!(node.index(), i);
            assert!(neighbors.is_empty());
        }
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let mut g = Graph::new(3, false);
        g.add_edge(edge!(0 => 1, 2.0)).unwrap();

        assert_eq!(
            g.neighbors(node_index(0)),
            &[Neighbor {
                node: node_index(1),
                weight: 2.0
            }]
        );
        assert_eq!(
            g.neighbors(node_index(1)),
            &[Neighbor {
                node: node_index(0),
                weight: 2.0
            }]
        );
        assert!(g.neighbors(node_index(2)).is_empty());
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = Graph::new(3, true);
        g.add_edge(edge!(0 => 1)).unwrap();

        assert_eq!(g.neighbors(node_index(0)).len(), 1);
        assert!(g.neighbors(node_index(1)).is_empty());
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new(2, false);
        g.add_edge(edge!(0 => 1)).unwrap();
        g.add_edge(edge!(0 => 1)).unwrap();

        assert_eq!(g.neighbors(node_index(0)).len(), 1);
        assert_eq!(g.neighbors(node_index(1)).len(), 1);

        // Same endpoints with a different weight is a distinct pair.
        g.add_edge(edge!(0 => 1, 5.0)).unwrap();
        assert_eq!(g.neighbors(node_index(0)).len(), 2);
    }

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let mut g = Graph::new(2, false);

        assert_eq!(
            g.add_edge(edge!(0 => 2)),
            Err(GraphError::OutOfRange {
                index: 2,
                num_nodes: 2
            })
        );
        assert_eq!(
            g.add_edge(edge!(7 => 1)),
            Err(GraphError::OutOfRange {
                index: 7,
                num_nodes: 2
            })
        );
        // A failed insertion leaves the adjacency untouched.
        assert!(g.neighbors(node_index(0)).is_empty());
        assert!(g.neighbors(node_index(1)).is_empty());
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut g = Graph::new(4, true);
        g.add_edge(edge!(0 => 3)).unwrap();
        g.add_edge(edge!(0 => 1)).unwrap();
        g.add_edge(edge!(0 => 2)).unwrap();

        let order: Vec<_> = g
            .neighbors(node_index(0))
            .iter()
            .map(|n| n.node.index())
            .collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn adjacency_dump_renders_all_nodes() {
        let mut g = Graph::new(3, false);
        g.add_edge(edge!(0 => 1)).unwrap();

        let dump = g.to_string();
        assert_eq!(dump.lines().count(), 3);
        assert!(dump.lines().next().unwrap().starts_with("node 0:"));
        assert!(dump.contains("(1, 1)"));
    }

    #[test]
    fn undirected_insertion_is_symmetric() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(
                &proptest::collection::vec((0..12usize, 0..12usize), 1..40),
                |edges| {
                    let mut g = Graph::new(12, false);
                    for (u, v) in &edges {
                        g.add_edge(edge!(*u => *v)).unwrap();
                    }
                    for (u, v) in edges {
                        let forward = Neighbor {
                            node: node_index(v),
                            weight: DEFAULT_WEIGHT,
                        };
                        let backward = Neighbor {
                            node: node_index(u),
                            weight: DEFAULT_WEIGHT,
                        };
                        assert!(g.neighbors(node_index(u)).contains(&forward));
                        assert!(g.neighbors(node_index(v)).contains(&backward));
                    }
                    Ok(())
                },
            )
            .unwrap();
    }

    #[test]
    fn insertion_is_idempotent() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(
                &proptest::collection::vec((0..8usize, 0..8usize), 1..20),
                |edges| {
                    let mut once = Graph::new(8, false);
                    let mut twice = Graph::new(8, false);
                    for (u, v) in &edges {
                        once.add_edge(edge!(*u => *v)).unwrap();
                        twice.add_edge(edge!(*u => *v)).unwrap();
                        twice.add_edge(edge!(*u => *v)).unwrap();
                    }
                    for node in 0..8 {
                        assert_eq!(
                            once.neighbors(node_index(node)),
                            twice.neighbors(node_index(node))
                        );
                    }
                    Ok(())
                },
            )
            .unwrap();
    }
}
