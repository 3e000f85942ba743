//! Depth-first path search over small in-memory graphs.
//!
//! A [`Graph`] stores integer-indexed nodes with insertion-ordered
//! adjacency lists; [`Dfs`] finds *a* path between two nodes by recursive
//! descent with backtracking. Edge weights are stored but never compared,
//! so the returned path is the first one found, not the cheapest.
//!
//! # Basic usage
//! ```
//! use dfs_core::prelude::*;
//!
//! // 0 -- 1 -- 4
//! //  \   |
//! //   \  |
//! //     2 -- 3
//! let mut g = Graph::new(5, false);
//! g.add_edge(edge!(0 => 1)).unwrap();
//! g.add_edge(edge!(0 => 2)).unwrap();
//! g.add_edge(edge!(1 => 2)).unwrap();
//! g.add_edge(edge!(1 => 4)).unwrap();
//! g.add_edge(edge!(2 => 3)).unwrap();
//!
//! let mut dfs = Dfs::new(&g);
//! let path = dfs.search(node_index(0), node_index(3)).unwrap().unwrap();
//!
//! assert_eq!(path.source(), Some(node_index(0)));
//! assert_eq!(path.target(), Some(node_index(3)));
//! ```
//!
//! [`Graph`]: crate::graph::Graph
//! [`Dfs`]: crate::search::dfs::Dfs
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
