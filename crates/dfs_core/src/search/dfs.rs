use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::search::path::Path;
use crate::statistics::Stats;

/// Recursive depth-first path search.
///
/// Finds *a* path between two nodes, not the cheapest one; edge weights
/// are ignored during traversal. Neighbors are explored in insertion
/// order and the first branch that reaches the target wins.
pub struct Dfs<'a> {
    pub stats: Stats,
    g: &'a Graph,
}

impl<'a> Dfs<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dfs {
            g: graph,
            stats: Stats::default(),
        }
    }

    /// Searches for a path from `source` to `target`.
    ///
    /// Returns `Ok(None)` if `target` is not reachable from `source` and
    /// fails with `OutOfRange` before any traversal if either endpoint is
    /// not a node of the graph. Path and visited state are created fresh
    /// on every call, so repeated searches are independent.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Result<Option<Path>> {
        self.g.check_node(source)?;
        self.g.check_node(target)?;

        self.stats.init();

        let mut path = Vec::new();
        let mut visited = FxHashSet::default();
        let found = self.visit(source, target, &mut path, &mut visited);

        self.stats.finish();

        if found {
            debug!("Path found: {:?}", path);
            info!(
                "Path found: {:?}/{} nodes visited",
                self.stats.duration.unwrap(),
                self.stats.nodes_visited
            );
            Ok(Some(Path::new(path)))
        } else {
            info!(
                "No path found: {:?}/{} nodes visited",
                self.stats.duration.unwrap(),
                self.stats.nodes_visited
            );
            Ok(None)
        }
    }

    fn visit(
        &mut self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        visited: &mut FxHashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        visited.insert(current);
        self.stats.nodes_visited += 1;

        if current == target {
            return true;
        }

        for neighbor in self.g.neighbors(current) {
            if visited.contains(&neighbor.node) {
                continue;
            }
            if self.visit(neighbor.node, target, path, visited) {
                return true;
            }
        }

        // Branch exhausted: take `current` back off the path.
        path.pop();
        false
    }
}
