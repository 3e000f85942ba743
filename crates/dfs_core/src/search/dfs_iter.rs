use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::search::path::Path;
use crate::statistics::Stats;

/// Depth-first path search with an explicit stack.
///
/// Returns the same paths as [`Dfs`] but keeps its own stack of
/// `(node, neighbor cursor)` frames instead of recursing, so search depth
/// is bounded by node count rather than by the call stack.
///
/// [`Dfs`]: crate::search::dfs::Dfs
pub struct DfsIter<'a> {
    pub stats: Stats,
    g: &'a Graph,
}

impl<'a> DfsIter<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        DfsIter {
            g: graph,
            stats: Stats::default(),
        }
    }

    /// Searches for a path from `source` to `target`.
    ///
    /// Same contract as [`Dfs::search`]: `OutOfRange` for invalid
    /// endpoints before traversal, `Ok(None)` when no path exists.
    ///
    /// [`Dfs::search`]: crate::search::dfs::Dfs::search
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Result<Option<Path>> {
        self.g.check_node(source)?;
        self.g.check_node(target)?;

        self.stats.init();

        let mut path = vec![source];
        let mut visited = FxHashSet::default();
        visited.insert(source);
        self.stats.nodes_visited += 1;

        let mut found = source == target;

        if !found {
            // Each frame is a node on the current path and the position of
            // the next neighbor to try.
            let mut stack: Vec<(NodeIndex, usize)> = vec![(source, 0)];

            'descend: while let Some((node, mut cursor)) = stack.pop() {
                let neighbors = self.g.neighbors(node);
                while cursor < neighbors.len() {
                    let next = neighbors[cursor].node;
                    cursor += 1;
                    if visited.contains(&next) {
                        continue;
                    }

                    visited.insert(next);
                    path.push(next);
                    self.stats.nodes_visited += 1;

                    if next == target {
                        found = true;
                        break 'descend;
                    }

                    stack.push((node, cursor));
                    stack.push((next, 0));
                    continue 'descend;
                }

                // All neighbors exhausted: backtrack.
                path.pop();
            }
        }

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
}
