pub mod dfs;
pub mod dfs_iter;
pub mod path;

#[cfg(test)]
pub(crate) fn assert_path(
    expected: Vec<usize>,
    result: crate::error::Result<Option<path::Path>>,
) {
    let nodes: Vec<crate::graph::NodeIndex> = expected
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(Ok(Some(path::Path::new(nodes))), result);
}

#[cfg(test)]
pub(crate) fn assert_no_path(result: crate::error::Result<Option<path::Path>>) {
    assert_eq!(Ok(None), result);
}

/// Checks the structural path invariants: endpoints match, no node
/// repeats, every consecutive pair is an edge of the graph.
#[cfg(test)]
pub(crate) fn assert_valid_path(
    g: &crate::graph::Graph,
    source: crate::graph::NodeIndex,
    target: crate::graph::NodeIndex,
    path: &path::Path,
) {
    assert_eq!(path.source(), Some(source));
    assert_eq!(path.target(), Some(target));

    let mut seen = std::collections::HashSet::new();
    for node in &path.nodes {
        assert!(seen.insert(node), "node {} repeats on the path", node);
    }

    for pair in path.nodes.windows(2) {
        assert!(
            g.neighbors(pair[0]).iter().any(|n| n.node == pair[1]),
            "no edge between {} and {}",
            pair[0],
            pair[1]
        );
    }
}
