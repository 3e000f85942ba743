use std::fmt;

use crate::graph::NodeIndex;

/// A found path: an ordered, repeat-free node sequence where each
/// consecutive pair is connected by an edge of the searched graph.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Path {
    pub nodes: Vec<NodeIndex>,
}

impl Path {
    pub fn new(nodes: Vec<NodeIndex>) -> Self {
        Path { nodes }
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
