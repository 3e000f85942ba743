//! Re-exports of the most commonly used items in `dfs_core`.
pub use crate::edge;
pub use crate::error::{GraphError, Result};
pub use crate::graph::node_index;
pub use crate::graph::Edge;
pub use crate::graph::Graph;
pub use crate::graph::NodeIndex;

pub use crate::search;
pub use crate::search::dfs::Dfs;
pub use crate::search::dfs_iter::DfsIter;
pub use crate::search::path::Path;
