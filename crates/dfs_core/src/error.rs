//! Error types for `dfs_core`.
use thiserror::Error;

/// Result type alias using [`GraphError`]
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by graph mutation and search entry points.
///
/// "No path exists" is not an error; searches report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node index {index} is out of range for a graph with {num_nodes} nodes")]
    OutOfRange { index: usize, num_nodes: usize },
}
