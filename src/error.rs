use thiserror::Error;

/// Errors surfaced at the library boundary.
///
/// Graph builders either return a complete [`CsrGraph`](crate::graph::CsrGraph)
/// or an error, never both; the visit kernels cannot fail once their
/// preconditions have been checked.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter failed validation (zero nodes, density outside `[0, 1]`,
    /// malformed CSR shape, out-of-range source, mismatched distance-vector
    /// length).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A node id outside `[0, num_nodes)` was passed to an accessor.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    OutOfRange { node: usize, num_nodes: usize },

    /// The edge-list file could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
