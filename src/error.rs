use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

/// Errors raised by mutating or starting algorithms on vertices and edges
/// which are not in a graph.
///
/// Read-only queries never fail; they answer with `None`, `0`, `false` or empty iterators.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    VertexNotFound(VertexId),

    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("edge {0} is not in the graph")]
    EdgeIdNotFound(EdgeId),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
