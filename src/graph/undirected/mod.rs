//! Implementations of undirected graphs
//!
//! Every edge is reachable from both of its endpoints under the same [EdgeId](crate::graph::EdgeId).
//! Thus predecessors are the same as successors,
//! and in-degrees are the same as out-degrees.

mod tree_backed;
pub use self::tree_backed::*;

/// An undirected adjacency-list graph.
pub type PetgraphBackedGraph = super::petgraph_backed::PetgraphBackedGraph<petgraph::Undirected>;
