//! Implementations of directed graphs

mod tree_backed;
pub use self::tree_backed::*;

/// A directed adjacency-list graph.
pub type PetgraphBackedGraph = super::petgraph_backed::PetgraphBackedGraph<petgraph::Directed>;

#[cfg(test)]
pub use self::tests::*;
