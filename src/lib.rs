//! Directed and undirected graphs, traversals and shortest paths.
//!
//! Vertices and edges are lightweight ID's ([graph::VertexId] and [graph::EdgeId]),
//! which are essentially `usize` and free to copy and store.
//! Payloads can be attached to them by wrapping a graph in a [graph::LabeledGraph].
//!
//! Algorithms in [algorithm] work on anything implementing [graph::QueryableGraph]
//! and are customized by small capability traits:
//! [algorithm::Visitor] for traversals and [algorithm::SearchCost] for shortest paths.
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
