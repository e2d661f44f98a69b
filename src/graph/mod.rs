//! Traits and implementations for directed and undirected graphs, and a labeled graph wrapper.
//!
//! # Low-level graphs and `LabeledGraph`
//!
//! Vertices and edges in graphs of this module are lightweight ID's.
//! They are essentially `usize`.
//! Algorithm authors may feel free to copy and store these ID's.
//!
//! Capabilities of graphs are split into traits:
//!
//! ```plain
//! Growable    Queryable    VertexShrinkable
//!                                 |
//!                                 v
//!                          EdgeShrinkable
//! ```
//!
//! There is also [LabeledGraph] to attach payloads to vertices and edges.
//! It is itself a graph, so every algorithm runs on it as well.
//!
//! # ID's
//!
//! Each graph issues ID's from its own monotonic counters starting at 1.
//! ID's of removed vertices and edges are never reissued by the same graph.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod labeled_graph;
pub use self::labeled_graph::*;
mod petgraph_backed;

pub mod directed;
pub mod undirected;
