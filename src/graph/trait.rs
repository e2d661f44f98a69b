use crate::{graph::*, Result};

/// Interfaces to create graphs and to add vertices and edges into them.
pub trait GrowableGraph {
    /// Creates an empty graph.
    fn new() -> Self;
    /// Adds a vertex with a fresh ID.
    fn add_vertex(&mut self) -> VertexId;
    /// Adds an edge from `source` to `sink` with a fresh ID.
    ///
    /// Parallel edges and self loops are allowed.
    /// Both endpoints must be in the graph, otherwise
    /// [GraphError::VertexNotFound](crate::GraphError::VertexNotFound) is returned
    /// and the graph is kept unchanged.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId>;
}

/// Interfaces to remove edges from graphs.
pub trait EdgeShrinkableGraph {
    /// Removes an edge and returns it if it is present.
    ///
    /// Removing an edge will not remove its endpoints.
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge>;

    /// Removes all edges connecting `source` to `sink` and returns them.
    ///
    /// On undirected graphs, edges in both orientations are removed.
    fn remove_edges_connecting(&mut self, source: &VertexId, sink: &VertexId) -> Vec<Edge>
    where
        Self: QueryableGraph + Sized,
    {
        let eids: Vec<_> = self
            .edges_connecting(source, sink)
            .map(|e| e.id)
            .collect();
        eids.iter().filter_map(|e| self.remove_edge(e)).collect()
    }
}

/// Interfaces to remove vertices from graphs.
pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and all edges connecting to it and returns these edges.
    ///
    /// Removing an absent vertex is a no-op.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static>;
}

/// Interfaces to query vertices and edges in graphs.
///
/// Queries on absent vertices and edges answer `false`, `0`, `None` or empty iterators.
/// Iterators are fresh on each call and yield items in a deterministic order
/// as long as the graph is not mutated.
pub trait QueryableGraph {
    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in ascending order of their ID's.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Total number of edges, each edge ID counted once.
    fn edge_size(&self) -> usize;
    /// Iterates over edges, each one exactly once.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;
    /// Iterates over edges from `source` to `sink`.
    ///
    /// On undirected graphs, this is symmetric.
    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// Iterates over edges ending at `v`, in the order of their insertion.
    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// Iterates over edges starting from `v`, in the order of their insertion.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// The largest ID among present vertices, or [VertexId::NONE] if the graph is empty.
    fn max_vertex(&self) -> VertexId {
        self.iter_vertices().max().unwrap_or(VertexId::NONE)
    }

    /// Tells whether there is an edge from `source` to `sink`.
    fn contains_edge_between(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.edges_connecting(source, sink).next().is_some()
    }

    /// ID of an edge from `source` to `sink`, if any.
    ///
    /// When there are parallel edges, the earliest inserted one is returned.
    fn edge_id(&self, source: &VertexId, sink: &VertexId) -> Option<EdgeId> {
        self.edges_connecting(source, sink).map(|e| e.id).min()
    }

    fn out_degree(&self, v: &VertexId) -> usize {
        self.out_edges(v).count()
    }

    fn in_degree(&self, v: &VertexId) -> usize {
        self.in_edges(v).count()
    }

    /// Iterates over sinks of out-edges of `v`.
    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.out_edges(v).map(|e| e.sink))
    }

    /// Iterates over sources of in-edges of `v`.
    fn predecessors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.in_edges(v).map(|e| e.source))
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Tells directed graphs from undirected ones.
pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;

    fn is_directed(&self) -> bool {
        Self::DIRECTED_OR_NOT
    }
}
