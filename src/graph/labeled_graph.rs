use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use std::collections::HashMap;

/// A graph wrapper over either directed or undirected graphs
/// to let vertices and edges be labeled.
///
/// * `V`: labels for vertices.
/// * `E`: labels for edges.
/// * `G`: the underlying graph, directed or undirected.
///
/// Labels are optional: vertices and edges added through [GrowableGraph] carry none
/// until [LabeledGraph::set_vertex_label] or [LabeledGraph::set_edge_label] is called.
/// Removing vertices or edges drops their labels as well.
///
/// A labeled graph is a graph itself, so traversals and shortest paths run on it directly.
#[derive(Clone)]
pub struct LabeledGraph<V, E, G = directed::TreeBackedGraph> {
    lower_graph: G,
    vertex_labels: HashMap<VertexId, V, RandomState>,
    edge_labels: HashMap<EdgeId, E, RandomState>,
}

impl<V, E, G> DirectedOrNot for LabeledGraph<V, E, G>
where
    G: DirectedOrNot,
{
    const DIRECTED_OR_NOT: bool = G::DIRECTED_OR_NOT;
}

impl<V, E, G> Default for LabeledGraph<V, E, G>
where
    G: GrowableGraph,
{
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl<V, E, G> LabeledGraph<V, E, G> {
    /// Wraps an existing graph. Its vertices and edges start without labels.
    pub fn from_graph(lower_graph: G) -> Self {
        Self {
            lower_graph,
            vertex_labels: HashMap::with_hasher(RandomState::new()),
            edge_labels: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// The wrapped graph.
    pub fn lower_graph(&self) -> &G {
        &self.lower_graph
    }

    pub fn vertex_label(&self, v: &VertexId) -> Option<&V> {
        self.vertex_labels.get(v)
    }

    pub fn edge_label_by_id(&self, e: &EdgeId) -> Option<&E> {
        self.edge_labels.get(e)
    }
}

impl<V, E, G> LabeledGraph<V, E, G>
where
    G: GrowableGraph,
{
    /// Adds a vertex with a label.
    pub fn add_labeled_vertex(&mut self, label: V) -> VertexId {
        let vid = self.lower_graph.add_vertex();
        self.vertex_labels.insert(vid, label);
        vid
    }

    /// Adds an edge with a label.
    pub fn add_labeled_edge(&mut self, source: VertexId, sink: VertexId, label: E) -> Result<EdgeId> {
        let eid = self.lower_graph.add_edge(source, sink)?;
        self.edge_labels.insert(eid, label);
        Ok(eid)
    }
}

impl<V, E, G> LabeledGraph<V, E, G>
where
    G: QueryableGraph,
{
    /// Label of the edge from `source` to `sink`, as found by [QueryableGraph::edge_id].
    pub fn edge_label(&self, source: &VertexId, sink: &VertexId) -> Option<&E> {
        self.lower_graph
            .edge_id(source, sink)
            .and_then(|e| self.edge_labels.get(&e))
    }

    /// Sets the label of a vertex and returns the previous one.
    pub fn set_vertex_label(&mut self, v: VertexId, label: V) -> Result<Option<V>> {
        if !self.lower_graph.contains_vertex(&v) {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(self.vertex_labels.insert(v, label))
    }

    /// Sets the label of the edge from `source` to `sink` and returns the previous one.
    pub fn set_edge_label(&mut self, source: &VertexId, sink: &VertexId, label: E) -> Result<Option<E>> {
        match self.lower_graph.edge_id(source, sink) {
            Some(eid) => Ok(self.edge_labels.insert(eid, label)),
            None => Err(GraphError::EdgeNotFound {
                from: *source,
                to: *sink,
            }),
        }
    }

    /// Sets the label of an edge and returns the previous one.
    pub fn set_edge_label_by_id(&mut self, e: EdgeId, label: E) -> Result<Option<E>> {
        if !self.lower_graph.contains_edge(&e) {
            return Err(GraphError::EdgeIdNotFound(e));
        }
        Ok(self.edge_labels.insert(e, label))
    }

    /// Iterates over labeled vertices in ascending order of their ID's.
    pub fn iter_labeled_vertices(&self) -> Box<dyn Iterator<Item = (VertexId, &V)> + '_> {
        let it = self
            .lower_graph
            .iter_vertices()
            .filter_map(|v| self.vertex_labels.get(&v).map(|l| (v, l)));
        Box::new(it)
    }
}

impl<V, E, G> GrowableGraph for LabeledGraph<V, E, G>
where
    G: GrowableGraph,
{
    fn new() -> Self {
        Self::from_graph(G::new())
    }

    fn add_vertex(&mut self) -> VertexId {
        self.lower_graph.add_vertex()
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId> {
        self.lower_graph.add_edge(source, sink)
    }
}

impl<V, E, G> EdgeShrinkableGraph for LabeledGraph<V, E, G>
where
    G: EdgeShrinkableGraph,
{
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let res = self.lower_graph.remove_edge(edge)?;
        self.edge_labels.remove(edge);
        Some(res)
    }
}

impl<V, E, G> VertexShrinkableGraph for LabeledGraph<V, E, G>
where
    G: VertexShrinkableGraph,
{
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        self.vertex_labels.remove(vertex);
        let removed: Vec<Edge> = self.lower_graph.remove_vertex(vertex).collect();
        for e in removed.iter() {
            self.edge_labels.remove(&e.id);
        }
        Box::new(removed.into_iter())
    }
}

impl<V, E, G> QueryableGraph for LabeledGraph<V, E, G>
where
    G: QueryableGraph,
{
    fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.lower_graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.lower_graph.contains_vertex(v)
    }

    fn max_vertex(&self) -> VertexId {
        self.lower_graph.max_vertex()
    }

    fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.iter_edges()
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.lower_graph.contains_edge(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.lower_graph.find_edge(e)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.edges_connecting(source, sink)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.in_edges(v)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.lower_graph.out_edges(v)
    }
}

impl<V, E, G> std::fmt::Debug for LabeledGraph<V, E, G>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.iter_vertices() {
            writeln!(f, "{} {:?}", v, self.vertex_label(&v))?;
            for e in self.out_edges(&v) {
                writeln!(
                    f,
                    "  --{} {:?}-> {}",
                    e.id,
                    self.edge_label_by_id(&e.id),
                    e.sink
                )?;
            }
        }
        Ok(())
    }
}
