//! Graphs backed by `petgraph`'s stable adjacency lists.
//!
//! Use [directed::PetgraphBackedGraph](crate::graph::directed::PetgraphBackedGraph)
//! and [undirected::PetgraphBackedGraph](crate::graph::undirected::PetgraphBackedGraph).
use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableGraph,
    visit::EdgeRef,
    Directed, Direction, EdgeType, Undirected,
};
use std::collections::BTreeMap;

type NodeIdx = NodeIndex<usize>;
type EdgeIdx = EdgeIndex<usize>;

/// An adjacency-list graph.
///
/// `petgraph` recycles indices of removed nodes and edges,
/// so ID's are issued by this graph and mapped to `petgraph` indices.
/// Thus ID's follow the same policy as all other graphs in this crate.
///
/// Iterations collect and sort their items before yielding,
/// which costs O(k log k) for k items.
#[derive(Clone)]
pub struct PetgraphBackedGraph<Ty: EdgeType> {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    graph: StableGraph<(), (), Ty, usize>,
    vertices: BiHashMap<VertexId, NodeIdx, RandomState, RandomState>,
    edges: BiHashMap<EdgeId, EdgeIdx, RandomState, RandomState>,
}

impl DirectedOrNot for PetgraphBackedGraph<Directed> {
    const DIRECTED_OR_NOT: bool = true;
}

impl DirectedOrNot for PetgraphBackedGraph<Undirected> {
    const DIRECTED_OR_NOT: bool = false;
}

impl<Ty: EdgeType> Default for PetgraphBackedGraph<Ty> {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl<Ty: EdgeType> std::fmt::Debug for PetgraphBackedGraph<Ty> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PetgraphBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<Ty: EdgeType> PetgraphBackedGraph<Ty> {
    fn node(&self, v: &VertexId) -> Option<NodeIdx> {
        self.vertices.get_by_left(v).copied()
    }

    /// The edge in its stored orientation.
    fn edge_at(&self, idx: EdgeIdx) -> Option<Edge> {
        let id = *self.edges.get_by_right(&idx)?;
        let (a, b) = self.graph.edge_endpoints(idx)?;
        Some(Edge {
            id,
            source: *self.vertices.get_by_right(&a)?,
            sink: *self.vertices.get_by_right(&b)?,
        })
    }

    fn sorted<I>(edges: I) -> Box<dyn Iterator<Item = Edge> + 'static>
    where
        I: Iterator<Item = Edge>,
    {
        let res: BTreeMap<EdgeId, Edge> = edges.map(|e| (e.id, e)).collect();
        Box::new(res.into_values())
    }
}

impl<Ty: EdgeType> GrowableGraph for PetgraphBackedGraph<Ty> {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            graph: StableGraph::with_capacity(0, 0),
            vertices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            edges: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        let nidx = self.graph.add_node(());
        self.vertices.insert(vid, nidx);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId> {
        let a = self.node(&source).ok_or(GraphError::VertexNotFound(source))?;
        let b = self.node(&sink).ok_or(GraphError::VertexNotFound(sink))?;
        let eid = self.eid_factory.one_more();
        let eidx = self.graph.add_edge(a, b, ());
        self.edges.insert(eid, eidx);
        Ok(eid)
    }
}

impl<Ty: EdgeType> EdgeShrinkableGraph for PetgraphBackedGraph<Ty> {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let eidx = *self.edges.get_by_left(edge)?;
        let res = self.edge_at(eidx);
        self.graph.remove_edge(eidx);
        self.edges.remove_by_left(edge);
        res
    }
}

impl<Ty: EdgeType> VertexShrinkableGraph for PetgraphBackedGraph<Ty> {
    fn remove_vertex(&mut self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        let nidx = match self.node(v) {
            Some(x) => x,
            None => return Box::new(std::iter::empty()),
        };
        let incident: Vec<Edge> = self
            .graph
            .edges_directed(nidx, Direction::Outgoing)
            .chain(self.graph.edges_directed(nidx, Direction::Incoming))
            .filter_map(|er| self.edge_at(er.id()))
            .collect();
        for e in incident.iter() {
            self.edges.remove_by_left(&e.id);
        }
        self.graph.remove_node(nidx);
        self.vertices.remove_by_left(v);
        Self::sorted(incident.into_iter())
    }
}

impl<Ty: EdgeType> QueryableGraph for PetgraphBackedGraph<Ty> {
    fn vertex_size(&self) -> usize {
        self.graph.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let mut res: Vec<_> = self.vertices.left_values().copied().collect();
        res.sort_unstable();
        Box::new(res.into_iter())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains_left(v)
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Self::sorted(self.graph.edge_indices().filter_map(|x| self.edge_at(x)))
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_left(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get_by_left(e).and_then(|x| self.edge_at(*x))
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let sink = *sink;
        Box::new(self.out_edges(source).filter(move |e| e.sink == sink))
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if !Ty::is_directed() {
            return Box::new(self.out_edges(v).map(|e| e.reversed()));
        }
        match self.node(v) {
            Some(nidx) => Self::sorted(
                self.graph
                    .edges_directed(nidx, Direction::Incoming)
                    .filter_map(|er| self.edge_at(er.id())),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let vid = *v;
        match self.node(v) {
            Some(nidx) => Self::sorted(
                self.graph
                    .edges(nidx)
                    .filter_map(|er| self.edge_at(er.id()))
                    .map(move |e| if e.source == vid { e } else { e.reversed() }),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}
