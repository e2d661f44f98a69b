use crate::{graph::*, GraphError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// A directed graph with balanced computational complexity.
///
/// Adjacency is indexed by `(vertex, edge, opposite vertex)`,
/// so in-edges and out-edges of a vertex are iterated in the order of insertion.
///
/// |                    | Complexity                                                          |
/// | ------------------ | ------------------------------------------------------------------- |
/// | `add_vertex`       | O(log V)                                                            |
/// | `add_edge`         | O(log V + log E)                                                    |
/// | `remove_edge`      | O(log E)                                                            |
/// | `remove_vertex`    | O(log V + E' log E), where E' are the edges connecting to it.      |
/// | `vertex_size`      | O(1)                                                                |
/// | `max_vertex`       | O(log V)                                                            |
/// | `contains_vertex`  | O(log V)                                                            |
/// | `edge_size`        | O(1)                                                                |
/// | `contains_edge`    | O(log E)                                                            |
/// | `find_edge`        | O(log E)                                                            |
/// | `edges_connecting` | O(log E + out-degree of the source)                                 |
/// | `in_edges`         | returns in O(log E), amortized O(1) on each call to `.next`.        |
/// | `out_edges`        | returns in O(log E), amortized O(1) on each call to `.next`.        |
#[derive(Clone)]
pub struct TreeBackedGraph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, (VertexId, VertexId)>,
    in_edges: BTreeSet<(VertexId, EdgeId, VertexId)>,
    out_edges: BTreeSet<(VertexId, EdgeId, VertexId)>,
}

impl DirectedOrNot for TreeBackedGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl Default for TreeBackedGraph {
    fn default() -> Self {
        <Self as GrowableGraph>::new()
    }
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
            in_edges: BTreeSet::new(),
            out_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.vertices.insert(vid);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId> {
        for v in [source, sink] {
            if !self.vertices.contains(&v) {
                log::debug!("reject edge {} -> {}: {} is absent", source, sink, v);
                return Err(GraphError::VertexNotFound(v));
            }
        }
        let eid = self.eid_factory.one_more();
        self.edges.insert(eid, (source, sink));
        self.in_edges.insert((sink, eid, source));
        self.out_edges.insert((source, eid, sink));
        Ok(eid)
    }
}

impl EdgeShrinkableGraph for TreeBackedGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let (src, snk) = self.edges.remove(edge)?;
        self.in_edges.remove(&(snk, *edge, src));
        self.out_edges.remove(&(src, *edge, snk));
        Some(Edge {
            id: *edge,
            source: src,
            sink: snk,
        })
    }
}

impl VertexShrinkableGraph for TreeBackedGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        if !self.vertices.remove(vertex) {
            return Box::new(std::iter::empty());
        }
        let eids: BTreeSet<EdgeId> = self
            .in_edges(vertex)
            .chain(self.out_edges(vertex))
            .map(|e| e.id)
            .collect();
        let res: Vec<_> = eids.iter().filter_map(|e| self.remove_edge(e)).collect();
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for TreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn max_vertex(&self) -> VertexId {
        self.vertices.iter().next_back().copied().unwrap_or(VertexId::NONE)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().map(|(e, (src, snk))| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        }))
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get(e).map(|(src, snk)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        })
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let vid = *v;
        let start = (vid, EdgeId::MIN, VertexId::MIN);
        let it = self
            .in_edges
            .range(start..)
            .take_while(move |(x, _, _)| *x == vid)
            .map(|(snk, e, src)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        });
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let vid = *v;
        let start = (vid, EdgeId::MIN, VertexId::MIN);
        let it = self
            .out_edges
            .range(start..)
            .take_while(move |(x, _, _)| *x == vid)
            .map(|(src, e, snk)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        });
        Box::new(it)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let sink = *sink;
        let it = self.out_edges(source).filter(move |e| e.sink == sink);
        Box::new(it)
    }
}
