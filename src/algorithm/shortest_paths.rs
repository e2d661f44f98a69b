//! Shortest paths by priority-first search, in the flavors of Dijkstra and A*.
use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::{cmp::Ordering, cmp::Reverse, collections::HashMap};

/// Costs driving a [ShortestPaths] search.
pub trait SearchCost {
    /// Weight of the edge from `u` to `v`, or `f64::INFINITY` if there is no such edge.
    ///
    /// Weights are expected to be non-negative.
    fn weight(&self, u: VertexId, v: VertexId) -> f64;

    /// Estimated distance from `v` to the destination.
    ///
    /// It must never overestimate, otherwise returned paths may be suboptimal.
    /// The default, 0, turns the search into Dijkstra's.
    fn estimated_distance(&self, _v: VertexId) -> f64 {
        0.0
    }
}

impl<F> SearchCost for F
where
    F: Fn(VertexId, VertexId) -> f64,
{
    fn weight(&self, u: VertexId, v: VertexId) -> f64 {
        self(u, v)
    }
}

/// A weight function paired with a heuristic.
#[derive(Debug, Clone, Copy)]
pub struct AStar<W, H> {
    pub weight: W,
    pub heuristic: H,
}

impl<W, H> SearchCost for AStar<W, H>
where
    W: Fn(VertexId, VertexId) -> f64,
    H: Fn(VertexId) -> f64,
{
    fn weight(&self, u: VertexId, v: VertexId) -> f64 {
        (self.weight)(u, v)
    }

    fn estimated_distance(&self, v: VertexId) -> f64 {
        (self.heuristic)(v)
    }
}

/// Weights stored per edge.
///
/// Edges without a stored weight weigh [EdgeWeights::default_weight].
/// Between parallel edges, the lightest one counts.
pub struct EdgeWeights<'g, G> {
    graph: &'g G,
    default_weight: f64,
    weights: HashMap<EdgeId, f64, RandomState>,
}

impl<'g, G> Clone for EdgeWeights<'g, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            default_weight: self.default_weight,
            weights: self.weights.clone(),
        }
    }
}

impl<'g, G> EdgeWeights<'g, G>
where
    G: QueryableGraph,
{
    /// Weights with all edges weighing 1.
    pub fn new(graph: &'g G) -> Self {
        Self::with_default(graph, 1.0)
    }

    pub fn with_default(graph: &'g G, default_weight: f64) -> Self {
        Self {
            graph,
            default_weight,
            weights: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Sets weights of all edges from `u` to `v`.
    pub fn set_weight(&mut self, u: &VertexId, v: &VertexId, weight: f64) -> Result<()> {
        let mut found = false;
        for e in self.graph.edges_connecting(u, v) {
            self.weights.insert(e.id, weight);
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound { from: *u, to: *v })
        }
    }

    pub fn set_weight_by_id(&mut self, e: &EdgeId, weight: f64) -> Result<()> {
        if !self.graph.contains_edge(e) {
            return Err(GraphError::EdgeIdNotFound(*e));
        }
        self.weights.insert(*e, weight);
        Ok(())
    }

    pub fn weight_by_id(&self, e: &EdgeId) -> Option<f64> {
        if self.graph.contains_edge(e) {
            Some(self.weights.get(e).copied().unwrap_or(self.default_weight))
        } else {
            None
        }
    }
}

impl<'g, G> SearchCost for EdgeWeights<'g, G>
where
    G: QueryableGraph,
{
    fn weight(&self, u: VertexId, v: VertexId) -> f64 {
        self.graph
            .edges_connecting(&u, &v)
            .filter_map(|e| self.weight_by_id(&e.id))
            .fold(f64::INFINITY, f64::min)
    }
}

#[derive(Debug, Clone, Copy)]
struct DistanceVertex {
    g_score: f64,
    h_score: f64,
    predecessor: Option<VertexId>,
    finalized: bool,
}

/// Priority in the frontier.
///
/// Smaller `g + h` goes first, then smaller vertex ID.
#[derive(Debug, Clone, Copy)]
struct Priority {
    f_score: f64,
    vertex: VertexId,
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Shortest paths from a source vertex.
///
/// Searches expand vertices in ascending `g + h`,
/// where `g` is the best known distance from the source
/// and `h` is [SearchCost::estimated_distance].
/// Once expanded, a vertex is finalized and its distance never changes.
///
/// ```rust
/// use pathgraph::{algorithm::*, graph::*};
///
/// let mut g = directed::TreeBackedGraph::new();
/// let v1 = g.add_vertex();
/// let v2 = g.add_vertex();
/// let v3 = g.add_vertex();
/// g.add_edge(v1, v2).unwrap();
/// g.add_edge(v1, v3).unwrap();
/// g.add_edge(v3, v2).unwrap();
///
/// let weights = |u: VertexId, v: VertexId| match (u.to_raw(), v.to_raw()) {
///     (1, 2) => 10.0,
///     (1, 3) => 3.0,
///     (3, 2) => 4.0,
///     _ => f64::INFINITY,
/// };
/// let mut paths = ShortestPaths::new(&g, weights, v1).unwrap();
/// assert_eq!(paths.path_to(v2), vec![v1, v3, v2]);
/// assert_eq!(paths.distance(&v2), 7.0);
/// ```
pub struct ShortestPaths<'a, G, C> {
    graph: &'a G,
    cost: C,
    source: VertexId,
    destination: Option<VertexId>,
    vertices: HashMap<VertexId, DistanceVertex, RandomState>,
}

impl<'a, G, C> std::fmt::Debug for ShortestPaths<'a, G, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortestPaths")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("vertices", &self.vertices.len())
            .finish()
    }
}

impl<'a, G, C> ShortestPaths<'a, G, C>
where
    G: QueryableGraph,
    C: SearchCost,
{
    /// Shortest paths from `source`, without a fixed destination.
    pub fn new(graph: &'a G, cost: C, source: VertexId) -> Result<Self> {
        if !graph.contains_vertex(&source) {
            return Err(GraphError::VertexNotFound(source));
        }
        Ok(Self {
            graph,
            cost,
            source,
            destination: None,
            vertices: HashMap::with_capacity_and_hasher(graph.vertex_size(), RandomState::new()),
        })
    }

    /// A shortest path from `source` to `destination`.
    ///
    /// [VertexId::NONE] as `destination` means there is no fixed destination.
    pub fn with_destination(
        graph: &'a G,
        cost: C,
        source: VertexId,
        destination: VertexId,
    ) -> Result<Self> {
        let mut res = Self::new(graph, cost, source)?;
        if !destination.is_none() {
            res.destination = Some(destination);
        }
        Ok(res)
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.destination
    }

    pub fn cost(&self) -> &C {
        &self.cost
    }

    /// Resets distances of all vertices to infinity, except the source's to 0.
    ///
    /// [ShortestPaths::path_to] calls this on its own.
    pub fn set_paths(&mut self) {
        self.vertices.clear();
        for v in self.graph.iter_vertices() {
            self.vertices.insert(
                v,
                DistanceVertex {
                    g_score: f64::INFINITY,
                    h_score: self.cost.estimated_distance(v),
                    predecessor: None,
                    finalized: false,
                },
            );
        }
        if let Some(src) = self.vertices.get_mut(&self.source) {
            src.g_score = 0.0;
        }
    }

    /// Best known distance from the source to `v`.
    ///
    /// After a successful [ShortestPaths::path_to], the distance to its target is the shortest one.
    /// It is infinite for unreached or absent vertices.
    pub fn distance(&self, v: &VertexId) -> f64 {
        self.vertices
            .get(v)
            .map(|x| x.g_score)
            .unwrap_or(f64::INFINITY)
    }

    /// The vertex before `v` on the best known path to `v`.
    pub fn predecessor(&self, v: &VertexId) -> Option<VertexId> {
        self.vertices.get(v).and_then(|x| x.predecessor)
    }

    /// A shortest path from the source to `target`, both ends included.
    ///
    /// It is empty if `target` is unreachable, absent or [VertexId::NONE].
    /// With a fixed destination and a heuristic, `target` should be the destination.
    pub fn path_to(&mut self, target: VertexId) -> Vec<VertexId> {
        self.set_paths();
        if !self.vertices.contains_key(&target) {
            log::debug!("search from {}: {} is not in the graph", self.source, target);
            return vec![];
        }
        log::debug!("search from {} to {}", self.source, target);
        let graph = self.graph;
        let mut frontier: KeyedPriorityQueue<VertexId, Reverse<Priority>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
        frontier.push(
            self.source,
            Reverse(Priority {
                f_score: self.cost.estimated_distance(self.source),
                vertex: self.source,
            }),
        );
        let mut expansions = 0usize;
        while let Some((u, _)) = frontier.pop() {
            if u == target {
                if let Some(x) = self.vertices.get_mut(&u) {
                    x.finalized = true;
                }
                let path = self.trace_back(target);
                log::debug!(
                    "search from {} to {}: found after {} expansions, distance {}",
                    self.source,
                    target,
                    expansions,
                    self.distance(&target)
                );
                return path;
            }
            expansions += 1;
            let g_u = match self.vertices.get_mut(&u) {
                Some(x) => {
                    x.finalized = true;
                    x.g_score
                }
                None => continue,
            };
            for w in graph.successors(&u) {
                let dw = match self.vertices.get_mut(&w) {
                    Some(x) if !x.finalized => x,
                    _ => continue,
                };
                let candidate = g_u + self.cost.weight(u, w);
                if candidate < dw.g_score {
                    log::trace!("relax {} via {}: {} -> {}", w, u, dw.g_score, candidate);
                    dw.g_score = candidate;
                    dw.predecessor = Some(u);
                    frontier.push(
                        w,
                        Reverse(Priority {
                            f_score: candidate + dw.h_score,
                            vertex: w,
                        }),
                    );
                }
            }
        }
        log::debug!(
            "search from {} to {}: unreachable after {} expansions",
            self.source,
            target,
            expansions
        );
        vec![]
    }

    /// A shortest path to the fixed destination, or an empty one if there is none.
    pub fn path_to_destination(&mut self) -> Vec<VertexId> {
        match self.destination {
            Some(dest) => self.path_to(dest),
            None => vec![],
        }
    }

    fn trace_back(&self, target: VertexId) -> Vec<VertexId> {
        let mut path = vec![target];
        let mut cur = target;
        while let Some(prev) = self.predecessor(&cur) {
            debug_assert!(path.len() <= self.vertices.len());
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}
