//! Depth-first and breadth-first traversals customized by [Visitor]'s.
use crate::{graph::*, GraphError, Result};
use std::collections::VecDeque;

/// Extension points of a traversal.
///
/// All methods have defaults, so a visitor overrides only what it needs.
pub trait Visitor {
    /// Called when `v` is reached for the first time.
    ///
    /// Returns `false` to leave successors of `v` unexpanded.
    /// The traversal goes on with other pending vertices.
    fn visit(&mut self, _v: VertexId) -> bool {
        true
    }

    /// Called for each successor `to` of an expanded vertex `from`,
    /// in the order of [QueryableGraph::successors],
    /// including successors which have been reached already.
    ///
    /// Returns `false` to skip `to` in this expansion.
    /// `to` may still be reached later through other vertices.
    fn process_successor(&mut self, _from: VertexId, _to: VertexId) -> bool {
        true
    }

    /// Whether [Visitor::post_visit] is wanted for `v`.
    /// Only depth-first traversals post-visit.
    fn should_post_visit(&self, _v: VertexId) -> bool {
        false
    }

    /// Called after all successors of `v` have been processed.
    fn post_visit(&mut self, _v: VertexId) {}
}

/// Records vertices in the order of visiting.
#[derive(Debug, Clone, Default)]
pub struct PreorderRecorder {
    pub order: Vec<VertexId>,
}

impl Visitor for PreorderRecorder {
    fn visit(&mut self, v: VertexId) -> bool {
        self.order.push(v);
        true
    }
}

/// Records vertices in the order of post-visiting.
///
/// In a graph without cycles, a vertex is post-visited after all vertices reachable from it.
#[derive(Debug, Clone, Default)]
pub struct PostorderRecorder {
    pub order: Vec<VertexId>,
}

impl Visitor for PostorderRecorder {
    fn should_post_visit(&self, _v: VertexId) -> bool {
        true
    }

    fn post_visit(&mut self, v: VertexId) {
        self.order.push(v);
    }
}

/// How pending vertices are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// A stack: a vertex's successors are exhausted before its siblings.
    DepthFirst,
    /// A queue: vertices are visited in ascending distance, counted in edges, from the start.
    BreadthFirst,
}

/// A traversal over a graph.
///
/// It keeps no state between calls to [Traversal::traverse].
/// Each call marks vertices afresh, so a traversal is reusable.
/// Since it borrows the graph, the graph cannot be mutated while it is alive.
///
/// ```rust
/// use pathgraph::{algorithm::*, graph::*};
///
/// let mut g = directed::TreeBackedGraph::new();
/// let v1 = g.add_vertex();
/// let v2 = g.add_vertex();
/// let v3 = g.add_vertex();
/// g.add_edge(v1, v2).unwrap();
/// g.add_edge(v2, v3).unwrap();
///
/// let mut postorder = PostorderRecorder::default();
/// g.depth_first().traverse(v1, &mut postorder).unwrap();
/// assert_eq!(postorder.order, vec![v3, v2, v1]);
/// ```
pub struct Traversal<'a, G> {
    graph: &'a G,
    order: Order,
}

impl<'a, G> Clone for Traversal<'a, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G> Copy for Traversal<'a, G> {}

impl<'a, G> std::fmt::Debug for Traversal<'a, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .finish()
    }
}

/// Shortcuts to start traversals on any graph.
pub trait Traversable
where
    Self: QueryableGraph + Sized,
{
    fn depth_first(&self) -> Traversal<'_, Self> {
        Traversal::depth_first(self)
    }

    fn breadth_first(&self) -> Traversal<'_, Self> {
        Traversal::breadth_first(self)
    }
}

impl<G: QueryableGraph> Traversable for G {}

struct Frame<'a> {
    vertex: VertexId,
    successors: Box<dyn Iterator<Item = VertexId> + 'a>,
}

struct Marks(Vec<bool>);

impl Marks {
    fn new<G: QueryableGraph>(graph: &G) -> Self {
        Self(vec![false; graph.max_vertex().to_raw() + 1])
    }

    fn is_marked(&self, v: &VertexId) -> bool {
        self.0.get(v.to_raw()).copied().unwrap_or(false)
    }

    /// Returns whether `v` was unmarked.
    fn mark(&mut self, v: &VertexId) -> bool {
        match self.0.get_mut(v.to_raw()) {
            Some(m) if !*m => {
                *m = true;
                true
            }
            _ => false,
        }
    }
}

impl<'a, G> Traversal<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G, order: Order) -> Self {
        Self { graph, order }
    }

    pub fn depth_first(graph: &'a G) -> Self {
        Self::new(graph, Order::DepthFirst)
    }

    pub fn breadth_first(graph: &'a G) -> Self {
        Self::new(graph, Order::BreadthFirst)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Visits all vertices reachable from `start`.
    ///
    /// Fails only if `start` is not in the graph.
    pub fn traverse<V>(&self, start: VertexId, visitor: &mut V) -> Result<()>
    where
        V: Visitor + ?Sized,
    {
        if !self.graph.contains_vertex(&start) {
            return Err(GraphError::VertexNotFound(start));
        }
        log::debug!("{:?} traversal from {}", self.order, start);
        let visited = match self.order {
            Order::DepthFirst => self.depth_first_from(start, visitor),
            Order::BreadthFirst => self.breadth_first_from(start, visitor),
        };
        log::debug!("{:?} traversal from {} visited {} vertices", self.order, start, visited);
        Ok(())
    }

    fn depth_first_from<V>(&self, start: VertexId, visitor: &mut V) -> usize
    where
        V: Visitor + ?Sized,
    {
        let mut marks = Marks::new(self.graph);
        let mut stack: Vec<Frame<'a>> = vec![];
        let mut visited = 0;
        marks.mark(&start);
        visited += 1;
        self.enter(start, visitor, &mut stack);
        while let Some(frame) = stack.last_mut() {
            let from = frame.vertex;
            match frame.successors.next() {
                Some(to) => {
                    if !visitor.process_successor(from, to) || marks.is_marked(&to) {
                        continue;
                    }
                    marks.mark(&to);
                    visited += 1;
                    self.enter(to, visitor, &mut stack);
                }
                None => {
                    stack.pop();
                    self.leave(from, visitor);
                }
            }
        }
        visited
    }

    /// Visits `v` and pushes a frame for it, or leaves it at once if it is not to be expanded.
    fn enter<V>(&self, v: VertexId, visitor: &mut V, stack: &mut Vec<Frame<'a>>)
    where
        V: Visitor + ?Sized,
    {
        log::trace!("visit {}", v);
        if visitor.visit(v) {
            stack.push(Frame {
                vertex: v,
                successors: self.graph.successors(&v),
            });
        } else {
            self.leave(v, visitor);
        }
    }

    fn leave<V>(&self, v: VertexId, visitor: &mut V)
    where
        V: Visitor + ?Sized,
    {
        if visitor.should_post_visit(v) {
            log::trace!("post-visit {}", v);
            visitor.post_visit(v);
        }
    }

    fn breadth_first_from<V>(&self, start: VertexId, visitor: &mut V) -> usize
    where
        V: Visitor + ?Sized,
    {
        let mut marks = Marks::new(self.graph);
        let mut queue = VecDeque::from([start]);
        let mut visited = 0;
        while let Some(v) = queue.pop_front() {
            if !marks.mark(&v) {
                continue;
            }
            visited += 1;
            log::trace!("visit {}", v);
            if !visitor.visit(v) {
                continue;
            }
            for u in self.graph.successors(&v) {
                if visitor.process_successor(v, u) && !marks.is_marked(&u) {
                    queue.push_back(u);
                }
            }
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn diamond() -> (TreeBackedGraph, [VertexId; 5]) {
        let mut g = TreeBackedGraph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let v3 = g.add_vertex();
        let v4 = g.add_vertex();
        let v5 = g.add_vertex();
        g.add_edge(v1, v2).unwrap();
        g.add_edge(v1, v3).unwrap();
        g.add_edge(v3, v2).unwrap();
        g.add_edge(v2, v4).unwrap();
        (g, [v1, v2, v3, v4, v5])
    }

    fn preorder<G: QueryableGraph>(t: Traversal<'_, G>, start: VertexId) -> Vec<VertexId> {
        let mut recorder = PreorderRecorder::default();
        t.traverse(start, &mut recorder).unwrap();
        recorder.order
    }

    #[test]
    fn depth_first_order() {
        init_logger();
        let (mut g, [v1, v2, v3, v4, v5]) = diamond();
        assert_eq!(preorder(g.depth_first(), v1), vec![v1, v2, v4, v3]);
        g.add_edge(v3, v5).unwrap();
        assert_eq!(preorder(g.depth_first(), v1), vec![v1, v2, v4, v3, v5]);
    }

    #[test]
    fn breadth_first_order() {
        init_logger();
        let (mut g, [v1, v2, v3, v4, v5]) = diamond();
        assert_eq!(preorder(g.breadth_first(), v1), vec![v1, v2, v3, v4]);
        g.add_edge(v3, v5).unwrap();
        assert_eq!(preorder(g.breadth_first(), v1), vec![v1, v2, v3, v4, v5]);
    }

    #[test]
    fn postorder_after_successors() {
        let (mut g, [v1, v2, v3, v4, v5]) = diamond();
        g.add_edge(v3, v5).unwrap();
        let mut recorder = PostorderRecorder::default();
        g.depth_first().traverse(v1, &mut recorder).unwrap();
        assert_eq!(recorder.order, vec![v4, v2, v5, v3, v1]);
    }

    #[test]
    fn breadth_first_never_post_visits() {
        let (g, [v1, ..]) = diamond();
        let mut recorder = PostorderRecorder::default();
        g.breadth_first().traverse(v1, &mut recorder).unwrap();
        assert!(recorder.order.is_empty());
    }

    #[test]
    fn traversal_is_reusable() {
        let (g, [v1, v2, _, v4, _]) = diamond();
        let dfs = g.depth_first();
        assert_eq!(preorder(dfs, v1), preorder(dfs, v1));
        assert_eq!(preorder(dfs, v2), vec![v2, v4]);
    }

    #[test]
    fn unexpanded_vertices() {
        struct StopAt(VertexId, Vec<VertexId>, Vec<VertexId>);
        impl Visitor for StopAt {
            fn visit(&mut self, v: VertexId) -> bool {
                self.1.push(v);
                v != self.0
            }
            fn should_post_visit(&self, _v: VertexId) -> bool {
                true
            }
            fn post_visit(&mut self, v: VertexId) {
                self.2.push(v);
            }
        }
        let (g, [v1, v2, v3, _, _]) = diamond();
        let mut visitor = StopAt(v2, vec![], vec![]);
        g.depth_first().traverse(v1, &mut visitor).unwrap();
        assert_eq!(visitor.1, vec![v1, v2, v3]);
        assert_eq!(visitor.2, vec![v2, v3, v1]);

        let mut visitor = StopAt(v2, vec![], vec![]);
        g.breadth_first().traverse(v1, &mut visitor).unwrap();
        assert_eq!(visitor.1, vec![v1, v2, v3]);
    }

    #[test]
    fn pruned_successors() {
        struct Prune(VertexId, VertexId, Vec<VertexId>);
        impl Visitor for Prune {
            fn visit(&mut self, v: VertexId) -> bool {
                self.2.push(v);
                true
            }
            fn process_successor(&mut self, from: VertexId, to: VertexId) -> bool {
                (from, to) != (self.0, self.1)
            }
        }
        let (g, [v1, v2, v3, v4, _]) = diamond();
        let mut visitor = Prune(v1, v2, vec![]);
        g.depth_first().traverse(v1, &mut visitor).unwrap();
        assert_eq!(visitor.2, vec![v1, v3, v2, v4]);

        let mut visitor = Prune(v1, v2, vec![]);
        g.breadth_first().traverse(v1, &mut visitor).unwrap();
        assert_eq!(visitor.2, vec![v1, v3, v2, v4]);
    }

    #[test]
    fn every_edge_is_processed() {
        #[derive(Default)]
        struct EdgeRecorder(Vec<(VertexId, VertexId)>);
        impl Visitor for EdgeRecorder {
            fn process_successor(&mut self, from: VertexId, to: VertexId) -> bool {
                self.0.push((from, to));
                true
            }
        }
        let (g, [v1, v2, v3, v4, _]) = diamond();
        let mut dfs = EdgeRecorder::default();
        g.depth_first().traverse(v1, &mut dfs).unwrap();
        assert_eq!(dfs.0, vec![(v1, v2), (v2, v4), (v1, v3), (v3, v2)]);

        let mut bfs = EdgeRecorder::default();
        g.breadth_first().traverse(v1, &mut bfs).unwrap();
        assert_eq!(bfs.0, vec![(v1, v2), (v1, v3), (v2, v4), (v3, v2)]);
    }

    #[test]
    fn undirected_both_ways() {
        let mut g = crate::graph::undirected::TreeBackedGraph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let v3 = g.add_vertex();
        g.add_edge(v2, v1).unwrap();
        g.add_edge(v3, v2).unwrap();
        assert_eq!(preorder(g.depth_first(), v3), vec![v3, v2, v1]);
        assert_eq!(preorder(g.breadth_first(), v1), vec![v1, v2, v3]);
    }

    #[test]
    fn absent_start() {
        let (g, _) = diamond();
        let ghost = VertexId::new(100);
        let mut recorder = PreorderRecorder::default();
        assert_eq!(
            g.depth_first().traverse(ghost, &mut recorder),
            Err(GraphError::VertexNotFound(ghost))
        );
        assert_eq!(
            g.breadth_first().traverse(VertexId::NONE, &mut recorder),
            Err(GraphError::VertexNotFound(VertexId::NONE))
        );
        assert!(recorder.order.is_empty());
    }

    #[quickcheck]
    fn visits_reachable_vertices_once(ops: Ops) {
        let g: TreeBackedGraph = ops.apply_to_new();
        for start in g.iter_vertices() {
            let mut reachable = BTreeSet::new();
            let mut pending = vec![start];
            while let Some(v) = pending.pop() {
                if reachable.insert(v) {
                    pending.extend(g.successors(&v));
                }
            }
            for t in [g.depth_first(), g.breadth_first()] {
                let order = preorder(t, start);
                let visited: BTreeSet<_> = order.iter().copied().collect();
                assert_eq!(visited.len(), order.len());
                assert_eq!(visited, reachable);
                assert_eq!(order[0], start);
            }
        }
    }
}
