use crate::graph::*;
use std::fmt;

/// Lists a graph vertex by vertex, each followed by its out-edges.
///
/// ```plain
/// |V| = 2, |E| = 1
/// v1:
///   --e1-> v2
/// v2:
/// ```
///
/// Obtained by [QueryableGraph::debug].
pub struct GraphDebug<'a, G> {
    graph: &'a G,
    margin: usize,
    step: usize,
}

/// Blank columns to the left of a line.
struct Pad(usize);

impl fmt::Display for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.0)
    }
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            margin: 0,
            step: 2,
        }
    }

    /// Shifts every line by `margin` columns, and edges by `step` more.
    pub fn indent(self, margin: usize, step: usize) -> Self {
        Self {
            margin,
            step,
            ..self
        }
    }
}

impl<'a, G> fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertex_pad = Pad(self.margin);
        let edge_pad = Pad(self.margin + self.step);
        writeln!(
            f,
            "{}|V| = {}, |E| = {}",
            vertex_pad,
            self.graph.vertex_size(),
            self.graph.edge_size()
        )?;
        for v in self.graph.iter_vertices() {
            writeln!(f, "{}{}:", vertex_pad, v)?;
            for e in self.graph.out_edges(&v) {
                writeln!(f, "{}--{}-> {}", edge_pad, e.id, e.sink)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn indented_listing() {
        let mut g = directed::TreeBackedGraph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        g.add_edge(v1, v2).unwrap();
        let trial = format!("{:?}", g.debug().indent(1, 3));
        assert_eq!(trial, " |V| = 2, |E| = 1\n v1:\n    --e1-> v2\n v2:\n");
    }

    #[test]
    fn undirected_edges_from_both_ends() {
        let mut g = undirected::TreeBackedGraph::new();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        g.add_edge(v2, v1).unwrap();
        let trial = format!("{:?}", g.debug());
        assert_eq!(trial, "|V| = 2, |E| = 1\nv1:\n  --e1-> v2\nv2:\n  --e1-> v1\n");
    }
}
