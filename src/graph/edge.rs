use super::VertexId;

/// ID for edges, which are essentially `usize`.
///
/// Live edges always have positive ID's. [EdgeId::NONE] stands for "no edge".
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

/// Information about an edge.
///
/// For undirected graphs, `source` and `sink` are just the two endpoints.
/// Queries around a specified vertex report it as `source` for out-edges and as `sink` for in-edges.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub const NONE: EdgeId = EdgeId(0);
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl Edge {
    /// The same edge seen from the other endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            id: self.id,
            source: self.sink,
            sink: self.source,
        }
    }
}
