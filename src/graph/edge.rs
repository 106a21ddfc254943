use super::VertexId;

/// A connection between two vertices.
///
/// Arcs are stored once.
/// Undirected edges appear in both directions, i.e. `(u, v)` and `(v, u)`,
/// matching how an adjacency matrix of an undirected graph is symmetric.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }

    /// The same edge walked the other way round.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.sink,
            sink: self.source,
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, sink): (usize, usize)) -> Self {
        Self::new(VertexId::new(source), VertexId::new(sink))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.sink)
    }
}
