use crate::graph::*;

/// Degree of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexDegree {
    /// In- and out-degree in a directed graph.
    Oriented {
        vertex: VertexId,
        in_degree: usize,
        out_degree: usize,
    },
    /// Number of incident edges in an undirected graph.
    Undirected { vertex: VertexId, degree: usize },
}

impl VertexDegree {
    pub fn vertex(&self) -> VertexId {
        match self {
            VertexDegree::Oriented { vertex, .. } => *vertex,
            VertexDegree::Undirected { vertex, .. } => *vertex,
        }
    }
}

impl std::fmt::Display for VertexDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexDegree::Oriented {
                vertex,
                in_degree,
                out_degree,
            } => write!(f, "{}: in={} out={}", vertex, in_degree, out_degree),
            VertexDegree::Undirected { vertex, degree } => {
                write!(f, "{}: degree={}", vertex, degree)
            }
        }
    }
}

/// Total number of arcs of a directed graph, or of edges of an undirected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCount {
    Arcs(usize),
    Edges(usize),
}

impl EdgeCount {
    pub fn count(&self) -> usize {
        match self {
            EdgeCount::Arcs(n) | EdgeCount::Edges(n) => *n,
        }
    }
}

impl std::fmt::Display for EdgeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeCount::Arcs(n) => write!(f, "Arcs: {}", n),
            EdgeCount::Edges(n) => write!(f, "Edges: {}", n),
        }
    }
}

impl Graph {
    /// Degrees of all vertices in ascending order, counted on the adjacency matrix.
    ///
    /// Directed: in-degree is the column sum, out-degree the row sum.
    /// Undirected: the degree is the row sum.
    /// The graph is converted back afterwards.
    pub fn vertices_degree(&mut self, oriented: bool) -> Vec<VertexDegree> {
        self.viewed_as(RepresentationKind::AdjacencyMatrix, |g| {
            let matrix = g.body();
            matrix
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let vertex = VertexId::from_index(i);
                    let out_degree = row.iter().filter(|cell| **cell == 1).count();
                    if oriented {
                        let in_degree = matrix.iter().filter(|row| row[i] == 1).count();
                        VertexDegree::Oriented {
                            vertex,
                            in_degree,
                            out_degree,
                        }
                    } else {
                        VertexDegree::Undirected {
                            vertex,
                            degree: out_degree,
                        }
                    }
                })
                .collect()
        })
    }

    /// Counts rows of the edge list.
    ///
    /// Undirected edges are stored in both directions, hence halved.
    /// The graph is converted back afterwards.
    pub fn count_arc_edges(&mut self, oriented: bool) -> EdgeCount {
        self.viewed_as(RepresentationKind::EdgeList, |g| {
            let rows = g.body().len();
            if oriented {
                EdgeCount::Arcs(rows)
            } else {
                EdgeCount::Edges(rows / 2)
            }
        })
    }
}
