use super::*;
use std::collections::BTreeSet;
use tracing::debug;

/// A single cell of a representation body.
pub type Cell = i32;

/// The 2D container a graph is stored in.
/// Its shape and cell semantics depend on the [RepresentationKind].
pub type Body = Vec<Vec<Cell>>;

/// A graph held in exactly one of the four representations.
///
/// Converting mutates the body in place and discards the previous form.
/// Nothing is cached, so converting back and forth redoes the work every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    kind: RepresentationKind,
    body: Body,
    // An edge list cannot recover isolated vertices from its rows.
    vertex_count: usize,
}

impl Graph {
    /// Takes over an already validated body of the given kind.
    ///
    /// `vertex_count` only matters for edge lists.
    /// If it is absent there, the largest label in the list is taken.
    /// `oriented` only matters for adjacency lists and edge lists,
    /// which are mirrored when the graph is undirected.
    pub fn new(
        body: Body,
        kind: RepresentationKind,
        vertex_count: Option<usize>,
        oriented: bool,
    ) -> Self {
        match kind {
            RepresentationKind::AdjacencyMatrix => Self::from_adjacency_matrix(body),
            RepresentationKind::IncidenceMatrix => Self::from_incidence_matrix(body),
            RepresentationKind::AdjacencyList => Self::from_adjacency_list(body, oriented),
            RepresentationKind::EdgeList => {
                let vertex_count = vertex_count.unwrap_or_else(|| {
                    body.iter()
                        .flat_map(|row| row.iter())
                        .map(|cell| *cell as usize)
                        .max()
                        .unwrap_or(0)
                });
                Self::from_edge_list(body, vertex_count, oriented)
            }
        }
    }

    /// A `V x V` matrix of 0/1 cells, loop-free and symmetric if undirected.
    pub fn from_adjacency_matrix(body: Body) -> Self {
        let vertex_count = body.len();
        Self {
            kind: RepresentationKind::AdjacencyMatrix,
            body,
            vertex_count,
        }
    }

    /// A `V x E` matrix of -1/0/1 cells.
    /// Malformed and duplicate columns are dropped first.
    pub fn from_incidence_matrix(mut body: Body) -> Self {
        clean_incidence_matrix(&mut body);
        let vertex_count = body.len();
        Self {
            kind: RepresentationKind::IncidenceMatrix,
            body,
            vertex_count,
        }
    }

    /// `V` rows of 1-based neighbor labels in any order.
    pub fn from_adjacency_list(mut body: Body, oriented: bool) -> Self {
        normalize_adjacency_list(&mut body, oriented);
        let vertex_count = body.len();
        Self {
            kind: RepresentationKind::AdjacencyList,
            body,
            vertex_count,
        }
    }

    /// Rows of 1-based `(source, sink)` pairs over `vertex_count` vertices.
    pub fn from_edge_list(mut body: Body, vertex_count: usize, oriented: bool) -> Self {
        clean_edge_list(&mut body, oriented);
        Self {
            kind: RepresentationKind::EdgeList,
            body,
            vertex_count,
        }
    }

    pub fn kind(&self) -> RepresentationKind {
        self.kind
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Converts the body into `target`, or does nothing if it is already there.
    ///
    /// Pairs involving the adjacency matrix convert directly.
    /// All other pairs go through the adjacency matrix.
    pub fn convert(&mut self, target: RepresentationKind) {
        if self.kind == target {
            return;
        }
        debug!(from = %self.kind, to = %target, vertices = self.vertex_count, "converting graph");
        let body = std::mem::take(&mut self.body);
        let matrix = match self.kind {
            RepresentationKind::AdjacencyMatrix => body,
            RepresentationKind::IncidenceMatrix => incidence_to_adjacency_matrix(&body),
            RepresentationKind::AdjacencyList => adjacency_list_to_matrix(&body),
            RepresentationKind::EdgeList => {
                edge_list_to_adjacency_matrix(&body, self.vertex_count)
            }
        };
        self.body = match target {
            RepresentationKind::AdjacencyMatrix => matrix,
            RepresentationKind::IncidenceMatrix => adjacency_matrix_to_incidence(&matrix),
            RepresentationKind::AdjacencyList => adjacency_matrix_to_list(&matrix),
            RepresentationKind::EdgeList => {
                let (list, vertex_count) = adjacency_matrix_to_edge_list(&matrix);
                self.vertex_count = vertex_count;
                list
            }
        };
        self.kind = target;
    }

    /// Runs `f` over the body converted into `kind`,
    /// then converts back into the representation held before the call.
    pub(crate) fn viewed_as<R, F>(&mut self, kind: RepresentationKind, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        let restore = self.kind;
        self.convert(kind);
        let res = f(self);
        self.convert(restore);
        res
    }

    /// All arcs of the graph, independent of the current representation.
    /// Undirected edges show up in both directions.
    pub fn edge_set(&self) -> BTreeSet<Edge> {
        match self.kind {
            RepresentationKind::AdjacencyMatrix => edges_of_matrix(&self.body),
            RepresentationKind::IncidenceMatrix => {
                edges_of_matrix(&incidence_to_adjacency_matrix(&self.body))
            }
            RepresentationKind::AdjacencyList => self
                .body
                .iter()
                .enumerate()
                .flat_map(|(i, neighbors)| {
                    neighbors
                        .iter()
                        .map(move |v| Edge::new(VertexId::from_index(i), VertexId::from_cell(*v)))
                })
                .collect(),
            RepresentationKind::EdgeList => self
                .body
                .iter()
                .map(|row| Edge::new(VertexId::from_cell(row[0]), VertexId::from_cell(row[1])))
                .collect(),
        }
    }
}

fn edges_of_matrix(matrix: &[Vec<Cell>]) -> BTreeSet<Edge> {
    let mut res = BTreeSet::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if *cell == 1 {
                res.insert(Edge::new(VertexId::from_index(i), VertexId::from_index(j)));
            }
        }
    }
    res
}
