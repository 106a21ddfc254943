/// The four interchangeable forms a graph can be stored in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum RepresentationKind {
    /// `V x V`, cell `(i, j)` is 1 iff there is an arc/edge from `i` to `j`.
    AdjacencyMatrix,
    /// `V x E`, one column per edge (`+1`, `+1`) or arc (`+1` source, `-1` sink).
    IncidenceMatrix,
    /// `V` rows, row `i` holds the ascending 1-based labels of its neighbors.
    AdjacencyList,
    /// `E` rows of `(source, sink)`, 1-based.
    EdgeList,
}

impl RepresentationKind {
    pub const ALL: [RepresentationKind; 4] = [
        RepresentationKind::AdjacencyMatrix,
        RepresentationKind::IncidenceMatrix,
        RepresentationKind::AdjacencyList,
        RepresentationKind::EdgeList,
    ];

    /// Whether the body carries a header row of column numbers when printed.
    pub fn is_matrix(&self) -> bool {
        matches!(
            self,
            RepresentationKind::AdjacencyMatrix | RepresentationKind::IncidenceMatrix
        )
    }
}

impl std::fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RepresentationKind::AdjacencyMatrix => "adjacency matrix",
            RepresentationKind::IncidenceMatrix => "incidence matrix",
            RepresentationKind::AdjacencyList => "adjacency list",
            RepresentationKind::EdgeList => "edge list",
        };
        f.write_str(name)
    }
}
