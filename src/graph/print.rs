use crate::graph::*;

/// Tab-separated text of a graph in its current representation.
///
/// Matrices start with a header row of 1-based column numbers.
/// Every body row starts with its 1-based row number.
pub struct RepresentationPrint<'a> {
    graph: &'a Graph,
}

impl Graph {
    /// Converts into `kind` and formats the result.
    ///
    /// The graph stays in `kind` afterwards.
    pub fn print(&mut self, kind: RepresentationKind) -> RepresentationPrint<'_> {
        self.convert(kind);
        RepresentationPrint { graph: self }
    }
}

impl std::fmt::Display for RepresentationPrint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.graph.body();
        if self.graph.kind().is_matrix() {
            let columns = body.first().map_or(0, |row| row.len());
            for c in 1..=columns {
                write!(f, "\t{}", c)?;
            }
            writeln!(f)?;
        }
        for (i, row) in body.iter().enumerate() {
            write!(f, "{}", i + 1)?;
            for cell in row {
                write!(f, "\t{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Graph {
        Graph::from_adjacency_matrix(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]])
    }

    #[test]
    fn adjacency_matrix_has_header() {
        let mut g = path();
        let trial = g.print(RepresentationKind::AdjacencyMatrix).to_string();
        assert_eq!(trial, "\t1\t2\t3\n1\t0\t1\t0\n2\t0\t0\t1\n3\t0\t0\t0\n");
    }

    #[test]
    fn incidence_matrix_numbers_edges() {
        let mut g = path();
        let trial = g.print(RepresentationKind::IncidenceMatrix).to_string();
        assert_eq!(trial, "\t1\t2\n1\t1\t0\n2\t-1\t1\n3\t0\t-1\n");
    }

    #[test]
    fn lists_have_no_header() {
        let mut g = path();
        let trial = g.print(RepresentationKind::AdjacencyList).to_string();
        assert_eq!(trial, "1\t2\n2\t3\n3\n");
        let trial = g.print(RepresentationKind::EdgeList).to_string();
        assert_eq!(trial, "1\t1\t2\n2\t2\t3\n");
    }

    #[test]
    fn printing_leaves_graph_converted() {
        let mut g = path();
        let _ = g.print(RepresentationKind::EdgeList).to_string();
        assert_eq!(g.kind(), RepresentationKind::EdgeList);
    }
}
