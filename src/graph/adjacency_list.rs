use crate::graph::*;

/// A borrowed adjacency-list body seen as a [QueryableGraph].
///
/// Neighbors come out in the order the rows store them,
/// which is ascending for any list held by a [Graph].
#[derive(Clone, Copy)]
pub struct AdjacencyListView<'a>(&'a [Vec<Cell>]);

impl<'a> AdjacencyListView<'a> {
    pub fn new(rows: &'a [Vec<Cell>]) -> Self {
        Self(rows)
    }
}

impl<'a> QueryableGraph for AdjacencyListView<'a> {
    fn vertex_size(&self) -> usize {
        self.0.len()
    }

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.0.get(v.index()) {
            Some(row) => Box::new(row.iter().map(|cell| VertexId::from_cell(*cell))),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl std::fmt::Debug for AdjacencyListView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
