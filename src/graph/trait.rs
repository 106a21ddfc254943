use crate::graph::*;

/// Read access to the vertices of a graph and their out-neighbors.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;

    /// Iterates over vertices in ascending order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(vertices_up_to(self.vertex_size()))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        (1..=self.vertex_size()).contains(&v.to_raw())
    }

    /// Iterates over out-neighbors of `v` in their stored order.
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
