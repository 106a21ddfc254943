/// A vertex, identified by its 1-based label.
///
/// Every representation exposes vertices by label.
/// Use [VertexId::index] to address the matching row of a matrix or list.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(label: usize) -> Self {
        debug_assert!(label >= 1, "vertex labels are 1-based");
        Self(label)
    }

    /// Builds a vertex from a 0-based row index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Builds a vertex from a label stored in a representation body.
    pub(crate) fn from_cell(cell: i32) -> Self {
        debug_assert!(cell >= 1, "vertex labels are 1-based");
        Self(cell as usize)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn index(&self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterates `1..=vertex_count` in ascending order.
pub fn vertices_up_to(vertex_count: usize) -> impl Iterator<Item = VertexId> {
    (1..=vertex_count).map(VertexId)
}
