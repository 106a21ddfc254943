use crate::{error::GraphError, graph::*};
use tracing::debug;

/// The slot holding the one live graph.
///
/// Loading a graph overwrites whatever was there before.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Graph>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live graph and returns it for further use.
    pub fn load(&mut self, graph: Graph) -> &mut Graph {
        debug!(
            kind = %graph.kind(),
            vertices = graph.vertex_count(),
            replaced = self.current.is_some(),
            "loading graph"
        );
        self.current.insert(graph)
    }

    /// True until the first graph is loaded.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.current.as_ref()
    }

    pub fn graph_mut(&mut self) -> Result<&mut Graph, GraphError> {
        self.current.as_mut().ok_or(GraphError::NoGraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_loaded() {
        let mut session = Session::new();
        assert!(session.is_empty());
        assert!(session.graph().is_none());
        assert_eq!(session.graph_mut().err(), Some(GraphError::NoGraph));

        session.load(Graph::from_adjacency_matrix(vec![vec![0]]));
        assert!(!session.is_empty());
        assert_eq!(session.graph().map(|g| g.vertex_count()), Some(1));
    }

    #[test]
    fn loading_replaces_graph() {
        let mut session = Session::new();
        session.load(Graph::from_adjacency_matrix(vec![vec![0]]));
        let g = session.load(Graph::from_edge_list(vec![vec![1, 2]], 2, true));
        g.convert(RepresentationKind::AdjacencyMatrix);
        let g = session.graph_mut().unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.kind(), RepresentationKind::AdjacencyMatrix);
    }
}
