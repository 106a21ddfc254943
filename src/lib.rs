//! A graph kept in one of four interchangeable representations,
//! with degree counting and depth/breadth-first search on top.
//!
//! ```
//! use graphrepr::{algorithm::*, graph::*};
//!
//! // the undirected 4-cycle 1 - 2 - 3 - 4 - 1
//! let mut g = Graph::from_adjacency_matrix(vec![
//!     vec![0, 1, 0, 1],
//!     vec![1, 0, 1, 0],
//!     vec![0, 1, 0, 1],
//!     vec![1, 0, 1, 0],
//! ]);
//! for d in g.vertices_degree(false) {
//!     assert!(matches!(d, VertexDegree::Undirected { degree: 2, .. }));
//! }
//! assert_eq!(g.count_arc_edges(false).to_string(), "Edges: 4");
//!
//! let order: Vec<usize> = g
//!     .search(1, SearchMode::RecursiveDfs)
//!     .unwrap()
//!     .iter()
//!     .map(|v| v.to_raw())
//!     .collect();
//! assert_eq!(order, vec![1, 2, 3, 4]);
//! assert_eq!(g.kind(), RepresentationKind::AdjacencyMatrix);
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod io;
