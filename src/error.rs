//! Error types of graph operations.
use thiserror::Error;

/// Errors raised by [Graph](crate::graph::Graph) and [Session](crate::graph::Session) operations.
///
/// Conversions and metrics are total, so only searching and session access can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid start vertex {start}, expected one in 1..={vertex_count}")]
    InvalidStartVertex { start: usize, vertex_count: usize },
    #[error("no graph has been loaded")]
    NoGraph,
}

/// Errors raised while reading a graph from text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before the graph was complete")]
    UnexpectedEnd,
    #[error("invalid number {token:?}")]
    InvalidNumber { token: String },
    #[error("invalid number of vertices {count}, expected 1..={max}")]
    VertexCountOutOfRange { count: i64, max: usize },
    #[error("invalid number of edges {count}, expected 0..={max}")]
    EdgeCountOutOfRange { count: i64, max: usize },
    #[error("invalid neighbor count {count} in row {row}")]
    InvalidNeighborCount { row: usize, count: i64 },
    #[error("invalid number {value} at ({row}, {column})")]
    InvalidValue {
        row: usize,
        column: usize,
        value: i64,
    },
}
