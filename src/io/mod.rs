//! Reading graphs from plain text.
//!
//! Input is a stream of whitespace-separated integers, line breaks carry no meaning.
//! It opens with a size header:
//!
//! | Representation   | Header  | Body                                             |
//! | ---------------- | ------- | ------------------------------------------------ |
//! | adjacency matrix | `V`     | `V x V` cells of 0/1                             |
//! | incidence matrix | `V E`   | `V x E` cells of -1/0/1                          |
//! | adjacency list   | `V`     | per vertex a count `k` followed by `k` labels    |
//! | edge list        | `V E`   | `E` pairs of labels                              |
//!
//! Every value is checked before the graph is built,
//! and the first offending one is reported with its 1-based position.

mod reader;
pub use self::reader::*;

/// Largest number of vertices accepted.
pub const MAX_VERTICES: usize = 30;
/// Largest number of edges accepted, i.e. `MAX_VERTICES * (MAX_VERTICES - 1) / 2`.
pub const MAX_EDGES: usize = 435;
/// Largest number of arcs accepted in a directed edge list.
pub const MAX_ARCS: usize = 870;
