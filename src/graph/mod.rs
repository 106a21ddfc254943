//! Graph storage in four interchangeable representations.
//!
//! # Representations
//!
//! A [Graph] holds one [Body] tagged with its [RepresentationKind]:
//! an adjacency matrix, an incidence matrix, an adjacency list or an edge list.
//! Vertices are 1-based labels everywhere outside of this crate.
//! Self-loops are not allowed, and undirected graphs are symmetric in every form.
//!
//! # Conversion
//!
//! [Graph::convert] rewrites the body in place.
//! The adjacency matrix is the hub of all conversions,
//! so any representation reaches any other in at most two steps.
//!
//! # Sessions
//!
//! A [Session] owns at most one live graph at a time,
//! replaced whenever a new one is loaded.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod kind;
pub use self::kind::*;
mod store;
pub use self::store::*;
mod convert;
pub use self::convert::*;
mod cleanup;
pub use self::cleanup::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency_list;
pub use self::adjacency_list::*;
mod graph_debug;
pub use self::graph_debug::*;
mod print;
pub use self::print::*;
mod session;
pub use self::session::*;

#[cfg(test)]
pub use self::tests::*;
