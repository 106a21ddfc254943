//! Graph algorithms
mod metrics;
pub use self::metrics::*;
mod traversal;
pub use self::traversal::*;
