//! Graph algorithms
mod traversal;
pub use self::traversal::*;
mod shortest_paths;
pub use self::shortest_paths::*;
