//! Static undirected graph.
//!
//! The graph is built once from a vertex count and an edge list and is
//! read-only afterwards. Every heuristic in the crate borrows it immutably.

mod stats;
mod types;

pub use stats::GraphStats;
pub use types::Graph;
