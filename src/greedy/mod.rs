//! Constructive initial colorings.
//!
//! The default is a largest-degree-first greedy that is always proper. A
//! random initializer that ignores adjacency is also available to start
//! the collision-based searches from an infeasible point.

mod initializer;

pub use initializer::{greedy_coloring, random_coloring, Initializer};
