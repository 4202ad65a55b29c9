//! Neighborhood mechanics shared by local search and annealing.
//!
//! - **Cluster recompaction**: recolor a whole connected component in
//!   depth-first order, reusing only the colors it already holds.
//! - **Pair move**: swap two vertices' colors, or merge the higher color
//!   into the lower one when that keeps the vertex conflict-free.
//! - **Vertex recolor**: give one vertex its smallest free color.

mod cluster;
mod pair;

pub use cluster::recompact_cluster;
pub use pair::{pair_move, recolor_vertex, PairMove};
