//! Heuristic graph coloring.
//!
//! Provides three cooperating heuristics for finding low-color vertex
//! colorings of undirected graphs:
//!
//! - **Greedy**: largest-degree-first construction with first-fit colors,
//!   always proper. A random initializer is available for collision-based
//!   searches.
//! - **Local Search**: strict-improvement descent over cluster
//!   recompaction and pairwise recoloring, under first- or
//!   best-improvement.
//! - **Simulated Annealing (SA)**: geometric-cooling random walk with
//!   cluster, pairwise and mixed neighbor strategies.
//! - **Tuning**: grid search over SA's initial temperature and cooling
//!   rate.
//!
//! # Cost signals
//!
//! Every engine judges moves by one [`coloring::CostSignal`] fixed in its
//! configuration: the distinct-color count, the collision count, or both
//! compared lexicographically.
//!
//! # Randomness
//!
//! Configurations carry an optional seed, and engines also accept an
//! injected [`rand::Rng`], so every run can be reproduced.
//!
//! # Example
//!
//! ```
//! use u_graphcolor::graph::Graph;
//! use u_graphcolor::moves::PairMove;
//! use u_graphcolor::sa::{AnnealingConfig, AnnealingEngine, NeighborStrategy};
//!
//! let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
//! let config = AnnealingConfig::default()
//!     .with_strategy(NeighborStrategy::Mixed)
//!     .with_pair_move(PairMove::Merge)
//!     .with_max_iterations(1_000)
//!     .with_seed(42);
//! let result = AnnealingEngine::new(&graph, config)?.run();
//! // An odd cycle needs three colors; merges never break properness.
//! assert_eq!(result.best_cost.colors, 3);
//! assert_eq!(result.best_cost.collisions, 0);
//! # Ok::<(), u_graphcolor::ColoringError>(())
//! ```

pub mod coloring;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod local;
pub mod moves;
pub mod random;
pub mod sa;
pub mod tuning;

pub use error::{ColoringError, Result};
