//! Simulated Annealing (SA) for graph coloring.
//!
//! A temperature-driven random walk over colorings. Each iteration draws
//! one trial from the current assignment with a [`NeighborStrategy`],
//! accepts it if it improves under the configured cost signal, and
//! otherwise accepts it with the Metropolis probability
//! `exp((current - trial) / T)`. Temperature decays geometrically after
//! every iteration and the best assignment seen is returned.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Johnson, Aragon, McGeoch & Schevon (1991), "Optimization by Simulated
//!   Annealing: An Experimental Evaluation; Part II, Graph Coloring and
//!   Number Partitioning"

mod config;
mod runner;
mod types;

pub use config::AnnealingConfig;
pub use runner::{AnnealingEngine, AnnealingResult};
pub use types::NeighborStrategy;
