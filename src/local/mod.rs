//! Local search over two neighborhoods.
//!
//! Starting from an initial assignment, the engine explores either
//! cluster recompaction (neighborhood 1) or pairwise recoloring
//! (neighborhood 2) and accepts only strictly improving moves, under a
//! first-improvement or best-improvement policy.
//!
//! # Example
//!
//! ```
//! use u_graphcolor::graph::Graph;
//! use u_graphcolor::local::{LocalSearchConfig, LocalSearchEngine};
//!
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
//! let engine = LocalSearchEngine::new(&graph, LocalSearchConfig::default()).unwrap();
//! let report = engine.run_all();
//! assert_eq!(report.initial.colors, 2);
//! ```

mod config;
mod runner;
mod types;

pub use config::LocalSearchConfig;
pub use runner::LocalSearchEngine;
pub use types::{Improvement, LocalSearchOutcome, LocalSearchReport, Neighborhood};
