//! SA configuration.

use super::types::NeighborStrategy;
use crate::coloring::CostSignal;
use crate::error::{ColoringError, Result};
use crate::greedy::Initializer;
use crate::moves::PairMove;

/// Configuration for the annealing engine.
///
/// Temperature follows the geometric schedule `T_{k+1} = cooling_rate * T_k`,
/// applied once per iteration. The run always performs exactly
/// `max_iterations` iterations.
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::CostSignal;
/// use u_graphcolor::sa::{AnnealingConfig, NeighborStrategy};
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.95)
///     .with_max_iterations(2_000)
///     .with_strategy(NeighborStrategy::Mixed)
///     .with_cost_signal(CostSignal::Lexicographic)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Starting temperature. Must be positive.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of iterations. There is no early termination.
    pub max_iterations: usize,

    /// Neighbor-generation strategy.
    pub strategy: NeighborStrategy,

    /// Cost signal used for every acceptance decision of the run.
    pub cost_signal: CostSignal,

    /// Pair move used by the pairwise and mixed strategies.
    pub pair_move: PairMove,

    /// How the starting assignment is built.
    pub initializer: Initializer,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            max_iterations: 10_000,
            strategy: NeighborStrategy::default(),
            cost_signal: CostSignal::default(),
            pair_move: PairMove::default(),
            initializer: Initializer::default(),
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_cost_signal(mut self, signal: CostSignal) -> Self {
        self.cost_signal = signal;
        self
    }

    pub fn with_pair_move(mut self, mode: PairMove) -> Self {
        self.pair_move = mode;
        self
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = initializer;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ColoringError::config(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ColoringError::config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        self.initializer.validate()
    }
}
