//! Local search configuration.

use crate::coloring::CostSignal;
use crate::error::Result;
use crate::greedy::Initializer;
use crate::moves::PairMove;

/// Configuration for [`LocalSearchEngine`](super::LocalSearchEngine).
///
/// # Examples
///
/// ```
/// use u_graphcolor::coloring::CostSignal;
/// use u_graphcolor::greedy::Initializer;
/// use u_graphcolor::local::LocalSearchConfig;
/// use u_graphcolor::moves::PairMove;
///
/// let config = LocalSearchConfig::default()
///     .with_cost_signal(CostSignal::Collisions)
///     .with_initializer(Initializer::random())
///     .with_pair_move(PairMove::Merge)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Cost signal used by every move of the run.
    pub cost_signal: CostSignal,

    /// Recombination used by neighborhood 2.
    pub pair_move: PairMove,

    /// How the starting assignment is built.
    pub initializer: Initializer,

    /// Random seed, only consulted by the random initializer.
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            cost_signal: CostSignal::Colors,
            pair_move: PairMove::Swap,
            initializer: Initializer::Greedy,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
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
        self.initializer.validate()
    }
}
