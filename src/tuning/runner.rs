//! Grid search execution.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::TuningConfig;
use super::types::{GridCell, TuningResult};
use crate::error::{ColoringError, Result};
use crate::graph::Graph;
use crate::sa::{AnnealingConfig, AnnealingEngine};

/// Exhaustive grid search over annealing parameters.
///
/// Each cell runs its own engine on the shared read-only graph, so cells
/// have no state in common and may be scanned in any order.
///
/// # Examples
///
/// ```
/// use u_graphcolor::tuning::{ParameterTuner, TuningConfig};
///
/// let edges = [(0, 1), (1, 2), (2, 0)];
/// let config = TuningConfig::default()
///     .with_temperatures(100.0, 300.0, 100.0)
///     .with_cooling_rates(0.90, 0.92, 0.01)
///     .with_iterations(100)
///     .with_seed(1);
/// let result = ParameterTuner::new(3, &edges, config).unwrap().tune().unwrap();
/// assert_eq!(result.color_count, 3);
/// assert_eq!(result.evaluated(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct ParameterTuner {
    graph: Graph,
    config: TuningConfig,
}

impl ParameterTuner {
    /// Builds the graph from `edges` (out-of-range edges are dropped).
    pub fn new(n: usize, edges: &[(usize, usize)], config: TuningConfig) -> Result<Self> {
        Self::from_graph(Graph::from_edges(n, edges), config)
    }

    /// Uses an already built graph.
    pub fn from_graph(graph: Graph, config: TuningConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(ColoringError::EmptyGraph);
        }
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    /// Evaluates every grid cell and returns the best one.
    ///
    /// The winner has the fewest colors among the cells whose best
    /// assignment is proper. Cells left with collisions only win when no
    /// cell is proper. Among equals, the earliest cell in scan order wins.
    pub fn tune(&self) -> Result<TuningResult> {
        let grid = self.config.grid();
        let base_seed = self.config.seed.unwrap_or_else(rand::random);

        log::debug!(
            "tuning {} cells ({} iterations each, strategy {})",
            grid.len(),
            self.config.iterations,
            self.config.strategy
        );

        let cells = self.scan(&grid, base_seed)?;

        let winner = cells
            .iter()
            .copied()
            .reduce(|best, cell| if cell.rank() < best.rank() { cell } else { best })
            .ok_or_else(|| ColoringError::config("tuning grid is empty"))?;

        if !winner.is_proper() {
            log::warn!(
                "no grid cell reached a proper coloring; best has {} collisions",
                winner.collisions
            );
        }

        log::info!(
            "best configuration: T0={} rate={} -> {} colors",
            winner.initial_temperature,
            winner.cooling_rate,
            winner.colors
        );

        Ok(TuningResult {
            initial_temperature: winner.initial_temperature,
            cooling_rate: winner.cooling_rate,
            color_count: winner.colors,
            collisions: winner.collisions,
            cells,
        })
    }

    #[cfg(feature = "parallel")]
    fn scan(&self, grid: &[(f64, f64)], base_seed: u64) -> Result<Vec<GridCell>> {
        if !self.config.parallel {
            return self.scan_sequential(grid, base_seed);
        }
        // Indexed collect keeps scan order, so tie-breaking is unchanged.
        grid.par_iter()
            .enumerate()
            .map(|(i, &(t, r))| self.evaluate(i, t, r, base_seed))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&self, grid: &[(f64, f64)], base_seed: u64) -> Result<Vec<GridCell>> {
        self.scan_sequential(grid, base_seed)
    }

    fn scan_sequential(&self, grid: &[(f64, f64)], base_seed: u64) -> Result<Vec<GridCell>> {
        grid.iter()
            .enumerate()
            .map(|(i, &(t, r))| self.evaluate(i, t, r, base_seed))
            .collect()
    }

    fn evaluate(
        &self,
        index: usize,
        temperature: f64,
        rate: f64,
        base_seed: u64,
    ) -> Result<GridCell> {
        let config = self.cell_config(temperature, rate, base_seed.wrapping_add(index as u64));
        let result = AnnealingEngine::new(&self.graph, config)?.run();
        log::trace!(
            "cell {index}: T0={temperature} rate={rate} -> {}",
            result.best_cost
        );
        Ok(GridCell {
            initial_temperature: temperature,
            cooling_rate: rate,
            colors: result.best_cost.colors,
            collisions: result.best_cost.collisions,
        })
    }

    fn cell_config(&self, temperature: f64, rate: f64, seed: u64) -> AnnealingConfig {
        AnnealingConfig::default()
            .with_initial_temperature(temperature)
            .with_cooling_rate(rate)
            .with_max_iterations(self.config.iterations)
            .with_strategy(self.config.strategy)
            .with_cost_signal(self.config.cost_signal)
            .with_pair_move(self.config.pair_move)
            .with_initializer(self.config.initializer)
            .with_seed(seed)
    }
}
