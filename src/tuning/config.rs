//! Tuning grid configuration.

use crate::coloring::CostSignal;
use crate::error::{ColoringError, Result};
use crate::greedy::Initializer;
use crate::moves::PairMove;
use crate::sa::NeighborStrategy;

/// Configuration for [`ParameterTuner`](super::ParameterTuner).
///
/// The default grid steps temperature over `100, 200, ..., 2000` and cooling
/// rate over `0.90, 0.91, ..., 0.99`, with 1000 iterations per cell.
///
/// # Examples
///
/// ```
/// use u_graphcolor::sa::NeighborStrategy;
/// use u_graphcolor::tuning::TuningConfig;
///
/// let config = TuningConfig::default().with_strategy(NeighborStrategy::Pairwise);
/// assert_eq!(config.temperatures().len(), 20);
/// assert_eq!(config.cooling_rates().len(), 10);
/// assert_eq!(config.grid().len(), 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TuningConfig {
    /// First temperature of the grid.
    pub temperature_start: f64,
    /// Last temperature of the grid (inclusive).
    pub temperature_end: f64,
    /// Temperature increment.
    pub temperature_step: f64,

    /// First cooling rate of the grid.
    pub cooling_start: f64,
    /// Last cooling rate of the grid (inclusive).
    pub cooling_end: f64,
    /// Cooling rate increment.
    pub cooling_step: f64,

    /// Annealing iterations per cell.
    pub iterations: usize,

    /// Neighbor strategy used by every cell.
    pub strategy: NeighborStrategy,
    /// Cost signal used by every cell.
    pub cost_signal: CostSignal,
    /// Pair move used by every cell.
    pub pair_move: PairMove,
    /// Initializer used by every cell.
    pub initializer: Initializer,

    /// Whether to scan cells in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled. The selected
    /// cell is the same either way.
    pub parallel: bool,

    /// Base seed; cell `i` is seeded with `seed + i`.
    pub seed: Option<u64>,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            temperature_start: 100.0,
            temperature_end: 2000.0,
            temperature_step: 100.0,
            cooling_start: 0.90,
            cooling_end: 0.99,
            cooling_step: 0.01,
            iterations: 1000,
            strategy: NeighborStrategy::default(),
            cost_signal: CostSignal::default(),
            pair_move: PairMove::default(),
            initializer: Initializer::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl TuningConfig {
    /// Sets the temperature axis.
    pub fn with_temperatures(mut self, start: f64, end: f64, step: f64) -> Self {
        self.temperature_start = start;
        self.temperature_end = end;
        self.temperature_step = step;
        self
    }

    /// Sets the cooling-rate axis.
    pub fn with_cooling_rates(mut self, start: f64, end: f64, step: f64) -> Self {
        self.cooling_start = start;
        self.cooling_end = end;
        self.cooling_step = step;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
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

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Temperatures of the grid, in scan order.
    pub fn temperatures(&self) -> Vec<f64> {
        axis(self.temperature_start, self.temperature_end, self.temperature_step)
    }

    /// Cooling rates of the grid, in scan order.
    pub fn cooling_rates(&self) -> Vec<f64> {
        axis(self.cooling_start, self.cooling_end, self.cooling_step)
    }

    /// All `(temperature, cooling_rate)` cells, temperature-major.
    pub fn grid(&self) -> Vec<(f64, f64)> {
        let rates = self.cooling_rates();
        self.temperatures()
            .into_iter()
            .flat_map(|t| rates.iter().map(move |&r| (t, r)))
            .collect()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_axis(
            "temperature",
            self.temperature_start,
            self.temperature_end,
            self.temperature_step,
        )?;
        check_axis("cooling", self.cooling_start, self.cooling_end, self.cooling_step)?;
        if self.temperature_start <= 0.0 {
            return Err(ColoringError::config(format!(
                "temperature_start must be positive, got {}",
                self.temperature_start
            )));
        }
        if self.cooling_start <= 0.0 || self.cooling_end >= 1.0 {
            return Err(ColoringError::config(format!(
                "cooling rates must lie in (0, 1), got {}..={}",
                self.cooling_start, self.cooling_end
            )));
        }
        self.initializer.validate()
    }
}

/// Inclusive arithmetic axis built from integer step counts, so the end
/// point survives floating-point accumulation.
fn axis(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || end < start {
        return Vec::new();
    }
    let count = ((end - start) / step + 1e-9).floor() as usize + 1;
    (0..count)
        .map(|i| ((start + i as f64 * step) * 1e9).round() / 1e9)
        .collect()
}

fn check_axis(name: &str, start: f64, end: f64, step: f64) -> Result<()> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(ColoringError::config(format!("{name} axis must be finite")));
    }
    if step <= 0.0 {
        return Err(ColoringError::config(format!(
            "{name} step must be positive, got {step}"
        )));
    }
    if start > end {
        return Err(ColoringError::config(format!(
            "{name} axis is empty ({start}..={end})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_endpoints() {
        let config = TuningConfig::default();
        let temps = config.temperatures();
        let rates = config.cooling_rates();
        assert_eq!(temps.len(), 20);
        assert!((temps[0] - 100.0).abs() < 1e-12);
        assert!((temps[19] - 2000.0).abs() < 1e-12);
        assert_eq!(rates.len(), 10);
        assert!((rates[0] - 0.90).abs() < 1e-12);
        assert!((rates[9] - 0.99).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_grid_is_temperature_major() {
        let config = TuningConfig::default()
            .with_temperatures(10.0, 20.0, 10.0)
            .with_cooling_rates(0.5, 0.6, 0.1);
        assert_eq!(
            config.grid(),
            vec![(10.0, 0.5), (10.0, 0.6), (20.0, 0.5), (20.0, 0.6)]
        );
    }

    #[test]
    fn test_single_point_axis() {
        let config = TuningConfig::default().with_temperatures(300.0, 300.0, 50.0);
        assert_eq!(config.temperatures(), vec![300.0]);
    }

    #[test]
    fn test_validate_rejects_bad_axes() {
        let bad = [
            TuningConfig::default().with_temperatures(0.0, 100.0, 10.0),
            TuningConfig::default().with_temperatures(200.0, 100.0, 10.0),
            TuningConfig::default().with_temperatures(100.0, 200.0, 0.0),
            TuningConfig::default().with_cooling_rates(0.9, 1.0, 0.01),
            TuningConfig::default().with_cooling_rates(0.0, 0.5, 0.1),
            TuningConfig::default().with_cooling_rates(0.5, 0.6, f64::NAN),
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }
}
