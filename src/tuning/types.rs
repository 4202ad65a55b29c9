//! Tuning results.

use std::fmt;

use crate::sa::AnnealingConfig;

/// Outcome of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Initial temperature of the cell.
    pub initial_temperature: f64,
    /// Cooling rate of the cell.
    pub cooling_rate: f64,
    /// Distinct colors of the cell's best assignment.
    pub colors: usize,
    /// Collisions of the cell's best assignment.
    pub collisions: usize,
}

impl GridCell {
    /// Whether the cell's best assignment has no collisions.
    pub fn is_proper(&self) -> bool {
        self.collisions == 0
    }

    /// Selection key: proper cells first, then fewer colors.
    pub fn rank(&self) -> (bool, usize) {
        (!self.is_proper(), self.colors)
    }
}

/// Best configuration found by a tuning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TuningResult {
    /// Winning initial temperature.
    pub initial_temperature: f64,
    /// Winning cooling rate.
    pub cooling_rate: f64,
    /// Distinct colors reached by the winning cell.
    pub color_count: usize,
    /// Collisions of the winning cell's assignment.
    pub collisions: usize,
    /// Every evaluated cell, in scan order.
    pub cells: Vec<GridCell>,
}

impl TuningResult {
    /// Number of cells evaluated.
    pub fn evaluated(&self) -> usize {
        self.cells.len()
    }

    /// Whether the winning cell reached a proper coloring.
    pub fn is_proper(&self) -> bool {
        self.collisions == 0
    }

    /// Copies the winning temperature and cooling rate into `base`.
    pub fn apply_to(&self, base: AnnealingConfig) -> AnnealingConfig {
        base.with_initial_temperature(self.initial_temperature)
            .with_cooling_rate(self.cooling_rate)
    }
}

impl fmt::Display for TuningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial temperature: {}", self.initial_temperature)?;
        writeln!(f, "Cooling rate: {}", self.cooling_rate)?;
        write!(
            f,
            "Colors: {} ({} cells evaluated)",
            self.color_count,
            self.evaluated()
        )
    }
}
