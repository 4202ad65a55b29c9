//! Grid search over annealing temperature and cooling rate.
//!
//! Every `(initial_temperature, cooling_rate)` cell of a fixed grid is
//! evaluated with a fresh [`AnnealingEngine`](crate::sa::AnnealingEngine)
//! and a small iteration budget. The cell with the fewest colors wins;
//! ties go to the cell scanned first (temperature-major order).

mod config;
mod runner;
mod types;

pub use config::TuningConfig;
pub use runner::ParameterTuner;
pub use types::{GridCell, TuningResult};
