//! Color assignments and the cost signals that score them.
//!
//! A [`ColorAssignment`] is the mutable state every heuristic works on. A
//! [`CostSignal`] fixes, once per engine, how two assignments are compared.

mod assignment;
mod cost;

pub use assignment::{ColorAssignment, UNCOLORED};
pub use cost::{Cost, CostSignal};
