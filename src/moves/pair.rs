//! Pairwise and single-vertex recoloring.

use std::fmt;
use std::str::FromStr;

use crate::coloring::ColorAssignment;
use crate::error::ColoringError;
use crate::graph::Graph;

/// How two vertices with different colors are recombined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairMove {
    /// Exchange the two colors unconditionally.
    #[default]
    Swap,
    /// Give the higher-colored vertex the lower color, only if none of its
    /// neighbors already holds that color.
    Merge,
}

impl PairMove {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            PairMove::Swap => "swap",
            PairMove::Merge => "merge",
        }
    }
}

impl FromStr for PairMove {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(PairMove::Swap),
            "merge" => Ok(PairMove::Merge),
            _ => Err(ColoringError::UnknownPairMove(s.to_string())),
        }
    }
}

impl fmt::Display for PairMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies `mode` to the pair `(v1, v2)` in place.
///
/// Returns `false` and leaves `assignment` unchanged when the two colors are
/// equal or a merge would create a conflict.
pub fn pair_move(
    graph: &Graph,
    assignment: &mut ColorAssignment,
    v1: usize,
    v2: usize,
    mode: PairMove,
) -> bool {
    let (c1, c2) = (assignment.raw(v1), assignment.raw(v2));
    if c1 == c2 {
        return false;
    }
    match mode {
        PairMove::Swap => {
            assignment.swap(v1, v2);
            true
        }
        PairMove::Merge => {
            let (high, low_color) = if c1 > c2 { (v1, c2) } else { (v2, c1) };
            if assignment.can_color(graph, high, low_color) {
                assignment.set(high, low_color);
                true
            } else {
                false
            }
        }
    }
}

/// Gives `v` its smallest free color. Returns whether the color changed.
pub fn recolor_vertex(graph: &Graph, assignment: &mut ColorAssignment, v: usize) -> bool {
    let color = assignment.smallest_free_color(graph, v);
    if assignment.raw(v) == color {
        return false;
    }
    assignment.set(v, color);
    true
}
