//! Cost signals.

use std::fmt;
use std::str::FromStr;

use super::assignment::ColorAssignment;
use crate::error::ColoringError;
use crate::graph::Graph;

/// Measured quality of an assignment. Lower is better in both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    /// Distinct-color count (`max + 1`).
    pub colors: usize,
    /// Number of edges whose endpoints share a color.
    pub collisions: usize,
}

impl Cost {
    /// Measures both components.
    pub fn measure(graph: &Graph, assignment: &ColorAssignment) -> Self {
        Self {
            colors: assignment.distinct_colors(),
            collisions: assignment.collisions(graph),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colors, {} collisions", self.colors, self.collisions)
    }
}

/// Which quantity an engine minimizes.
///
/// Fixed once per engine instance so that all moves of a run are judged
/// by the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostSignal {
    /// Distinct-color count only.
    #[default]
    Colors,
    /// Collision count only.
    Collisions,
    /// Distinct colors first, collisions as tie-break.
    Lexicographic,
}

impl CostSignal {
    /// Whether the signal looks at collisions at all.
    #[inline]
    pub fn tracks_collisions(self) -> bool {
        !matches!(self, CostSignal::Colors)
    }

    /// Measures the components this signal needs.
    ///
    /// For [`CostSignal::Colors`] the collision count is skipped and left at
    /// zero; use [`Cost::measure`] when both are required.
    pub fn evaluate(self, graph: &Graph, assignment: &ColorAssignment) -> Cost {
        Cost {
            colors: assignment.distinct_colors(),
            collisions: if self.tracks_collisions() {
                assignment.collisions(graph)
            } else {
                0
            },
        }
    }

    /// Whether `candidate` is strictly better than `reference`.
    pub fn is_better(self, candidate: &Cost, reference: &Cost) -> bool {
        match self {
            CostSignal::Colors => candidate.colors < reference.colors,
            CostSignal::Collisions => candidate.collisions < reference.collisions,
            CostSignal::Lexicographic => {
                (candidate.colors, candidate.collisions) < (reference.colors, reference.collisions)
            }
        }
    }

    /// Leading component of the signal, as sampled into cost histories.
    pub fn primary(self, cost: &Cost) -> f64 {
        match self {
            CostSignal::Colors | CostSignal::Lexicographic => cost.colors as f64,
            CostSignal::Collisions => cost.collisions as f64,
        }
    }

    /// Metropolis delta `reference - candidate`, negative when `candidate`
    /// is worse.
    ///
    /// The lexicographic signal falls back to the collision delta when the
    /// color counts tie, so a trial that only adds collisions is still a
    /// worsening move.
    pub fn delta(self, reference: &Cost, candidate: &Cost) -> f64 {
        let diff = |a: usize, b: usize| a as f64 - b as f64;
        match self {
            CostSignal::Colors => diff(reference.colors, candidate.colors),
            CostSignal::Collisions => diff(reference.collisions, candidate.collisions),
            CostSignal::Lexicographic if reference.colors == candidate.colors => {
                diff(reference.collisions, candidate.collisions)
            }
            CostSignal::Lexicographic => diff(reference.colors, candidate.colors),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            CostSignal::Colors => "colors",
            CostSignal::Collisions => "collisions",
            CostSignal::Lexicographic => "lexicographic",
        }
    }
}

impl FromStr for CostSignal {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "colors" | "distinct" => Ok(CostSignal::Colors),
            "collisions" | "conflicts" => Ok(CostSignal::Collisions),
            "lexicographic" | "lex" => Ok(CostSignal::Lexicographic),
            _ => Err(ColoringError::UnknownCostSignal(s.to_string())),
        }
    }
}

impl fmt::Display for CostSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
