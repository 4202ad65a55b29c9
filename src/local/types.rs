//! Local search policies and results.

use std::fmt;

use crate::coloring::{ColorAssignment, Cost};

/// Which improving move a scan commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    /// Stop at the first strictly improving move.
    First,
    /// Scan the whole neighborhood and keep the best improving move.
    Best,
}

impl Improvement {
    pub fn label(self) -> &'static str {
        match self {
            Improvement::First => "First improvement",
            Improvement::Best => "Best improvement",
        }
    }
}

/// The two local search neighborhoods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Neighborhood 1: recompact one connected component.
    ClusterRecompaction,
    /// Neighborhood 2: recombine the colors of two vertices.
    PairwiseRecoloring,
}

impl Neighborhood {
    pub fn label(self) -> &'static str {
        match self {
            Neighborhood::ClusterRecompaction => "neighborhood 1",
            Neighborhood::PairwiseRecoloring => "neighborhood 2",
        }
    }
}

/// Result of one neighborhood scan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchOutcome {
    /// Neighborhood that was scanned.
    pub neighborhood: Neighborhood,
    /// Policy used.
    pub improvement: Improvement,
    /// Committed assignment (the start if nothing improved).
    pub assignment: ColorAssignment,
    /// Cost of the starting assignment.
    pub before: Cost,
    /// Cost of the committed assignment.
    pub after: Cost,
    /// Number of trials evaluated.
    pub evaluated: usize,
    /// Number of times the kept trial was replaced by a better one.
    pub improvements: usize,
}

impl LocalSearchOutcome {
    /// Whether any move was committed.
    pub fn improved(&self) -> bool {
        self.improvements > 0
    }
}

impl fmt::Display for LocalSearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} colors",
            self.improvement.label(),
            self.neighborhood.label(),
            self.after.colors
        )
    }
}

/// The four labeled outcomes of a full local search pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchReport {
    /// Cost of the shared starting assignment.
    pub initial: Cost,
    /// First improvement, neighborhood 1.
    pub first_cluster: LocalSearchOutcome,
    /// Best improvement, neighborhood 1.
    pub best_cluster: LocalSearchOutcome,
    /// First improvement, neighborhood 2.
    pub first_pairwise: LocalSearchOutcome,
    /// Best improvement, neighborhood 2.
    pub best_pairwise: LocalSearchOutcome,
    /// Whether collision counts are part of the report.
    pub collision_aware: bool,
}

impl LocalSearchReport {
    /// Outcomes in reporting order.
    pub fn outcomes(&self) -> [&LocalSearchOutcome; 4] {
        [
            &self.first_cluster,
            &self.best_cluster,
            &self.first_pairwise,
            &self.best_pairwise,
        ]
    }

    /// Fewest colors reached by any of the four scans.
    pub fn best_colors(&self) -> usize {
        self.outcomes()
            .iter()
            .map(|o| o.after.colors)
            .min()
            .unwrap_or(self.initial.colors)
    }
}

impl fmt::Display for LocalSearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in self.outcomes() {
            write!(f, "{outcome}")?;
            if self.collision_aware {
                write!(
                    f,
                    ", collisions {} -> {}",
                    outcome.before.collisions, outcome.after.collisions
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
