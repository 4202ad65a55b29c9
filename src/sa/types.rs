//! Neighbor-generation strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::ColoringError;

/// How one trial coloring is drawn from the current one.
///
/// Parsing accepts the names below or the numeric aliases `1`, `2`, `3`.
/// Anything else is a [`ColoringError::UnknownStrategy`].
///
/// ```
/// use u_graphcolor::sa::NeighborStrategy;
///
/// assert_eq!("cluster".parse::<NeighborStrategy>(), Ok(NeighborStrategy::Cluster));
/// assert_eq!(NeighborStrategy::try_from(3u8), Ok(NeighborStrategy::Mixed));
/// assert!("annealed".parse::<NeighborStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborStrategy {
    /// Recompact the component of one random vertex. Under a
    /// collision-tracking signal, trials that add collisions are discarded.
    #[default]
    Cluster,
    /// Apply the configured pair move to two distinct random vertices.
    Pairwise,
    /// With equal probability, give one random vertex its smallest free
    /// color or apply the pairwise move.
    Mixed,
}

impl NeighborStrategy {
    /// All strategies in numeric-alias order.
    pub const ALL: [NeighborStrategy; 3] = [
        NeighborStrategy::Cluster,
        NeighborStrategy::Pairwise,
        NeighborStrategy::Mixed,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            NeighborStrategy::Cluster => "cluster",
            NeighborStrategy::Pairwise => "pairwise",
            NeighborStrategy::Mixed => "mixed",
        }
    }
}

impl TryFrom<u8> for NeighborStrategy {
    type Error = ColoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NeighborStrategy::Cluster),
            2 => Ok(NeighborStrategy::Pairwise),
            3 => Ok(NeighborStrategy::Mixed),
            other => Err(ColoringError::UnknownStrategy(other.to_string())),
        }
    }
}

impl FromStr for NeighborStrategy {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cluster" | "1" => Ok(NeighborStrategy::Cluster),
            "pairwise" | "swap" | "2" => Ok(NeighborStrategy::Pairwise),
            "mixed" | "3" => Ok(NeighborStrategy::Mixed),
            _ => Err(ColoringError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for NeighborStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
