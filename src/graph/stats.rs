//! Summary statistics for reporting.

use std::fmt;

use super::types::Graph;

/// Basic statistics of a [`Graph`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStats {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of stored edges.
    pub edges: usize,
    /// Edge density `|E| / (|V| (|V| - 1) / 2)`.
    pub density: f64,
    /// Largest vertex degree.
    pub max_degree: usize,
    /// Average vertex degree.
    pub avg_degree: f64,
}

impl GraphStats {
    /// Computes statistics from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.n();
        let m = graph.edge_count();

        let density = if n > 1 {
            (2.0 * m as f64) / (n * (n - 1)) as f64
        } else {
            0.0
        };
        let avg_degree = if n > 0 {
            (2.0 * m as f64) / n as f64
        } else {
            0.0
        };

        Self {
            vertices: n,
            edges: m,
            density,
            max_degree: graph.max_degree(),
            avg_degree,
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} edges, density {:.4}, max degree {}, avg degree {:.2}",
            self.vertices, self.edges, self.density, self.max_degree, self.avg_degree
        )
    }
}
