//! Error types for the coloring engines.

use thiserror::Error;

/// Unified error type for all coloring operations.
///
/// The heuristics themselves never fail once constructed; errors only arise
/// from invalid configuration or an empty graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColoringError {
    /// The graph has no vertices.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    /// A configuration parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A neighbor-generation strategy name was not recognized.
    #[error("unknown neighbor strategy '{0}' (expected cluster, pairwise or mixed)")]
    UnknownStrategy(String),

    /// A cost signal name was not recognized.
    #[error("unknown cost signal '{0}' (expected colors, collisions or lexicographic)")]
    UnknownCostSignal(String),

    /// A pair move name was not recognized.
    #[error("unknown pair move '{0}' (expected swap or merge)")]
    UnknownPairMove(String),

    /// A vertex index outside `[0, n)` was passed to an indexed accessor.
    #[error("vertex {vertex} out of range for graph with {n} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Vertex count of the graph.
        n: usize,
    },

    /// An assignment's length does not match the graph's vertex count.
    #[error("assignment covers {got} vertices, graph has {expected}")]
    SizeMismatch {
        /// Vertex count of the graph.
        expected: usize,
        /// Length of the assignment.
        got: usize,
    },
}

impl ColoringError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ColoringError::InvalidConfig(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColoringError>;
