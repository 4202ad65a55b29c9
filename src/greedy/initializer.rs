//! Greedy and random initializers.

use rand::Rng;

use crate::coloring::{ColorAssignment, UNCOLORED};
use crate::error::{ColoringError, Result};
use crate::graph::Graph;

/// How an engine builds its starting assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Initializer {
    /// Largest-degree-first greedy with first-fit colors. Always proper.
    #[default]
    Greedy,
    /// Uniform colors from `low..=high`, ignoring adjacency.
    Random {
        /// Smallest color drawn.
        low: usize,
        /// Largest color drawn (inclusive).
        high: usize,
    },
}

impl Initializer {
    /// Random initializer over the default range `1..=100`.
    pub fn random() -> Self {
        Initializer::Random { low: 1, high: 100 }
    }

    /// Checks that a random range is non-empty and stays below the
    /// uncolored sentinel.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Initializer::Random { low, high } if low > high => Err(ColoringError::config(
                format!("random initializer range is empty ({low}..={high})"),
            )),
            Initializer::Random { high, .. } if high == UNCOLORED => Err(ColoringError::config(
                "random initializer range includes the uncolored sentinel",
            )),
            _ => Ok(()),
        }
    }

    /// Builds the starting assignment for `graph`.
    ///
    /// Only [`Initializer::Random`] draws from `rng`.
    pub fn build<R: Rng>(&self, graph: &Graph, rng: &mut R) -> ColorAssignment {
        match *self {
            Initializer::Greedy => greedy_coloring(graph),
            Initializer::Random { low, high } => random_coloring(graph, low, high, rng),
        }
    }
}

/// Greedy first-fit coloring in non-increasing degree order.
///
/// Ties in degree are broken by vertex id, so the result is deterministic.
/// Each vertex receives the smallest color not used by an already colored
/// neighbor, which makes the output proper by construction.
///
/// # Examples
///
/// ```
/// use u_graphcolor::graph::Graph;
/// use u_graphcolor::greedy::greedy_coloring;
///
/// let cycle = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let coloring = greedy_coloring(&cycle);
/// assert_eq!(coloring.distinct_colors(), 2);
/// assert!(coloring.is_proper(&cycle));
/// ```
pub fn greedy_coloring(graph: &Graph) -> ColorAssignment {
    let mut assignment = ColorAssignment::uncolored(graph.n());
    for v in graph.degree_order() {
        let color = assignment.smallest_free_color(graph, v);
        assignment.set(v, color);
    }
    log::debug!(
        "greedy coloring: {} vertices, {} colors",
        graph.n(),
        assignment.distinct_colors()
    );
    assignment
}

/// Assigns each vertex a color drawn uniformly from `low..=high`.
///
/// Adjacency is ignored, so the result usually has collisions.
pub fn random_coloring<R: Rng>(
    graph: &Graph,
    low: usize,
    high: usize,
    rng: &mut R,
) -> ColorAssignment {
    let colors = (0..graph.n()).map(|_| rng.random_range(low..=high)).collect();
    ColorAssignment::from_colors(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_four_cycle_two_colors() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let a = greedy_coloring(&g);
        assert_eq!(a.distinct_colors(), 2);
        assert!(a.is_proper(&g));
    }

    #[test]
    fn test_triangle_three_colors() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(greedy_coloring(&g).distinct_colors(), 3);
    }

    #[test]
    fn test_no_edges_single_color() {
        let g = Graph::new(5);
        let a = greedy_coloring(&g);
        assert_eq!(a.as_slice(), &[0, 0, 0, 0, 0]);
        assert_eq!(a.distinct_colors(), 1);
    }

    #[test]
    fn test_greedy_empty_graph() {
        let a = greedy_coloring(&Graph::new(0));
        assert!(a.is_empty());
        assert_eq!(a.distinct_colors(), 0);
    }

    #[test]
    fn test_highest_degree_gets_color_zero() {
        // Star centered at 3.
        let g = Graph::from_edges(4, &[(3, 0), (3, 1), (3, 2)]);
        let a = greedy_coloring(&g);
        assert_eq!(a.get(3), Some(0));
        assert_eq!(a.as_slice(), &[1, 1, 1, 0]);
    }

    #[test]
    fn test_random_coloring_range() {
        let g = Graph::new(200);
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_coloring(&g, 1, 100, &mut rng);
        assert!(a.as_slice().iter().all(|&c| (1..=100).contains(&c)));
        assert!(a.is_complete());
    }

    #[test]
    fn test_initializer_validate() {
        assert!(Initializer::Greedy.validate().is_ok());
        assert!(Initializer::random().validate().is_ok());
        assert!(Initializer::Random { low: 5, high: 4 }.validate().is_err());
        assert!(Initializer::Random { low: 0, high: usize::MAX }.validate().is_err());
        let low = usize::MAX / 4;
        assert!(Initializer::Random { low, high: low + 5 }.validate().is_ok());
    }

    #[test]
    fn test_initializer_build_greedy_ignores_rng() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let a = Initializer::Greedy.build(&g, &mut StdRng::seed_from_u64(1));
        let b = Initializer::Greedy.build(&g, &mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
    }

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (1usize..40).prop_flat_map(|n| {
            prop::collection::vec((0..n + 2, 0..n + 2), 0..120)
                .prop_map(move |edges| Graph::from_edges(n, &edges))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_greedy_is_proper(g in arb_graph()) {
            let a = greedy_coloring(&g);
            prop_assert!(a.is_complete());
            for &(u, v) in g.edges() {
                if u != v {
                    prop_assert_ne!(a.raw(u), a.raw(v));
                }
            }
        }

        #[test]
        fn prop_greedy_is_deterministic(g in arb_graph()) {
            prop_assert_eq!(greedy_coloring(&g), greedy_coloring(&g));
        }

        #[test]
        fn prop_greedy_bounded_by_max_degree(g in arb_graph()) {
            prop_assert!(greedy_coloring(&g).distinct_colors() <= g.max_degree() + 1);
        }
    }
}
