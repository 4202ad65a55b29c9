//! Vertex → color mapping.

use std::fmt;

use crate::graph::Graph;

/// Sentinel stored for a vertex that has no color yet.
pub const UNCOLORED: usize = usize::MAX;

/// One color id per vertex, or [`UNCOLORED`].
///
/// Color ids are dense and 0-based, so the number of colors in use is
/// derived as `max + 1`. That derivation is only meaningful once every
/// vertex is colored (see [`ColorAssignment::is_complete`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorAssignment {
    colors: Vec<usize>,
}

impl ColorAssignment {
    /// Creates an assignment with all `n` vertices uncolored.
    pub fn uncolored(n: usize) -> Self {
        Self {
            colors: vec![UNCOLORED; n],
        }
    }

    /// Wraps an existing color vector.
    pub fn from_colors(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    /// Number of vertices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the assignment covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of `v`, or `None` if uncolored.
    #[inline]
    pub fn get(&self, v: usize) -> Option<usize> {
        match self.colors[v] {
            UNCOLORED => None,
            c => Some(c),
        }
    }

    /// Raw color of `v` (may be [`UNCOLORED`]).
    #[inline]
    pub fn raw(&self, v: usize) -> usize {
        self.colors[v]
    }

    /// Sets the color of `v`.
    #[inline]
    pub fn set(&mut self, v: usize, color: usize) {
        self.colors[v] = color;
    }

    /// Marks `v` as uncolored.
    #[inline]
    pub fn clear(&mut self, v: usize) {
        self.colors[v] = UNCOLORED;
    }

    /// Swaps the colors of `a` and `b`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.colors.swap(a, b);
    }

    /// The underlying color slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.colors
    }

    /// Consumes the assignment and returns the color vector.
    pub fn into_inner(self) -> Vec<usize> {
        self.colors
    }

    /// Whether every vertex holds a color.
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|&c| c != UNCOLORED)
    }

    /// Distinct-color count derived as `max color + 1`.
    ///
    /// Uncolored vertices are skipped; returns 0 when nothing is colored.
    pub fn distinct_colors(&self) -> usize {
        self.colors
            .iter()
            .filter(|&&c| c != UNCOLORED)
            .max()
            .map_or(0, |&c| c + 1)
    }

    /// Number of color ids actually held by at least one vertex.
    ///
    /// Equals [`ColorAssignment::distinct_colors`] when ids are dense.
    pub fn used_colors(&self) -> usize {
        let mut held: Vec<usize> = self
            .colors
            .iter()
            .copied()
            .filter(|&c| c != UNCOLORED)
            .collect();
        held.sort_unstable();
        held.dedup();
        held.len()
    }

    /// Number of edges whose two endpoints share a color.
    ///
    /// Each stored edge is counted once; self-loops and uncolored endpoints
    /// never collide.
    pub fn collisions(&self, graph: &Graph) -> usize {
        graph
            .edges()
            .iter()
            .filter(|&&(u, v)| {
                u != v && self.colors[u] != UNCOLORED && self.colors[u] == self.colors[v]
            })
            .count()
    }

    /// Whether no neighbor of `v` currently holds `color`.
    pub fn can_color(&self, graph: &Graph, v: usize, color: usize) -> bool {
        graph
            .neighbors(v)
            .iter()
            .all(|&u| u == v || self.colors[u] != color)
    }

    /// Smallest color id not held by any colored neighbor of `v` (first fit).
    pub fn smallest_free_color(&self, graph: &Graph, v: usize) -> usize {
        let neighbors = graph.neighbors(v);
        // A vertex with d neighbors always has a free color in 0..=d.
        let mut forbidden = vec![false; neighbors.len() + 1];
        for &u in neighbors {
            let c = self.colors[u];
            if u != v && c < forbidden.len() {
                forbidden[c] = true;
            }
        }
        forbidden.iter().position(|&f| !f).unwrap_or(neighbors.len())
    }

    /// Whether the assignment is complete and has no collisions.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.is_complete() && self.collisions(graph) == 0
    }
}

impl From<Vec<usize>> for ColorAssignment {
    fn from(colors: Vec<usize>) -> Self {
        Self::from_colors(colors)
    }
}

impl fmt::Display for ColorAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &c) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match c {
                UNCOLORED => write!(f, "-")?,
                c => write!(f, "{c}")?,
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn test_distinct_colors_max_plus_one() {
        let a = ColorAssignment::from_colors(vec![0, 3, 1]);
        assert_eq!(a.distinct_colors(), 4);
        assert_eq!(a.used_colors(), 3);
    }

    #[test]
    fn test_used_colors_sparse_ids() {
        let a = ColorAssignment::from_colors(vec![usize::MAX - 1, 7, usize::MAX - 1, UNCOLORED]);
        assert_eq!(a.used_colors(), 2);
        assert_eq!(a.distinct_colors(), usize::MAX);
    }

    #[test]
    fn test_distinct_colors_uncolored() {
        let mut a = ColorAssignment::uncolored(3);
        assert_eq!(a.distinct_colors(), 0);
        assert!(!a.is_complete());
        a.set(1, 2);
        assert_eq!(a.distinct_colors(), 3);
        assert_eq!(a.get(0), None);
        assert_eq!(a.get(1), Some(2));
    }

    #[test]
    fn test_collisions_counted_once_per_edge() {
        let g = triangle();
        let all_same = ColorAssignment::from_colors(vec![0, 0, 0]);
        assert_eq!(all_same.collisions(&g), 3);
        let one_clash = ColorAssignment::from_colors(vec![0, 0, 1]);
        assert_eq!(one_clash.collisions(&g), 1);
        let proper = ColorAssignment::from_colors(vec![0, 1, 2]);
        assert_eq!(proper.collisions(&g), 0);
        assert!(proper.is_proper(&g));
    }

    #[test]
    fn test_self_loop_never_collides() {
        let g = Graph::from_edges(2, &[(0, 0), (0, 1)]);
        let a = ColorAssignment::from_colors(vec![0, 1]);
        assert_eq!(a.collisions(&g), 0);
        assert!(a.can_color(&g, 0, 0));
    }

    #[test]
    fn test_can_color_and_smallest_free() {
        let g = triangle();
        let mut a = ColorAssignment::uncolored(3);
        a.set(0, 0);
        a.set(1, 1);
        assert!(!a.can_color(&g, 2, 0));
        assert!(a.can_color(&g, 2, 2));
        assert_eq!(a.smallest_free_color(&g, 2), 2);
    }

    #[test]
    fn test_smallest_free_ignores_large_colors() {
        let g = Graph::from_edges(2, &[(0, 1)]);
        let a = ColorAssignment::from_colors(vec![UNCOLORED, 57]);
        assert_eq!(a.smallest_free_color(&g, 0), 0);
    }

    #[test]
    fn test_display() {
        let mut a = ColorAssignment::from_colors(vec![0, 2, 1]);
        a.clear(2);
        assert_eq!(a.to_string(), "[0 2 -]");
    }
}
