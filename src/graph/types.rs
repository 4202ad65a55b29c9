//! Arena-indexed adjacency structure.

use crate::error::{ColoringError, Result};

/// Undirected graph over vertices `0..n`.
///
/// Adjacency lists keep insertion order. Adding the same edge twice stores
/// it twice; a self-loop `(u, u)` is stored but ignored by every coloring
/// rule. Edges with an endpoint outside `[0, n)` are silently dropped.
///
/// # Examples
///
/// ```
/// use u_graphcolor::graph::Graph;
///
/// // 4-cycle plus one out-of-range edge that is ignored.
/// let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 9)]);
/// assert_eq!(g.edge_count(), 4);
/// assert_eq!(g.degree(0), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    n: usize,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates a graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from an edge list, dropping out-of-range edges.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds the undirected edge `(u, v)`.
    ///
    /// Returns `false` (and stores nothing) if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u >= self.n || v >= self.n {
            log::trace!("dropping edge ({u}, {v}): graph has {} vertices", self.n);
            return false;
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edges.push((u, v));
        true
    }

    /// Number of vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of stored edges (duplicates and self-loops included).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Stored edges in insertion order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Neighbors of `v` in insertion order.
    ///
    /// # Panics
    /// Panics if `v >= n`. Use [`Graph::try_neighbors`] for a checked lookup.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Checked variant of [`Graph::neighbors`].
    pub fn try_neighbors(&self, v: usize) -> Result<&[usize]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or(ColoringError::VertexOutOfRange { vertex: v, n: self.n })
    }

    /// Length of the adjacency list of `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Largest degree over all vertices (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Vertices ordered by non-increasing degree, ties by ascending id.
    pub fn degree_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.n).collect();
        // Stable sort keeps equal-degree vertices in id order.
        order.sort_by(|&a, &b| self.degree(b).cmp(&self.degree(a)));
        order
    }

    /// Connected component containing `start`, in depth-first preorder.
    ///
    /// Uses an explicit stack of `(vertex, next neighbor index)` frames, which
    /// visits vertices in the same order as a recursive traversal would.
    pub fn component(&self, start: usize) -> Vec<usize> {
        let mut visited = vec![false; self.n];
        let mut order = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new();

        visited[start] = true;
        order.push(start);
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            match self.adjacency[v].get(next) {
                Some(&u) => {
                    frame.1 += 1;
                    if !visited[u] {
                        visited[u] = true;
                        order.push(u);
                        stack.push((u, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
        Graph::from_edges(n, &edges)
    }

    #[test]
    fn test_adjacency_symmetric() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert_eq!(g.neighbors(2), &[1]);
    }

    #[test]
    fn test_out_of_range_edges_dropped() {
        let mut g = Graph::new(3);
        assert!(!g.add_edge(0, 3));
        assert!(!g.add_edge(5, 1));
        assert!(g.add_edge(0, 2));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(1), 0);
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let g = Graph::from_edges(2, &[(0, 1), (0, 1)]);
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_try_neighbors_out_of_range() {
        let g = Graph::new(2);
        assert_eq!(
            g.try_neighbors(4),
            Err(ColoringError::VertexOutOfRange { vertex: 4, n: 2 })
        );
    }

    #[test]
    fn test_degree_order_ties_by_id() {
        // Star centered at 2, plus edge 3-4.
        let g = Graph::from_edges(5, &[(2, 0), (2, 1), (2, 3), (3, 4)]);
        assert_eq!(g.degree_order(), vec![2, 3, 0, 1, 4]);
    }

    #[test]
    fn test_component_preorder_matches_recursive_dfs() {
        // 0 -> 1 -> 3, back to 0 -> 2
        let g = Graph::from_edges(5, &[(0, 1), (0, 2), (1, 3)]);
        assert_eq!(g.component(0), vec![0, 1, 3, 2]);
        assert_eq!(g.component(4), vec![4]);
    }

    #[test]
    fn test_component_deep_path_no_recursion() {
        let g = path(100_000);
        let comp = g.component(0);
        assert_eq!(comp.len(), 100_000);
        assert_eq!(comp[99_999], 99_999);
    }

    #[test]
    fn test_component_disconnected() {
        let g = Graph::from_edges(6, &[(0, 1), (2, 3), (3, 4)]);
        let mut comp = g.component(4);
        comp.sort_unstable();
        assert_eq!(comp, vec![2, 3, 4]);
    }
}
