//! Cluster recompaction.

use crate::coloring::{ColorAssignment, UNCOLORED};
use crate::graph::Graph;

/// Recolors the connected component of `start` and returns the trial.
///
/// The component's current colors form a sorted palette. Members are
/// cleared, then recolored in depth-first preorder with the first palette
/// color no neighbor holds. A member for which no palette color fits gets
/// its smallest free color instead, so the trial never gains collisions
/// inside the component.
///
/// `assignment` is left untouched.
pub fn recompact_cluster(
    graph: &Graph,
    assignment: &ColorAssignment,
    start: usize,
) -> ColorAssignment {
    let members = graph.component(start);

    let mut palette: Vec<usize> = members
        .iter()
        .map(|&v| assignment.raw(v))
        .filter(|&c| c != UNCOLORED)
        .collect();
    palette.sort_unstable();
    palette.dedup();

    let mut trial = assignment.clone();
    for &v in &members {
        trial.clear(v);
    }

    // stamp[k] == i + 1 marks palette[k] as held by a neighbor of the i-th
    // member. Indexed by palette position, not by color id.
    let mut stamp = vec![0usize; palette.len()];
    for (i, &v) in members.iter().enumerate() {
        let mark = i + 1;
        for &u in graph.neighbors(v) {
            if u == v {
                continue;
            }
            if let Ok(k) = palette.binary_search(&trial.raw(u)) {
                stamp[k] = mark;
            }
        }
        let color = stamp
            .iter()
            .position(|&s| s != mark)
            .map(|k| palette[k])
            .unwrap_or_else(|| trial.smallest_free_color(graph, v));
        trial.set(v, color);
    }

    trial
}
