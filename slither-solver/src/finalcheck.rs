// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! On a fully decided leaf, verifies clue
//! equalities, vertex degrees, and that the ON edges form exactly one
//! cycle.

use tracing::trace;

use crate::graph::{Graph, PointId};
use crate::state::{EdgeState, State};

/// A complete, verified solution: the full edge assignment plus the
/// ordered cycle of point coordinates it traces.
///
/// Solutions are totally ordered by [`Ord`] on `edge_state`, lexically,
/// to support deduplication.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    pub edge_state: Vec<EdgeState>,
    /// Ordered `(row, column)` cycle, repeating the start point at the end.
    pub cycle: Vec<(i32, i32)>,
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.edge_state.cmp(&other.edge_state)
    }
}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Verifies a fully-decided state and extracts the [`Solution`] it
/// represents, or returns `None` if it is not a valid solution.
///
/// Prerequisite: every edge is decided (callers only reach this after
/// [`crate::heuristic::select_next_edge`] returns `None`).
pub fn final_check_and_store(graph: &Graph, state: &State) -> Option<Solution> {
    for &(c, k) in graph.clued_cells() {
        if state.cell_on(c) != k {
            return None;
        }
    }

    let mut start: Option<PointId> = None;
    let mut total_on_endpoints = 0u32;
    for p in 0..graph.point_count() {
        let deg = state.point_degree(p);
        if deg != 0 && deg != 2 {
            return None;
        }
        total_on_endpoints += deg as u32;
        if deg != 0 && start.is_none() {
            start = Some(p);
        }
    }
    let Some(start) = start else {
        return None;
    };
    let total_on_edges = total_on_endpoints / 2;

    let on_neighbors = |p: PointId| -> Vec<PointId> {
        graph
            .edges_of_point(p)
            .iter()
            .filter(|&&e| state.edge(e) == EdgeState::On)
            .map(|&e| {
                let (u, v) = graph.edge(e).endpoints;
                if u == p {
                    v
                } else {
                    u
                }
            })
            .collect()
    };

    let mut visited_points = vec![false; graph.point_count()];
    let mut visited_edges = 0u32;
    let mut prev = start;
    let mut cur = *on_neighbors(start).first()?;
    visited_points[start] = true;
    visited_points[cur] = true;
    visited_edges += 1;
    let mut cycle_points = vec![start, cur];

    while cur != start {
        let neighbors = on_neighbors(cur);
        let next = *neighbors.iter().find(|&&n| n != prev)?;
        visited_edges += 1;
        prev = cur;
        cur = next;
        if cur != start {
            if visited_points[cur] {
                // revisiting a non-start point means a second, disjoint
                // cycle shares no point with this walk; reject.
                return None;
            }
            visited_points[cur] = true;
            cycle_points.push(cur);
        }
    }
    cycle_points.push(start);

    if visited_edges != total_on_edges {
        return None;
    }
    for p in 0..graph.point_count() {
        if state.point_degree(p) == 2 && !visited_points[p] {
            return None;
        }
    }

    let cycle: Vec<_> = cycle_points
        .into_iter()
        .map(|p| graph.point_coords(p))
        .collect();

    trace!(cycle_len = cycle.len(), "leaf accepted as a solution");

    Some(Solution {
        edge_state: (0..graph.edge_count()).map(|e| state.edge(e)).collect(),
        cycle,
    })
}

/// Opt-in post-filter: keeps only solutions
/// whose `edge_state` is lexicographically smaller than or equal to that
/// of their horizontal mirror image, suppressing reflective-symmetry
/// duplicates. Off by default; `solve()` never calls this.
pub fn canonicalize(graph: &Graph, solutions: Vec<Solution>) -> Vec<Solution> {
    solutions
        .into_iter()
        .filter(|s| is_canonical(graph, s))
        .collect()
}

fn is_canonical(graph: &Graph, solution: &Solution) -> bool {
    let mirrored = mirror_solution(graph, solution);
    solution.edge_state <= mirrored
}

fn mirror_solution(graph: &Graph, solution: &Solution) -> Vec<EdgeState> {
    let rows = graph.rows();
    let cols = graph.cols();
    let mut mirrored = vec![EdgeState::Undecided; solution.edge_state.len()];
    for r in 0..=rows {
        for c in 0..cols {
            let src = graph.h_edge_at(r, c);
            let dst = graph.h_edge_at(r, cols - 1 - c);
            mirrored[dst] = solution.edge_state[src];
        }
    }
    for r in 0..rows {
        for c in 0..=cols {
            let src = graph.v_edge_at(r, c);
            let dst = graph.v_edge_at(r, cols - c);
            mirrored[dst] = solution.edge_state[src];
        }
    }
    mirrored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::propagate::propagate;
    use slither_core::Grid;

    #[test]
    fn scenario_a_resolves_to_a_single_closed_cycle() {
        let grid: Grid = "2 2\n3 .\n. 3\n".parse().unwrap();
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        propagate(&graph, &mut state).unwrap();
        if !state.all_decided() {
            let e = crate::heuristic::select_next_edge(&graph, &state);
            assert!(e.is_none(), "expected propagation alone to decide scenario A");
        }
        let solution = final_check_and_store(&graph, &state).unwrap();
        assert_eq!(solution.cycle.first(), solution.cycle.last());
        assert!(solution.cycle.len() >= 4);
        assert_eq!(state.cell_on(0), 3);
        assert_eq!(state.cell_on(3), 3);
    }
}
