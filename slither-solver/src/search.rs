// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Recursive two-way DFS with task-parallel
//! spawn at shallow depth and cooperative cancellation.

use crate::decision::apply_decision;
use crate::finalcheck::final_check_and_store;
use crate::graph::Graph;
use crate::heuristic::select_next_edge;
use crate::propagate::propagate;
use crate::sink::SolutionSink;
use crate::state::{Decision, EdgeState, State};
use crate::validate::quick_validity_check;

/// Minimum remaining undecided edges before a branch is worth spawning
/// as an independent task.
const MIN_PARALLEL_SUBTREE: usize = 10;

/// Adaptive parallel-spawn depth threshold.
///
/// `permissive` widens the table's upper bound for puzzles over 100
/// cells, as the table allows ("optionally up to ...").
pub fn adaptive_parallel_depth(total_cells: i32, density: f64, permissive: bool) -> u32 {
    let base = match total_cells {
        n if n <= 25 => 8,
        n if n <= 49 => 12,
        n if n <= 64 => 14,
        n if n <= 100 => {
            if permissive {
                32
            } else {
                20
            }
        }
        n if n <= 144 => {
            if permissive {
                34
            } else {
                22
            }
        }
        n if n <= 225 => {
            if permissive {
                36
            } else {
                24
            }
        }
        _ => {
            if permissive {
                38
            } else {
                26
            }
        }
    };
    let bumped = if density < 0.3 { base + 6 } else { base };
    bumped.clamp(10, 45)
}

fn undecided_edge_count(state: &State) -> usize {
    state
        .edge_state
        .iter()
        .filter(|&&s| s == EdgeState::Undecided)
        .count()
}

/// Tries to commit `decision` on `edge` starting from a clone of `state`.
/// Returns `None` if the decision or the quick validity check that
/// follows it fails.
fn try_branch(graph: &Graph, state: &State, edge: usize, decision: Decision) -> Option<State> {
    let mut next = state.clone();
    apply_decision(graph, &mut next, edge, decision).ok()?;
    if !quick_validity_check(graph, &next) {
        return None;
    }
    Some(next)
}

/// Runs the recursive search starting from `state` at the given `depth`,
/// pushing any solution found to `sink`.
pub fn search(graph: &Graph, sink: &SolutionSink, parallel_depth: u32, depth: u32, mut state: State) {
    if !sink.should_continue() {
        return;
    }
    if !quick_validity_check(graph, &state) {
        return;
    }
    if propagate(graph, &mut state).is_err() {
        return;
    }
    if !sink.should_continue() {
        return;
    }

    let Some(edge) = select_next_edge(graph, &state) else {
        if let Some(solution) = final_check_and_store(graph, &state) {
            sink.push(solution);
        }
        return;
    };

    let (u, v) = graph.edge(edge).endpoints;
    let can_off = !((state.point_degree(u) == 1 && state.point_undecided(u) == 1)
        || (state.point_degree(v) == 1 && state.point_undecided(v) == 1));
    let can_on = state.point_degree(u) < 2 && state.point_degree(v) < 2;

    let off_branch = if can_off {
        try_branch(graph, &state, edge, Decision::Off)
    } else {
        None
    };
    let on_branch = if can_on {
        try_branch(graph, &state, edge, Decision::On)
    } else {
        None
    };

    match (off_branch, on_branch) {
        (Some(off_state), Some(on_state)) => {
            let should_spawn = depth < parallel_depth
                && undecided_edge_count(&state) > MIN_PARALLEL_SUBTREE;
            if should_spawn {
                rayon::join(
                    || search(graph, sink, parallel_depth, depth + 1, off_state),
                    || search(graph, sink, parallel_depth, depth + 1, on_state),
                );
            } else {
                search(graph, sink, parallel_depth, depth + 1, off_state);
                if sink.should_continue() {
                    search(graph, sink, parallel_depth, depth + 1, on_state);
                }
            }
        }
        (Some(off_state), None) => search(graph, sink, parallel_depth, depth + 1, off_state),
        (None, Some(on_state)) => search(graph, sink, parallel_depth, depth + 1, on_state),
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_table_matches_known_points() {
        assert_eq!(adaptive_parallel_depth(25, 0.5, false), 10);
        assert_eq!(adaptive_parallel_depth(49, 0.5, false), 12);
        assert_eq!(adaptive_parallel_depth(64, 0.5, false), 14);
        assert_eq!(adaptive_parallel_depth(100, 0.5, false), 20);
        assert_eq!(adaptive_parallel_depth(226, 0.5, false), 26);
    }

    #[test]
    fn low_density_bumps_depth_by_six_and_clamps() {
        assert_eq!(adaptive_parallel_depth(25, 0.1, false), 14);
        assert_eq!(adaptive_parallel_depth(1000, 0.1, true), 44);
    }

    #[test]
    fn depth_is_always_in_bounds() {
        for cells in [1, 25, 49, 64, 100, 144, 225, 1000] {
            for density in [0.0, 0.1, 0.29, 0.3, 0.5, 1.0] {
                for permissive in [false, true] {
                    let d = adaptive_parallel_depth(cells, density, permissive);
                    assert!((10..=45).contains(&d));
                }
            }
        }
    }
}
