// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Atomically records ON/OFF for one edge, updating every derived counter.

use crate::error::Contradiction;
use crate::graph::{EdgeId, Graph};
use crate::state::{Decision, EdgeState, State};

/// Applies `value` to edge `e`, updating every derived counter.
///
/// - No-op success if `e` already holds `value`.
/// - `Err(Contradiction)` if `e` is already decided to the opposite value,
///   or if applying `value` would push a point's degree above 2 or a
///   clued cell's on-count above its clue.
///
/// Partial mutation on failure is acceptable: callers always operate on a
/// cloned [`State`] and discard it on failure.
pub fn apply_decision(
    graph: &Graph,
    state: &mut State,
    e: EdgeId,
    value: Decision,
) -> Result<(), Contradiction> {
    let new_state = EdgeState::from(value);
    match state.edge_state[e] {
        s if s == new_state => return Ok(()),
        EdgeState::Undecided => {}
        _ => return Err(Contradiction),
    }

    state.edge_state[e] = new_state;
    let (u, v) = graph.edge(e).endpoints;
    state.point_undecided[u] -= 1;
    state.point_undecided[v] -= 1;
    let (cell_a, cell_b) = graph.edge(e).cells;
    if let Some(c) = cell_a {
        state.cell_undecided[c] -= 1;
    }
    if let Some(c) = cell_b {
        state.cell_undecided[c] -= 1;
    }

    if value == Decision::On {
        state.point_degree[u] += 1;
        state.point_degree[v] += 1;
        if state.point_degree[u] > 2 || state.point_degree[v] > 2 {
            return Err(Contradiction);
        }
        for c in [cell_a, cell_b].into_iter().flatten() {
            if let Some(clue) = graph.clue(c) {
                state.cell_on[c] += 1;
                if state.cell_on[c] > clue {
                    return Err(Contradiction);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use slither_core::Grid;

    #[test]
    fn no_op_on_matching_repeat() {
        let grid = Grid::new(2, 2);
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        apply_decision(&graph, &mut state, 0, Decision::On).unwrap();
        let before = state.clone();
        apply_decision(&graph, &mut state, 0, Decision::On).unwrap();
        assert_eq!(before.edge(0), state.edge(0));
    }

    #[test]
    fn conflicting_decision_is_contradiction() {
        let grid = Grid::new(2, 2);
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        apply_decision(&graph, &mut state, 0, Decision::On).unwrap();
        assert!(apply_decision(&graph, &mut state, 0, Decision::Off).is_err());
    }

    #[test]
    fn degree_overflow_is_contradiction() {
        let grid = Grid::new(2, 2);
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        let p = graph.point_id(1, 1);
        let edges: Vec<_> = graph.edges_of_point(p).to_vec();
        assert_eq!(edges.len(), 4);
        apply_decision(&graph, &mut state, edges[0], Decision::On).unwrap();
        apply_decision(&graph, &mut state, edges[1], Decision::On).unwrap();
        assert!(apply_decision(&graph, &mut state, edges[2], Decision::On).is_err());
    }

    #[test]
    fn clue_overflow_is_contradiction() {
        let grid: Grid = "1 1\n0\n".parse().unwrap();
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        let edges = *graph.edges_of_cell(0);
        assert!(apply_decision(&graph, &mut state, edges[0], Decision::On).is_err());
    }
}
