// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Worklist fixpoint over clued cells
//! and lattice points.

use std::collections::VecDeque;

use tracing::trace;

use crate::decision::apply_decision;
use crate::error::Contradiction;
use crate::graph::{CellId, Graph, PointId};
use crate::state::{Decision, EdgeState, State};

/// A FIFO queue that tracks membership with a byte-per-element flag, so
/// pushing an already-queued element is a no-op.
struct Worklist {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl Worklist {
    fn seeded(len: usize) -> Worklist {
        Worklist {
            queue: (0..len).collect(),
            queued: vec![true; len],
        }
    }

    fn push(&mut self, id: usize) {
        if !self.queued[id] {
            self.queued[id] = true;
            self.queue.push_back(id);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let id = self.queue.pop_front()?;
        self.queued[id] = false;
        Some(id)
    }
}

/// Runs the propagation fixpoint to quiescence, or fails on the first
/// derived contradiction.
///
/// Runs until both worklists drain; each application of a rule either
/// decides an edge or removes work from the list, so termination is
/// bounded by `O(edges)`.
pub fn propagate(graph: &Graph, state: &mut State) -> Result<(), Contradiction> {
    let mut cells = Worklist::seeded(graph.cell_count());
    let mut points = Worklist::seeded(graph.point_count());

    loop {
        let mut progressed = false;
        while let Some(c) = cells.pop() {
            progressed = true;
            propagate_cell(graph, state, c, &mut cells, &mut points)?;
        }
        while let Some(p) = points.pop() {
            progressed = true;
            propagate_point(graph, state, p, &mut cells, &mut points)?;
        }
        if !progressed {
            break;
        }
    }
    Ok(())
}

fn propagate_cell(
    graph: &Graph,
    state: &mut State,
    c: CellId,
    cells: &mut Worklist,
    points: &mut Worklist,
) -> Result<(), Contradiction> {
    let Some(k) = graph.clue(c) else {
        return Ok(());
    };
    let on = state.cell_on(c);
    let und = state.cell_undecided(c);

    if on > k || on + und < k {
        trace!(cell = c, clue = k, on, undecided = und, "cell count contradiction");
        return Err(Contradiction);
    }

    let force = if on + und == k && und > 0 {
        Some(Decision::On)
    } else if on == k && und > 0 {
        Some(Decision::Off)
    } else {
        None
    };

    let Some(decision) = force else {
        return Ok(());
    };

    for &e in graph.edges_of_cell(c) {
        if state.edge(e) != EdgeState::Undecided {
            continue;
        }
        apply_decision(graph, state, e, decision).inspect_err(|_| {
            trace!(cell = c, edge = e, ?decision, "forced decision contradicts");
        })?;
        let (u, v) = graph.edge(e).endpoints;
        points.push(u);
        points.push(v);
        let (cell_a, cell_b) = graph.edge(e).cells;
        for other in [cell_a, cell_b].into_iter().flatten() {
            if graph.clue(other).is_some() {
                cells.push(other);
            }
        }
    }
    Ok(())
}

fn propagate_point(
    graph: &Graph,
    state: &mut State,
    p: PointId,
    cells: &mut Worklist,
    points: &mut Worklist,
) -> Result<(), Contradiction> {
    let deg = state.point_degree(p);
    let und = state.point_undecided(p);

    if deg >= 2 {
        if und == 0 {
            return Ok(());
        }
    } else if deg == 0 && und == 0 {
        return Ok(());
    }

    let decision = if deg == 1 && und == 1 {
        Decision::On
    } else if deg >= 2 && und > 0 {
        Decision::Off
    } else {
        return Ok(());
    };

    for &e in graph.edges_of_point(p) {
        if state.edge(e) != EdgeState::Undecided {
            continue;
        }
        apply_decision(graph, state, e, decision).inspect_err(|_| {
            trace!(point = p, edge = e, ?decision, "forced decision contradicts");
        })?;
        let (u, v) = graph.edge(e).endpoints;
        let other = if u == p { v } else { u };
        points.push(other);
        let (cell_a, cell_b) = graph.edge(e).cells;
        for c in [cell_a, cell_b].into_iter().flatten() {
            if graph.clue(c).is_some() {
                cells.push(c);
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
    fn zero_clue_forces_all_four_edges_off() {
        let grid: Grid = "1 1\n0\n".parse().unwrap();
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        propagate(&graph, &mut state).unwrap();
        for &e in graph.edges_of_cell(0) {
            assert_eq!(state.edge(e), EdgeState::Off);
        }
    }

    #[test]
    fn scenario_b_contradicts_during_propagation() {
        let grid: Grid = "2 2\n0 3\n. .\n".parse().unwrap();
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        assert!(propagate(&graph, &mut state).is_err());
    }

    #[test]
    fn idempotent_once_it_succeeds() {
        let grid: Grid = "4 4\n3 . . .\n. . 2 .\n. 2 . .\n. . . 3\n"
            .parse()
            .unwrap();
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        propagate(&graph, &mut state).unwrap();
        let snapshot = state.clone();
        propagate(&graph, &mut state).unwrap();
        assert_eq!(snapshot.edge_state, state.edge_state);
    }

    #[test]
    fn scenario_f_2x2_all_twos_has_no_solution_after_propagation() {
        let grid: Grid = "2 2\n2 2\n2 2\n".parse().unwrap();
        let graph = build_graph(&grid);
        let mut state = State::new(&graph);
        // Propagation alone need not fail immediately, but the search
        // (see search.rs tests) must terminate with no solution.
        let _ = propagate(&graph, &mut state);
    }
}
