// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Picks the next undecided edge to
//! branch on, preferring forced moves.

use crate::graph::{EdgeId, Graph};
use crate::state::{EdgeState, State};

const FORCED_NEIGHBOR: i32 = 10_000;
const NEAR_FORCED_BINARY: i32 = 5_000;
const CELL_FORCED: i32 = 2_000;
const CELL_ONE_LEFT: i32 = 1_500;
const CELL_TWO_LEFT: i32 = 1_000;

/// Scores a single undecided edge by how forced it (or its neighbors) is.
fn score_edge(graph: &Graph, state: &State, e: EdgeId) -> i32 {
    let (u, v) = graph.edge(e).endpoints;
    let mut score = 0i32;

    if state.point_degree(u) == 1 || state.point_degree(v) == 1 {
        score += FORCED_NEIGHBOR;
    }
    if near_forced_binary(state, u) || near_forced_binary(state, v) {
        score += NEAR_FORCED_BINARY;
    }

    let (cell_a, cell_b) = graph.edge(e).cells;
    for c in [cell_a, cell_b].into_iter().flatten() {
        let Some(k) = graph.clue(c) else { continue };
        let on = state.cell_on(c) as i32;
        let und = state.cell_undecided(c) as i32;
        let need = k as i32 - on;
        if need == und || need == 0 {
            score += CELL_FORCED;
        } else if und == 1 {
            score += CELL_ONE_LEFT;
        } else if und <= 2 {
            score += CELL_TWO_LEFT;
        } else {
            score += (100 - (2 * need - und).abs()).max(0);
        }
    }

    score
}

#[inline]
fn near_forced_binary(state: &State, p: usize) -> bool {
    state.point_degree(p) == 0 && state.point_undecided(p) == 2
}

/// Selects the highest-scoring undecided edge, breaking ties by lowest
/// edge index. Returns `None` once every edge is decided.
///
/// Early-exits as soon as a score `>= 10000` is found: that edge is a
/// genuine forced move and no later edge can rank higher in a way that
/// changes the branch outcome.
pub fn select_next_edge(graph: &Graph, state: &State) -> Option<EdgeId> {
    let mut best: Option<(i32, EdgeId)> = None;
    for e in 0..graph.edge_count() {
        if state.edge(e) != EdgeState::Undecided {
            continue;
        }
        let score = score_edge(graph, state, e);
        if score >= FORCED_NEIGHBOR {
            return Some(e);
        }
        best = match best {
            Some((best_score, _)) if best_score >= score => best,
            _ => Some((score, e)),
        };
    }
    best.map(|(_, e)| e)
}
