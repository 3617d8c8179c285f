// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! A cheap, propagation-independent
//! consistency check, O(points + clues).

use crate::graph::Graph;
use crate::state::State;

/// Returns `true` iff every point's degree is within bounds and every
/// clued cell can still reach its clue.
///
/// Intended to be called between [`crate::decision::apply_decision`] and
/// [`crate::propagate::propagate`], and again afterwards.
pub fn quick_validity_check(graph: &Graph, state: &State) -> bool {
    for p in 0..graph.point_count() {
        let deg = state.point_degree(p);
        let und = state.point_undecided(p);
        if deg > 2 {
            return false;
        }
        if deg == 1 && und == 0 {
            return false;
        }
    }
    for &(c, k) in graph.clued_cells() {
        let on = state.cell_on(c);
        let und = state.cell_undecided(c);
        if on > k || on + und < k {
            return false;
        }
    }
    true
}
