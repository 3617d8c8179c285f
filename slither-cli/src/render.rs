// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Solution output: a grid rendering plus a cycle trace.

use std::fmt::Write as _;

use slither_core::Grid;
use slither_solver::state::EdgeState;
use slither_solver::{Graph, Solution};

/// Renders the grid as alternating `+`/edge-state lines.
pub fn render_grid(grid: &Grid, graph: &Graph, solution: &Solution) -> String {
    let mut out = String::new();
    let rows = graph.rows();
    let cols = graph.cols();

    for r in 0..=rows {
        out.push('+');
        for c in 0..cols {
            let e = graph.h_edge_at(r, c);
            out.push(match solution.edge_state[e] {
                EdgeState::On => '-',
                _ => ' ',
            });
            out.push('+');
        }
        out.push('\n');

        if r < rows {
            for c in 0..cols {
                let e = graph.v_edge_at(r, c);
                out.push(match solution.edge_state[e] {
                    EdgeState::On => '|',
                    _ => ' ',
                });
                match grid.clue(r, c) {
                    Some(k) => {
                        let _ = write!(out, "{k}");
                    }
                    None => out.push(' '),
                }
            }
            let e = graph.v_edge_at(r, cols);
            out.push(match solution.edge_state[e] {
                EdgeState::On => '|',
                _ => ' ',
            });
            out.push('\n');
        }
    }

    out
}

/// Renders the ordered cycle trace, `(r,c) -> (r,c) -> ... -> (r,c)`,
/// with the start point repeated at the end.
pub fn render_cycle(solution: &Solution) -> String {
    solution
        .cycle
        .iter()
        .map(|&(r, c)| format!("({r},{c})"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_solver::{build_graph, solve_first, Flags};

    #[test]
    fn scenario_a_renders_a_closed_frame() {
        let grid: Grid = "2 2\n3 .\n. 3\n".parse().unwrap();
        let graph = build_graph(&grid);
        let solution = solve_first(&graph, Flags::default())
            .unwrap()
            .expect("scenario A has a solution");

        let rendering = render_grid(&grid, &graph, &solution);
        assert_eq!(rendering.lines().count(), 5);
        assert!(rendering.lines().all(|l| !l.is_empty()));

        let trace = render_cycle(&solution);
        let first = solution.cycle.first().unwrap();
        assert!(trace.starts_with(&format!("({},{})", first.0, first.1)));
        assert!(trace.ends_with(&format!("({},{})", first.0, first.1)));
    }
}
