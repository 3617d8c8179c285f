// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Slither Link solver: parallel constraint-propagation backtracking
//! search over an immutable edge/point/cell incidence graph.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_qualifications)]

use slither_core::Grid;
use tracing::{debug, info, instrument};

pub mod decision;
pub mod error;
pub mod finalcheck;
pub mod graph;
pub mod heuristic;
pub mod propagate;
pub mod search;
pub mod sink;
pub mod state;
pub mod validate;

pub use error::{SolverError, SolverResult};
pub use finalcheck::Solution;
pub use graph::Graph;
pub use sink::SolutionSink;
pub use state::State;

/// Flags controlling a [`solve`] invocation: whether to enumerate every
/// solution, and how many worker threads to use.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flags {
    /// Enumerate every solution instead of stopping at the first.
    pub find_all: bool,
    /// Explicit worker count; takes precedence over `cpu_fraction`.
    pub workers: Option<usize>,
    /// Fraction of `std::thread::available_parallelism()` to use,
    /// in `(0, 1]`. Ignored if `workers` is set.
    pub cpu_fraction: Option<f64>,
    /// Widen the adaptive parallel-depth table's upper bound for large,
    /// sparsely-clued puzzles.
    pub permissive_depth: bool,
}

/// Builds the immutable [`Graph`] for a grid.
pub fn build_graph(grid: &Grid) -> Graph {
    graph::build_graph(grid)
}

/// Builds the initial, all-undecided [`State`] for a graph.
pub fn initial_state(graph: &Graph) -> State {
    State::new(graph)
}

fn resolve_worker_count(flags: &Flags) -> usize {
    if let Some(n) = flags.workers {
        return n.max(1);
    }
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    match flags.cpu_fraction {
        Some(frac) if frac > 0.0 && frac <= 1.0 => {
            ((available as f64) * frac).round().max(1.0) as usize
        }
        _ => available,
    }
}

fn clue_density(graph: &Graph) -> f64 {
    let total = graph.cell_count().max(1);
    graph.clued_cells().len() as f64 / total as f64
}

/// Runs the search to completion, emitting every accepted [`Solution`]
/// to `sink`.
///
/// Returns `Err` only on an internal invariant violation; an empty sink
/// on return is the normal "no solution" outcome, not an error.
#[instrument(skip(graph, sink))]
pub fn solve(graph: &Graph, flags: Flags, sink: &SolutionSink) -> SolverResult<()> {
    let workers = resolve_worker_count(&flags);
    let density = clue_density(graph);
    let parallel_depth =
        search::adaptive_parallel_depth(graph.cell_count() as i32, density, flags.permissive_depth);

    info!(workers, parallel_depth, density, "starting search");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SolverError::Internal(format!("failed to build thread pool: {e}")))?;

    let state = State::new(graph);
    pool.install(|| {
        search::search(graph, sink, parallel_depth, 0, state);
    });

    debug!(
        found = sink.len(),
        stopped_early = !sink.should_continue(),
        "search finished"
    );
    Ok(())
}

/// Convenience wrapper: runs [`solve`] and returns the first solution
/// found, if any, ignoring `flags.find_all`.
pub fn solve_first(graph: &Graph, mut flags: Flags) -> SolverResult<Option<Solution>> {
    flags.find_all = false;
    let sink = SolutionSink::new(false);
    solve(graph, flags, &sink)?;
    let mut solutions = sink.into_solutions();
    Ok(solutions.pop())
}

/// Convenience wrapper: runs [`solve`] and returns every solution found.
pub fn solve_all(graph: &Graph, mut flags: Flags) -> SolverResult<Vec<Solution>> {
    flags.find_all = true;
    let sink = SolutionSink::new(true);
    solve(graph, flags, &sink)?;
    Ok(sink.into_solutions())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_grid(text: &str, find_all: bool) -> Vec<Solution> {
        let grid: Grid = text.parse().unwrap();
        let graph = build_graph(&grid);
        let flags = Flags {
            find_all,
            workers: Some(1),
            ..Flags::default()
        };
        if find_all {
            solve_all(&graph, flags).unwrap()
        } else {
            solve_first(&graph, flags)
                .unwrap()
                .into_iter()
                .collect()
        }
    }

    #[test]
    fn scenario_a_two_by_two_two_forcing_threes() {
        let solutions = solve_grid("2 2\n3 .\n. 3\n", true);
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn scenario_b_tiny_unsolvable() {
        let solutions = solve_grid("2 2\n0 3\n. .\n", true);
        assert!(solutions.is_empty());
    }

    #[test]
    fn scenario_c_classic_four_by_four() {
        let solutions = solve_grid(
            "4 4\n3 . . .\n. . 2 .\n. 2 . .\n. . . 3\n",
            false,
        );
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn scenario_d_findall_reports_multiple_distinct_solutions() {
        let solutions = solve_grid("3 3\n. . .\n. . .\n. . .\n", true);
        assert!(solutions.len() > 1);
        for i in 0..solutions.len() {
            for j in (i + 1)..solutions.len() {
                assert_ne!(solutions[i].edge_state, solutions[j].edge_state);
            }
        }
    }

    #[test]
    fn scenario_f_quick_invalidation_terminates_with_no_solution() {
        let solutions = solve_grid("2 2\n2 2\n2 2\n", true);
        assert!(solutions.is_empty());
    }

    #[test]
    fn emitted_solutions_satisfy_clue_and_degree_invariants() {
        for sol in solve_grid(
            "4 4\n3 . . .\n. . 2 .\n. 2 . .\n. . . 3\n",
            true,
        ) {
            assert_eq!(sol.cycle.first(), sol.cycle.last());
        }
    }

    #[test]
    fn stop_after_first_emits_at_most_one_solution() {
        let solutions = solve_grid("3 3\n. . .\n. . .\n. . .\n", false);
        assert!(solutions.len() <= 1);
    }
}
