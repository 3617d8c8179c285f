// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Reads a grid, runs the solver, and prints the result.

use std::fs;
use std::io::{self, Read};

use slither_core::Grid;
use slither_solver::{build_graph, solve_all, solve_first};
use tracing::info;

use crate::cli::Cli;
use crate::error::AppResult;
use crate::render::{render_cycle, render_grid};

/// Runs the driver end to end: read input, parse, solve, print.
pub fn run(cli: &Cli) -> AppResult<()> {
    let text = read_input(cli.input.as_deref())?;
    let grid: Grid = text.parse()?;
    let graph = build_graph(&grid);
    let flags = cli.to_flags();

    if cli.find_all_solutions {
        let solutions = solve_all(&graph, flags)?;
        info!(count = solutions.len(), "search complete");
        if solutions.is_empty() {
            println!("no solution");
        }
        for (i, solution) in solutions.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_solution(&grid, &graph, solution, cli.raw);
        }
    } else {
        match solve_first(&graph, flags)? {
            Some(solution) => print_solution(&grid, &graph, &solution, cli.raw),
            None => println!("no solution"),
        }
    }

    Ok(())
}

fn print_solution(
    grid: &Grid,
    graph: &slither_solver::Graph,
    solution: &slither_solver::Solution,
    raw: bool,
) {
    if raw {
        print!("{}", render_grid(grid, graph, solution));
    } else {
        println!("{}", render_cycle(solution));
    }
}

fn read_input(path: Option<&str>) -> AppResult<String> {
    let mut buf = String::new();
    match path {
        Some(path) => {
            buf = fs::read_to_string(path)?;
        }
        None => {
            io::stdin().read_to_string(&mut buf)?;
        }
    }
    Ok(buf)
}
