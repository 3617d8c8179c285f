// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Driver argument parsing.

use clap::Parser;
use slither_solver::Flags;

/// Solves a Slither Link puzzle read from a file.
#[derive(Parser, Debug)]
#[command(name = "slither", version, about)]
pub struct Cli {
    /// Path to the puzzle file. Reads stdin if omitted.
    pub input: Option<String>,

    /// Enumerate every solution instead of stopping at the first.
    #[arg(long = "find-all-solutions")]
    pub find_all_solutions: bool,

    /// Number of worker threads to use.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Fraction of available CPU parallelism to use, in `(0, 1]`.
    /// Ignored if `--workers` is set.
    #[arg(long = "cpu-fraction")]
    pub cpu_fraction: Option<f64>,

    /// Print the raw `+`/`-`/`|` grid instead of the cycle trace.
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    pub fn to_flags(&self) -> Flags {
        Flags {
            find_all: self.find_all_solutions,
            workers: self.workers,
            cpu_fraction: self.cpu_fraction,
            permissive_depth: false,
        }
    }
}
