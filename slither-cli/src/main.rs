// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Command-line driver: parses arguments, solves the puzzle, prints the
//! result, and maps failures to a process exit code.

use std::process;

use clap::Parser;

use crate::error::AppResult;

mod cli;
mod error;
mod render;
mod solve;

fn run() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    solve::run(&cli)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("slither: {e}");
        process::exit(e.exit_code());
    }
}
