// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The driver's error type: wraps its own I/O and argument failures plus
//! the solver's internal-invariant error.

use std::io;

use slither_core::GridError;
use slither_solver::SolverError;
use thiserror::Error;

/// Errors that can abort the CLI driver.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("malformed grid: {0}")]
    Grid(#[from] GridError),

    #[error("internal solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Result alias for the CLI driver.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_) | AppError::Grid(_) => 1,
            AppError::Solver(_) => 2,
        }
    }
}
