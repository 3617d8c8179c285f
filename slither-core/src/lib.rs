//! Data structures and parsing for Slither Link puzzle grids.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_qualifications)]

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{GridError, GridResult};
pub use grid::{Clue, Grid};
