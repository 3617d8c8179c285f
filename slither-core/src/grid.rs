// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Slither Link puzzle grid: a rectangle of cells, some bearing a clue.

use std::str::FromStr;

use crate::error::{GridError, GridResult};
use crate::geom::{Geom, Point, Size};

/// A clue attached to a cell: `None` (no clue) or a digit in `0..=3`.
pub type Clue = Option<u8>;

/// An immutable Slither Link puzzle: `rows x cols` cells, each optionally
/// carrying a clue in `{0, 1, 2, 3}`.
///
/// Cell index is `r * cols + c`, matching the data model in the solver's
/// graph builder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    size: Size,
    clues: Vec<Clue>,
}

impl Grid {
    /// Creates a grid of the given size with no clues set.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is not positive.
    pub fn new(rows: i32, cols: i32) -> Grid {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Grid {
            size: Size(rows, cols),
            clues: vec![None; (rows * cols) as usize],
        }
    }

    /// Builds a grid from its size and a row-major clue vector.
    pub fn with_clues(rows: i32, cols: i32, clues: Vec<Clue>) -> GridResult<Grid> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::NonPositiveSize {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        let expected = (rows * cols) as usize;
        if clues.len() != expected {
            return Err(GridError::TooFewRows {
                expected: rows as usize,
                found: clues.len() / (cols.max(1) as usize),
            });
        }
        Ok(Grid {
            size: Size(rows, cols),
            clues,
        })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.size.0
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.size.1
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.size.0 * self.size.1) as usize
    }

    /// Cell index `r * cols + c` for a point inside the grid.
    #[inline]
    pub fn cell_index(&self, p: Point) -> usize {
        debug_assert!(self.contains(p));
        (p.0 * self.size.1 + p.1) as usize
    }

    /// Gets the clue at `(r, c)`.
    #[inline]
    pub fn clue(&self, r: i32, c: i32) -> Clue {
        self.clues[self.cell_index(Point(r, c))]
    }

    /// Gets the clue at a cell index.
    #[inline]
    pub fn clue_at(&self, idx: usize) -> Clue {
        self.clues[idx]
    }

    /// Sets the clue at `(r, c)`.
    pub fn set_clue(&mut self, r: i32, c: i32, clue: Clue) {
        let idx = self.cell_index(Point(r, c));
        self.clues[idx] = clue;
    }

    /// Iterates `(cell index, clue)` for every clued cell, in row-major order.
    pub fn clued_cells(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.clues
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.map(|k| (i, k)))
    }
}

impl Geom for Grid {
    #[inline]
    fn size(&self) -> Size {
        self.size
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Grid> {
        let mut lines = s.lines().map(str::trim_end);

        let header = lines
            .by_ref()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .ok_or(GridError::MissingHeader)?;
        let mut header_tokens = header.split_whitespace();
        let rows: i32 = header_tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(GridError::MissingHeader)?;
        let cols: i32 = header_tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(GridError::MissingHeader)?;
        if rows <= 0 || cols <= 0 {
            return Err(GridError::NonPositiveSize {
                rows: rows as i64,
                cols: cols as i64,
            });
        }

        let mut clues = Vec::with_capacity((rows * cols) as usize);
        let mut row_count = 0usize;
        for line in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() != cols as usize {
                return Err(GridError::RowTooShort {
                    row: row_count,
                    found: tokens.len(),
                    expected: cols as usize,
                });
            }
            for tok in tokens {
                clues.push(parse_clue_token(tok));
            }
            row_count += 1;
            if row_count == rows as usize {
                break;
            }
        }

        if row_count != rows as usize {
            return Err(GridError::TooFewRows {
                expected: rows as usize,
                found: row_count,
            });
        }

        Grid::with_clues(rows, cols, clues)
    }
}

fn parse_clue_token(tok: &str) -> Clue {
    if tok.len() == 1 {
        let c = tok.chars().next().unwrap();
        if c.is_ascii_digit() {
            let d = c as u8 - b'0';
            if d <= 3 {
                return Some(d);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scenario_a() {
        let grid: Grid = "2 2\n3 .\n. 3\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.clue(0, 0), Some(3));
        assert_eq!(grid.clue(0, 1), None);
        assert_eq!(grid.clue(1, 0), None);
        assert_eq!(grid.clue(1, 1), Some(3));
    }

    #[test]
    fn tolerates_blank_lines_between_rows() {
        let grid: Grid = "2 2\n\n3 .\n\n. 3\n\n".parse().unwrap();
        assert_eq!(grid.clue(0, 0), Some(3));
        assert_eq!(grid.clue(1, 1), Some(3));
    }

    #[test]
    fn rejects_short_row() {
        let err = "2 2\n3\n. 3\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::RowTooShort { .. }));
    }

    #[test]
    fn rejects_missing_rows() {
        let err = "2 2\n3 .\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::TooFewRows { .. }));
    }

    #[test]
    fn rejects_nonpositive_size() {
        let err = "0 2\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::NonPositiveSize { .. }));
    }

    #[test]
    fn accepts_dot_and_whitespace_placeholders() {
        let grid: Grid = "1 3\n0 _ 2\n".parse().unwrap();
        assert_eq!(grid.clue(0, 0), Some(0));
        assert_eq!(grid.clue(0, 1), None);
        assert_eq!(grid.clue(0, 2), Some(2));
    }
}
