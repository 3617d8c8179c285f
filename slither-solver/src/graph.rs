// Copyright (c) 2016 slither developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Builds the immutable edge/point/cell incidence structure.
//!
//! Builds the immutable edge/point/cell incidence structure from a
//! [`Grid`]. Edge indices are dense in `[0, edge_count)`: horizontal edges
//! come first, followed by vertical edges.

use slither_core::geom::Point;
use slither_core::Grid;
use tracing::{debug, instrument};

/// Dense edge index.
pub type EdgeId = usize;
/// Dense lattice point index, `r * (cols + 1) + c`.
pub type PointId = usize;
/// Dense cell index, `r * cols + c`.
pub type CellId = usize;

/// One lattice edge: its two endpoints and up to two bordering cells.
#[derive(Clone, Copy, Debug)]
pub struct EdgeInfo {
    pub endpoints: (PointId, PointId),
    pub cells: (Option<CellId>, Option<CellId>),
}

/// The immutable incidence structure derived once from a [`Grid`].
///
/// Construction cannot fail: by the time a [`Grid`] exists its dimensions
/// are already known to be positive; `MalformedGrid` is tied to grid
/// construction itself, in `slither_core`.
#[derive(Debug)]
pub struct Graph {
    rows: i32,
    cols: i32,
    edges: Vec<EdgeInfo>,
    cell_edges: Vec<[EdgeId; 4]>,
    point_edges: Vec<Vec<EdgeId>>,
    clues: Vec<Option<u8>>,
    clued_cells: Vec<(CellId, u8)>,
    h_edge_count: usize,
    /// `(r, c) -> edge id` for the horizontal edge above point `(r, c)`,
    /// used only for rendering.
    h_edge_at: Vec<EdgeId>,
    /// `(r, c) -> edge id` for the vertical edge right of point `(r, c)`,
    /// used only for rendering.
    v_edge_at: Vec<EdgeId>,
}

impl Graph {
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_edges.len()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_edges.len()
    }

    #[inline]
    pub fn edge(&self, e: EdgeId) -> &EdgeInfo {
        &self.edges[e]
    }

    #[inline]
    pub fn edges_of_cell(&self, c: CellId) -> &[EdgeId; 4] {
        &self.cell_edges[c]
    }

    #[inline]
    pub fn edges_of_point(&self, p: PointId) -> &[EdgeId] {
        &self.point_edges[p]
    }

    #[inline]
    pub fn clue(&self, c: CellId) -> Option<u8> {
        self.clues[c]
    }

    #[inline]
    pub fn clued_cells(&self) -> &[(CellId, u8)] {
        &self.clued_cells
    }

    /// Point id `r * (cols + 1) + c`.
    #[inline]
    pub fn point_id(&self, r: i32, c: i32) -> PointId {
        (r * (self.cols + 1) + c) as usize
    }

    /// Inverse of [`Graph::point_id`], used by the final checker to render
    /// cycle coordinates.
    #[inline]
    pub fn point_coords(&self, p: PointId) -> (i32, i32) {
        let w = self.cols + 1;
        ((p as i32) / w, (p as i32) % w)
    }

    /// Edge id of the horizontal edge above lattice point `(r, c)`, for
    /// rendering. `r` ranges `0..=rows`, `c` ranges `0..cols`.
    #[inline]
    pub fn h_edge_at(&self, r: i32, c: i32) -> EdgeId {
        self.h_edge_at[(r * self.cols + c) as usize]
    }

    /// Edge id of the vertical edge right of lattice point `(r, c)`, for
    /// rendering. `r` ranges `0..rows`, `c` ranges `0..=cols`.
    #[inline]
    pub fn v_edge_at(&self, r: i32, c: i32) -> EdgeId {
        self.v_edge_at[(r * (self.cols + 1) + c) as usize]
    }

    #[inline]
    fn cell_id(&self, r: i32, c: i32) -> CellId {
        (r * self.cols + c) as usize
    }
}

/// Builds the [`Graph`] for a grid: O(edges).
#[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn build_graph(grid: &Grid) -> Graph {
    let rows = grid.rows();
    let cols = grid.cols();
    let h_count = ((rows + 1) * cols) as usize;
    let v_count = (rows * (cols + 1)) as usize;
    let edge_count = h_count + v_count;

    let point_id = |r: i32, c: i32| -> PointId { (r * (cols + 1) + c) as usize };
    let h_id = |r: i32, c: i32| -> EdgeId { (r * cols + c) as usize };
    let v_id = |r: i32, c: i32| -> EdgeId { h_count + (r * (cols + 1) + c) as usize };
    let cell_id = |r: i32, c: i32| -> CellId { (r * cols + c) as usize };

    let mut edges = Vec::with_capacity(edge_count);
    let mut h_edge_at = vec![0usize; h_count];
    let mut v_edge_at = vec![0usize; v_count];

    // Horizontal edges: h(r, c) connects point(r, c) -- point(r, c+1),
    // bordering cell(r-1, c) above and cell(r, c) below.
    for r in 0..=rows {
        for c in 0..cols {
            let id = h_id(r, c);
            h_edge_at[id] = id;
            let cell_above = if r > 0 { Some(cell_id(r - 1, c)) } else { None };
            let cell_below = if r < rows { Some(cell_id(r, c)) } else { None };
            edges.push(EdgeInfo {
                endpoints: (point_id(r, c), point_id(r, c + 1)),
                cells: (cell_above, cell_below),
            });
        }
    }

    // Vertical edges: v(r, c) connects point(r, c) -- point(r+1, c),
    // bordering cell(r, c-1) to the left and cell(r, c) to the right.
    for r in 0..rows {
        for c in 0..=cols {
            let id = v_id(r, c);
            v_edge_at[(r * (cols + 1) + c) as usize] = id;
            let cell_left = if c > 0 { Some(cell_id(r, c - 1)) } else { None };
            let cell_right = if c < cols { Some(cell_id(r, c)) } else { None };
            edges.push(EdgeInfo {
                endpoints: (point_id(r, c), point_id(r + 1, c)),
                cells: (cell_left, cell_right),
            });
        }
    }

    let cell_count = (rows * cols) as usize;
    let mut cell_edges = Vec::with_capacity(cell_count);
    for r in 0..rows {
        for c in 0..cols {
            cell_edges.push([
                h_id(r, c),
                h_id(r + 1, c),
                v_id(r, c),
                v_id(r, c + 1),
            ]);
        }
    }

    let point_count = ((rows + 1) * (cols + 1)) as usize;
    let mut point_edges = vec![Vec::with_capacity(4); point_count];
    for r in 0..=rows {
        for c in 0..=cols {
            let p = point_id(r, c);
            let incident = &mut point_edges[p];
            if c < cols {
                incident.push(h_id(r, c));
            }
            if c > 0 {
                incident.push(h_id(r, c - 1));
            }
            if r < rows {
                incident.push(v_id(r, c));
            }
            if r > 0 {
                incident.push(v_id(r - 1, c));
            }
        }
    }

    let clues: Vec<Option<u8>> = (0..cell_count)
        .map(|i| grid.clue_at(i))
        .collect();
    let clued_cells = clues
        .iter()
        .enumerate()
        .filter_map(|(i, &k)| k.map(|k| (i, k)))
        .collect();

    debug!(
        edges = edge_count,
        points = point_edges.len(),
        cells = cell_count,
        clued = clued_cells.len(),
        "graph built"
    );

    Graph {
        rows,
        cols,
        edges,
        cell_edges,
        point_edges,
        clues,
        clued_cells,
        h_edge_count: h_count,
        h_edge_at,
        v_edge_at,
    }
}

/// Converts a lattice point id into `(row, column)`.
#[inline]
pub fn point_to_row_col(graph: &Graph, p: PointId) -> Point {
    let (r, c) = graph.point_coords(p);
    Point(r, c)
}

impl Graph {
    #[inline]
    pub fn is_horizontal(&self, e: EdgeId) -> bool {
        e < self.h_edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_core::Grid;

    #[test]
    fn edge_and_point_counts_match_spec_formula() {
        let grid = Grid::new(2, 3);
        let g = build_graph(&grid);
        assert_eq!(g.point_count(), (3 * 4) as usize);
        assert_eq!(g.edge_count(), 2 * (2 + 1) * 3 + (3 + 1) * 2 - 2 * 3);
        // n*(m+1) + (n+1)*m
        let n = 2i64;
        let m = 3i64;
        assert_eq!(g.edge_count() as i64, n * (m + 1) + (n + 1) * m);
    }

    #[test]
    fn every_edge_appears_in_one_or_two_cell_lists() {
        let grid = Grid::new(2, 2);
        let g = build_graph(&grid);
        let mut occurrences = vec![0u32; g.edge_count()];
        for c in 0..g.cell_count() {
            for &e in g.edges_of_cell(c) {
                occurrences[e] += 1;
            }
        }
        for (e, &info) in g.edges.iter().enumerate() {
            let expected = match info.cells {
                (Some(_), Some(_)) => 2,
                (Some(_), None) | (None, Some(_)) => 1,
                (None, None) => unreachable!("every edge borders at least one cell"),
            };
            assert_eq!(occurrences[e], expected, "edge {e}");
        }
    }

    #[test]
    fn every_edge_appears_in_exactly_two_point_lists() {
        let grid = Grid::new(3, 3);
        let g = build_graph(&grid);
        let mut occurrences = vec![0u32; g.edge_count()];
        for p in 0..g.point_count() {
            for &e in g.edges_of_point(p) {
                occurrences[e] += 1;
            }
        }
        assert!(occurrences.iter().all(|&n| n == 2));
    }

    #[test]
    fn corner_points_have_degree_two() {
        let grid = Grid::new(2, 2);
        let g = build_graph(&grid);
        assert_eq!(g.edges_of_point(g.point_id(0, 0)).len(), 2);
        assert_eq!(g.edges_of_point(g.point_id(0, 2)).len(), 2);
        assert_eq!(g.edges_of_point(g.point_id(1, 1)).len(), 4);
    }
}
