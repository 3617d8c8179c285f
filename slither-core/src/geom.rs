//! Small 2-D geometry helpers shared by the grid and the solver.

/// A `(row, column)` coordinate, used both for cells and for lattice points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Point(pub i32, pub i32);

/// A `(rows, columns)` extent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Size(pub i32, pub i32);

/// Types that have a rectangular extent addressable by [`Point`].
pub trait Geom {
    fn size(&self) -> Size;

    #[inline]
    fn row(&self) -> i32 {
        self.size().0
    }

    #[inline]
    fn column(&self) -> i32 {
        self.size().1
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        let size = self.size();
        0 <= p.0 && p.0 < size.0 && 0 <= p.1 && p.1 < size.1
    }

    #[inline]
    fn points(&self) -> Points {
        Points {
            point: if self.row() > 0 && self.column() > 0 {
                Some(Point(0, 0))
            } else {
                None
            },
            size: self.size(),
        }
    }
}

impl Geom for Size {
    #[inline]
    fn size(&self) -> Size {
        *self
    }
}

/// Iterates every point of a [`Geom`] in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct Points {
    point: Option<Point>,
    size: Size,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let cur = self.point?;
        let mut next = cur;
        next.1 += 1;
        if next.1 >= self.size.1 {
            next.0 += 1;
            next.1 = 0;
        }
        self.point = if next.0 < self.size.0 { Some(next) } else { None };
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_row_major() {
        let size = Size(2, 3);
        let pts: Vec<_> = size.points().collect();
        assert_eq!(
            pts,
            vec![
                Point(0, 0),
                Point(0, 1),
                Point(0, 2),
                Point(1, 0),
                Point(1, 1),
                Point(1, 2),
            ]
        );
    }

    #[test]
    fn contains_respects_bounds() {
        let size = Size(2, 3);
        assert!(size.contains(Point(0, 0)));
        assert!(size.contains(Point(1, 2)));
        assert!(!size.contains(Point(2, 0)));
        assert!(!size.contains(Point(0, 3)));
        assert!(!size.contains(Point(-1, 0)));
    }
}
