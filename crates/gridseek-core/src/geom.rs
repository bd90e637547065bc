//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` with rows growing down and columns growing
//! right, the way a grid is printed.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid cell coordinate. Identity is the coordinate itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` differs by exactly one row and one column.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        (self.row - other.row).abs() == 1 && (self.col - other.col).abs() == 1
    }

    /// Chebyshev (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, rows) x [0, cols)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds of the given size. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds cover no cells at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every point.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the points in [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn diagonal_detection() {
        let p = Point::new(2, 2);
        assert!(p.is_diagonal_to(Point::new(3, 3)));
        assert!(p.is_diagonal_to(Point::new(1, 3)));
        assert!(!p.is_diagonal_to(Point::new(2, 3)));
        assert!(!p.is_diagonal_to(Point::new(4, 4)));
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.len(), 6);
        assert!(!b.is_empty());
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(1, 2)));
        assert!(!b.contains(Point::new(2, 0)));
        assert!(!b.contains(Point::new(0, 3)));
        assert!(!b.contains(Point::new(-1, 0)));
    }

    #[test]
    fn bounds_index_round_trip() {
        let b = Bounds::new(4, 5);
        for p in b {
            let i = b.index(p).unwrap();
            assert_eq!(b.point(i), p);
        }
        assert_eq!(b.index(Point::new(4, 0)), None);
    }

    #[test]
    fn bounds_iter_row_major() {
        let pts: Vec<_> = Bounds::new(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(0, 2));
        assert_eq!(pts[5], Point::new(1, 2));
    }

    #[test]
    fn empty_bounds_iter() {
        let b = Bounds::new(0, 7);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
        assert_eq!(Bounds::new(-3, 2), Bounds::new(0, 2));
    }
}
