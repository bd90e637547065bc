use gridseek_core::{Bounds, Grid, Point};

/// The graph interface every search runs against.
///
/// Implementations must be pure queries: calling any method twice with the
/// same arguments gives the same answer for the lifetime of a search.
pub trait SearchSpace {
    /// Root of the forward search.
    fn start(&self) -> Point;

    /// Goal of the forward search and root of the backward one.
    fn target(&self) -> Point;

    /// Dimensions of the space.
    fn bounds(&self) -> Bounds;

    /// Whether a search may step onto `p`.
    fn is_valid(&self, p: Point) -> bool;

    /// Append the in-bounds neighbors of `p` into `buf`, in expansion order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn movement_cost(&self, from: Point, to: Point) -> f64;
}

impl SearchSpace for Grid {
    #[inline]
    fn start(&self) -> Point {
        Grid::start(self)
    }

    #[inline]
    fn target(&self) -> Point {
        Grid::target(self)
    }

    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn is_valid(&self, p: Point) -> bool {
        Grid::is_valid(self, p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf)
    }

    #[inline]
    fn movement_cost(&self, from: Point, to: Point) -> f64 {
        Grid::movement_cost(self, from, to)
    }
}
