//! The grid model: tile classification, adjacency and step costs.
//!
//! A [`Grid`] is validated once at construction and is read-only afterwards,
//! so any number of searches can borrow it at the same time.

use std::f64::consts::SQRT_2;
use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Point};

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Start,
    Target,
}

impl Tile {
    /// Layout character for this tile.
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Target => 'T',
        }
    }

    /// Parse a layout character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'T' => Some(Self::Target),
            _ => None,
        }
    }

    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Neighbor offsets in expansion order: up, right, down, down-right, left,
/// up-left.
///
/// The set is closed under negation, so adjacency is symmetric.
pub const DIRECTIONS: [Point; 6] = [
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, -1),
    Point::new(-1, -1),
];

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// A validated `rows x cols` grid with exactly one start and one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    tiles: Vec<Tile>,
    start: Point,
    target: Point,
}

impl Grid {
    /// Build a grid from a wall list and the two endpoints.
    ///
    /// Fails if the grid has fewer than two cells, if any position is out of
    /// bounds, if start equals target, or if an endpoint is a wall.
    pub fn new(
        rows: i32,
        cols: i32,
        walls: impl IntoIterator<Item = Point>,
        start: Point,
        target: Point,
    ) -> Result<Self, GridError> {
        let bounds = Bounds::new(rows, cols);
        if bounds.len() < 2 {
            return Err(GridError::TooSmall { bounds });
        }
        let mut tiles = vec![Tile::Empty; bounds.len()];
        for w in walls {
            let i = bounds
                .index(w)
                .ok_or(GridError::OutOfBounds { pos: w, bounds })?;
            tiles[i] = Tile::Wall;
        }
        Self::from_tiles(bounds, tiles, start, target)
    }

    /// Build a wall-free grid.
    pub fn open(rows: i32, cols: i32, start: Point, target: Point) -> Result<Self, GridError> {
        Self::new(rows, cols, std::iter::empty(), start, target)
    }

    /// Validate a row-major tile buffer and stamp the endpoints into it.
    ///
    /// Any `Start`/`Target` tiles already in `tiles` are overwritten by the
    /// explicit endpoints.
    pub(crate) fn from_tiles(
        bounds: Bounds,
        mut tiles: Vec<Tile>,
        start: Point,
        target: Point,
    ) -> Result<Self, GridError> {
        debug_assert_eq!(tiles.len(), bounds.len());
        if bounds.len() < 2 {
            return Err(GridError::TooSmall { bounds });
        }
        let si = bounds
            .index(start)
            .ok_or(GridError::OutOfBounds { pos: start, bounds })?;
        let ti = bounds
            .index(target)
            .ok_or(GridError::OutOfBounds { pos: target, bounds })?;
        if si == ti {
            return Err(GridError::StartIsTarget(start));
        }
        for (i, p) in [(si, start), (ti, target)] {
            if tiles[i] == Tile::Wall {
                return Err(GridError::OnWall(p));
            }
        }
        for t in tiles.iter_mut() {
            if matches!(t, Tile::Start | Tile::Target) {
                *t = Tile::Empty;
            }
        }
        tiles[si] = Tile::Start;
        tiles[ti] = Tile::Target;
        Ok(Self {
            bounds,
            tiles,
            start,
            target,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The target cell.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// The tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.tiles[i])
    }

    /// True iff `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_passable)
    }

    /// Append the in-bounds neighbors of `p` to `buf`, in [`DIRECTIONS`]
    /// order. Walls are kept; filter them with [`is_valid`](Self::is_valid).
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in DIRECTIONS {
            let n = p + d;
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Cost of stepping between two adjacent cells.
    ///
    /// Diagonal steps cost [`DIAGONAL_COST`], everything else
    /// [`ORTHOGONAL_COST`].
    #[inline]
    pub fn movement_cost(&self, from: Point, to: Point) -> f64 {
        if from.is_diagonal_to(to) {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    /// Number of cells with the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

impl fmt::Display for Grid {
    /// Writes the grid in the layout format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, t) in self.iter() {
            if p.col == 0 && p.row > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", t.to_char())?;
        }
        Ok(())
    }
}
