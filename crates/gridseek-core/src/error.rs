use std::fmt;

use crate::geom::{Bounds, Point};

/// Errors raised while building a [`Grid`](crate::Grid).
///
/// A grid that fails these checks would make every search ill-defined, so
/// they are rejected up front rather than discovered mid-search.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Fewer than two traversable cells are available.
    TooSmall { bounds: Bounds },
    /// A start, target or wall position lies outside the grid.
    OutOfBounds { pos: Point, bounds: Bounds },
    /// Start and target are the same cell.
    StartIsTarget(Point),
    /// Start or target sits on a wall.
    OnWall(Point),
    /// A layout has no start cell.
    MissingStart,
    /// A layout has no target cell.
    MissingTarget,
    /// A layout has more than one start cell.
    DuplicateStart { first: Point, second: Point },
    /// A layout has more than one target cell.
    DuplicateTarget { first: Point, second: Point },
    /// Layout lines have different widths.
    InconsistentWidth { row: i32, expected: i32, found: i32 },
    /// A layout contains a character that is not a known tile.
    InvalidChar { ch: char, pos: Point },
    /// Obstacle density outside `[0, 1]`.
    InvalidDensity(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { bounds } => {
                write!(f, "grid {bounds} needs at least two traversable cells")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside grid {bounds}")
            }
            Self::StartIsTarget(p) => write!(f, "start and target are both {p}"),
            Self::OnWall(p) => write!(f, "endpoint {p} is a wall"),
            Self::MissingStart => f.write_str("layout has no start cell"),
            Self::MissingTarget => f.write_str("layout has no target cell"),
            Self::DuplicateStart { first, second } => {
                write!(f, "layout has two start cells: {first} and {second}")
            }
            Self::DuplicateTarget { first, second } => {
                write!(f, "layout has two target cells: {first} and {second}")
            }
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidDensity(d) => {
                write!(f, "obstacle density {d} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for GridError {}
