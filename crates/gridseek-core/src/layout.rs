//! Grids built from ASCII layouts.
//!
//! ```text
//! S..#
//! .#.#
//! ...T
//! ```
//!
//! `.` is empty, `#` a wall, `S` the start and `T` the target. Lines are
//! separated by `'\n'` and must all have the same width. Leading and trailing
//! whitespace of the whole string is ignored, as is leading whitespace of
//! each line, so layouts can be indented inside string literals.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Bounds, Point};
use crate::grid::{Grid, Tile};

impl Grid {
    /// Parse a grid from an ASCII layout.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut tiles = Vec::new();
        let mut start: Option<Point> = None;
        let mut target: Option<Point> = None;
        let mut width: i32 = -1;
        let mut rows: i32 = 0;

        for (row, line) in s.trim().lines().enumerate() {
            let row = row as i32;
            let line = line.trim_start();
            let mut col: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(row, col);
                let tile = Tile::from_char(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                match tile {
                    Tile::Start => {
                        if let Some(first) = start {
                            return Err(GridError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    Tile::Target => {
                        if let Some(first) = target {
                            return Err(GridError::DuplicateTarget { first, second: pos });
                        }
                        target = Some(pos);
                    }
                    _ => {}
                }
                tiles.push(tile);
                col += 1;
            }
            if width < 0 {
                width = col;
            } else if col != width {
                return Err(GridError::InconsistentWidth {
                    row,
                    expected: width,
                    found: col,
                });
            }
            rows += 1;
        }

        let bounds = Bounds::new(rows, width.max(0));
        if bounds.len() < 2 {
            return Err(GridError::TooSmall { bounds });
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let target = target.ok_or(GridError::MissingTarget)?;
        Grid::from_tiles(bounds, tiles, start, target)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        S..#
        .#.#
        ...T";

    #[test]
    fn test_parse_room() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.target(), Point::new(2, 3));
        assert_eq!(g.count(Tile::Wall), 3);
        assert!(!g.is_valid(Point::new(1, 1)));
    }

    #[test]
    fn test_parse_display_round_trip() {
        let g = Grid::parse(ROOM).unwrap();
        let again: Grid = g.to_string().parse().unwrap();
        assert_eq!(g, again);
    }

    #[test]
    fn test_parse_inconsistent_width() {
        let err = Grid::parse("S..\n.T").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_invalid_char() {
        let err = Grid::parse("S.x\n..T").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(0, 2)
            }
        );
    }

    #[test]
    fn test_parse_endpoint_errors() {
        assert_eq!(Grid::parse("...\n..T").unwrap_err(), GridError::MissingStart);
        assert_eq!(Grid::parse("S..\n...").unwrap_err(), GridError::MissingTarget);
        assert!(matches!(
            Grid::parse("S.S\n..T"),
            Err(GridError::DuplicateStart { .. })
        ));
        assert!(matches!(
            Grid::parse("S.T\n..T"),
            Err(GridError::DuplicateTarget { .. })
        ));
    }

    #[test]
    fn test_parse_single_cell_rejected() {
        assert!(matches!(Grid::parse("S"), Err(GridError::TooSmall { .. })));
        assert!(matches!(Grid::parse(""), Err(GridError::TooSmall { .. })));
    }
}
