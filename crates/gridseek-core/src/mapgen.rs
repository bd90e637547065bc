//! Random obstacle grids.
//!
//! Generation is the only place randomness enters the system. The random
//! number generator is injected, so a seeded generator reproduces the same
//! grid every time.

use rand::Rng;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Bounds, Point};
use crate::grid::{Grid, Tile};

/// Grid generator scattering walls with a fixed density.
pub struct GridGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> GridGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a grid.
    ///
    /// 1. Each cell independently becomes a wall with probability
    ///    `obstacle_density`.
    /// 2. If fewer than two empty cells remain, every wall is cleared.
    /// 3. Start and a distinct target are drawn uniformly from the empty
    ///    cells.
    ///
    /// Dimensions are clamped by [`GridConfig::validate`].
    pub fn generate(&mut self, cfg: GridConfig) -> Result<Grid, GridError> {
        let cfg = cfg.validate()?;
        let bounds = Bounds::new(cfg.rows, cfg.cols);

        let mut tiles = Vec::with_capacity(bounds.len());
        for _ in 0..bounds.len() {
            let r: f64 = self.rng.random();
            tiles.push(if r < cfg.obstacle_density {
                Tile::Wall
            } else {
                Tile::Empty
            });
        }

        let mut empty: Vec<Point> = bounds
            .iter()
            .zip(tiles.iter())
            .filter(|&(_, &t)| t == Tile::Empty)
            .map(|(p, _)| p)
            .collect();
        if empty.len() < 2 {
            tiles.fill(Tile::Empty);
            empty = bounds.iter().collect();
        }

        let start = empty.remove(self.rng.random_range(0..empty.len()));
        let target = empty[self.rng.random_range(0..empty.len())];
        Grid::from_tiles(bounds, tiles, start, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(rows: i32, cols: i32, obstacle_density: f64) -> GridConfig {
        GridConfig {
            rows,
            cols,
            obstacle_density,
        }
    }

    #[test]
    fn test_generate_respects_invariants() {
        let mut generator = GridGen::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let g = generator.generate(config(12, 9, 0.3)).unwrap();
            assert_eq!(g.rows(), 12);
            assert_eq!(g.cols(), 9);
            assert_ne!(g.start(), g.target());
            assert_eq!(g.count(Tile::Start), 1);
            assert_eq!(g.count(Tile::Target), 1);
            assert!(g.is_valid(g.start()));
            assert!(g.is_valid(g.target()));
        }
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = GridGen::new(StdRng::seed_from_u64(42))
            .generate(GridConfig::default())
            .unwrap();
        let b = GridGen::new(StdRng::seed_from_u64(42))
            .generate(GridConfig::default())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_density_falls_back_to_open_grid() {
        let mut generator = GridGen::new(StdRng::seed_from_u64(1));
        let g = generator.generate(config(4, 4, 1.0)).unwrap();
        assert_eq!(g.count(Tile::Wall), 0);
        assert_eq!(g.count(Tile::Empty), 14);
    }

    #[test]
    fn test_zero_density_has_no_walls() {
        let mut generator = GridGen::new(StdRng::seed_from_u64(3));
        let g = generator.generate(config(6, 6, 0.0)).unwrap();
        assert_eq!(g.count(Tile::Wall), 0);
    }

    #[test]
    fn test_tiny_config_is_clamped() {
        let mut generator = GridGen::new(rand::rng());
        let g = generator.generate(config(1, 1, 0.5)).unwrap();
        assert_eq!(g.bounds(), Bounds::new(2, 2));
    }

    #[test]
    fn test_bad_density_rejected() {
        let mut generator = GridGen::new(rand::rng());
        assert!(matches!(
            generator.generate(config(5, 5, -0.1)),
            Err(GridError::InvalidDensity(_))
        ));
    }
}
