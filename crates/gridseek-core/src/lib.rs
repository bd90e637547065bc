//! **gridseek-core**: the grid model searched by `gridseek-search`.
//!
//! This crate provides coordinates and bounds, the validated [`Grid`] with its
//! adjacency and step-cost rules, ASCII layouts, seedable random grid
//! generation, and the configuration structs shared by runners.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod mapgen;

pub use config::{GridConfig, SearchConfig};
pub use error::GridError;
pub use geom::{Bounds, Point};
pub use grid::{DIAGONAL_COST, DIRECTIONS, Grid, ORTHOGONAL_COST, Tile};
pub use mapgen::GridGen;
