//! Configuration consumed by grid generation and by search runners.

use std::time::Duration;

use crate::error::GridError;

/// Smallest accepted grid side.
pub const MIN_SIDE: i32 = 2;
/// Largest accepted grid side.
pub const MAX_SIDE: i32 = 200;

/// Parameters for random grid generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    /// Probability in `[0, 1]` that a cell starts out as a wall.
    pub obstacle_density: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            obstacle_density: 0.2,
        }
    }
}

impl GridConfig {
    /// Clamp the dimensions to `[MIN_SIDE, MAX_SIDE]` and check the density.
    pub fn validate(self) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&self.obstacle_density) {
            return Err(GridError::InvalidDensity(self.obstacle_density));
        }
        Ok(Self {
            rows: self.rows.clamp(MIN_SIDE, MAX_SIDE),
            cols: self.cols.clamp(MIN_SIDE, MAX_SIDE),
            obstacle_density: self.obstacle_density,
        })
    }
}

/// Per-algorithm parameters and observer pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Budget for depth-limited search.
    pub depth_limit: u32,
    /// Largest depth tried by iterative deepening.
    pub max_depth: u32,
    /// Pause after each visited cell. Only affects observer timing.
    pub step_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 15,
            max_depth: 25,
            step_delay: Duration::from_millis(50),
        }
    }
}
