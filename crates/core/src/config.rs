//! Maze and session configuration.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::types::Cell;

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 4096;

pub const DEFAULT_ROWS: usize = 21;
pub const DEFAULT_COLS: usize = 31;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Cell,
    pub time_limit_secs: u32,
    /// Ceiling on random goal draws before falling back to the last carved room.
    /// `None` keeps sampling until a valid goal turns up.
    pub max_goal_attempts: Option<u32>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: Cell::ORIGIN,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            max_goal_attempts: None,
        }
    }
}

impl MazeConfig {
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        validate_dimensions(self.rows, self.cols)?;
        let start_in_bounds = self.start.x >= 0
            && self.start.y >= 0
            && (self.start.x as usize) < self.cols
            && (self.start.y as usize) < self.rows;
        if !start_in_bounds {
            return Err(MazeError::StartOutOfBounds {
                start: self.start,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.time_limit_secs == 0 {
            return Err(MazeError::InvalidTimeLimit);
        }
        Ok(())
    }
}

pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), MazeError> {
    if rows == 0 || cols == 0 || rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }
    Ok(())
}
