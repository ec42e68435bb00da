//! Maze generation orchestration: carve the grid, then place a reachable goal.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use tracing::debug;

use crate::config::MazeConfig;
use crate::error::MazeError;

use super::carver::carve_maze;
use super::goal::{GoalPolicy, place_goal};
use super::grid::Grid;
use super::model::GeneratedMaze;

#[derive(Clone, Debug)]
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn generate(&self, seed: u64) -> Result<GeneratedMaze, MazeError> {
        debug!(seed, rows = self.config.rows, cols = self.config.cols, "generating maze");
        self.generate_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generates with an injected random source; carving and goal sampling share it.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedMaze, MazeError> {
        let start = self.config.start;
        let mut grid = Grid::new(self.config.rows, self.config.cols)?;
        let carve = carve_maze(&mut grid, start, rng);
        debug!(
            rooms = carve.rooms.len(),
            connectors = carve.connectors.len(),
            "maze carved"
        );

        let policy = GoalPolicy { max_attempts: self.config.max_goal_attempts };
        let placed = place_goal(&grid, start, rng, policy, carve.last_room())?;

        Ok(GeneratedMaze {
            grid,
            start,
            goal: placed.cell,
            carve,
            goal_attempts: placed.attempts,
            fallback_used: placed.fallback_used,
        })
    }
}
