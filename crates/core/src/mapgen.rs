//! Procedural maze generation split into coherent submodules.

pub mod model;

mod carver;
mod generator;
mod goal;
mod grid;
mod reachability;
mod seed;
#[cfg(test)]
pub(crate) mod test_support;

pub use carver::{CarveReport, carve_maze};
pub use generator::MazeGenerator;
pub use goal::{GoalPolicy, PlacedGoal, is_valid_goal, place_goal};
pub use grid::Grid;
pub use model::GeneratedMaze;
pub use reachability::{is_reachable, reachable_passages};

use crate::config::MazeConfig;
use crate::error::MazeError;

pub fn generate_maze(config: &MazeConfig, seed: u64) -> Result<GeneratedMaze, MazeError> {
    MazeGenerator::new(config.clone())?.generate(seed)
}
