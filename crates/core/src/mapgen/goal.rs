//! Rejection-sampled goal placement validated by the reachability check.

use rand_chacha::rand_core::Rng;
use tracing::{debug, warn};

use crate::error::MazeError;
use crate::types::Cell;

use super::grid::Grid;
use super::reachability::is_reachable;
use super::seed::random_cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoalPolicy {
    pub max_attempts: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedGoal {
    pub cell: Cell,
    /// Random draws made, including the accepted one.
    pub attempts: u32,
    pub fallback_used: bool,
}

/// Whether `candidate` may serve as the goal for a session starting at `start`.
/// The start itself only qualifies when it is the grid's sole passage cell.
pub fn is_valid_goal(grid: &Grid, start: Cell, candidate: Cell, passage_count: usize) -> bool {
    if !grid.is_passage(candidate) {
        return false;
    }
    if candidate == start && passage_count > 1 {
        return false;
    }
    is_reachable(grid, start, candidate)
}

/// Draws uniform cells until one passes [`is_valid_goal`].
///
/// With `policy.max_attempts` set, an exhausted budget falls back to `fallback`
/// (normally the last room the carver entered) and fails only when that cell
/// is invalid too.
pub fn place_goal<R: Rng + ?Sized>(
    grid: &Grid,
    start: Cell,
    rng: &mut R,
    policy: GoalPolicy,
    fallback: Option<Cell>,
) -> Result<PlacedGoal, MazeError> {
    let passage_count = grid.passage_count();
    let mut attempts = 0_u32;

    loop {
        if policy.max_attempts.is_some_and(|limit| attempts >= limit) {
            return fall_back(grid, start, fallback, passage_count, attempts);
        }
        attempts = attempts.saturating_add(1);
        let candidate = random_cell(rng, grid.rows(), grid.cols());
        if is_valid_goal(grid, start, candidate, passage_count) {
            debug!(x = candidate.x, y = candidate.y, attempts, "goal placed");
            return Ok(PlacedGoal { cell: candidate, attempts, fallback_used: false });
        }
    }
}

fn fall_back(
    grid: &Grid,
    start: Cell,
    fallback: Option<Cell>,
    passage_count: usize,
    attempts: u32,
) -> Result<PlacedGoal, MazeError> {
    match fallback {
        Some(cell) if is_valid_goal(grid, start, cell, passage_count) => {
            warn!(x = cell.x, y = cell.y, attempts, "goal sampling exhausted, using fallback cell");
            Ok(PlacedGoal { cell, attempts, fallback_used: true })
        }
        _ => Err(MazeError::GenerationFailed { attempts }),
    }
}
