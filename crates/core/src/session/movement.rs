//! Single-step player movement over a finished grid.

use crate::mapgen::Grid;
use crate::types::{Cell, Direction};

/// Moves one cell in `direction` when the destination is an in-bounds passage,
/// otherwise returns `player` unchanged.
pub fn try_move(player: Cell, direction: Direction, grid: &Grid) -> Cell {
    let candidate = player.step(direction);
    if grid.in_bounds(candidate) && grid.is_passage(candidate) { candidate } else { player }
}
