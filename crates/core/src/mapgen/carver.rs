//! Randomized depth-first carving of a perfect maze on the step-2 room lattice.
//!
//! Rooms sit at even offsets from the start cell. Entering a room opens it and
//! draws a fresh shuffle of the four directions; each direction whose room two
//! cells away is still walled gets its connector cell knocked down and is then
//! entered. The walk runs on an explicit stack of frames so deep grids never
//! hit the call-stack limit, while keeping the recursive opening order.

use rand_chacha::rand_core::Rng;

use crate::types::{Cell, Direction};

use super::grid::Grid;
use super::seed::shuffled_directions;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarveReport {
    /// Rooms in the order they were entered, starting with the start cell.
    pub rooms: Vec<Cell>,
    /// Connector cells in the order they were knocked down.
    pub connectors: Vec<Cell>,
}

impl CarveReport {
    pub fn last_room(&self) -> Option<Cell> {
        self.rooms.last().copied()
    }

    pub fn opened_cells(&self) -> usize {
        self.rooms.len() + self.connectors.len()
    }
}

struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

/// Carves `grid` in place starting at `start`. Callers pass a fully walled grid;
/// an out-of-bounds start carves nothing.
pub fn carve_maze<R: Rng + ?Sized>(grid: &mut Grid, start: Cell, rng: &mut R) -> CarveReport {
    let mut report = CarveReport::default();
    if !grid.in_bounds(start) {
        return report;
    }

    let mut stack = vec![enter_room(grid, start, rng, &mut report)];
    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.next];
        frame.next += 1;
        let from = frame.cell;

        let neighbor = from.offset(direction, 2);
        if !grid.in_bounds(neighbor) || grid.is_passage(neighbor) {
            continue;
        }
        let connector = from.step(direction);
        grid.set_passage(connector);
        report.connectors.push(connector);
        stack.push(enter_room(grid, neighbor, rng, &mut report));
    }

    report
}

fn enter_room<R: Rng + ?Sized>(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut R,
    report: &mut CarveReport,
) -> Frame {
    grid.set_passage(cell);
    report.rooms.push(cell);
    Frame { cell, directions: shuffled_directions(rng), next: 0 }
}
