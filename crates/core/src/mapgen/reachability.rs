//! Breadth-first reachability over the 4-connected passage subgraph.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{Cell, Direction};

use super::grid::Grid;

/// Whether `goal` can be reached from `start` through passage cells.
/// A walled or out-of-bounds `start` is never reachable, not even from itself.
pub fn is_reachable(grid: &Grid, start: Cell, goal: Cell) -> bool {
    let Some(start_index) = grid.index(start) else {
        return false;
    };
    if !grid.is_passage(start) {
        return false;
    }

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::from([start]);
    visited[start_index] = true;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for direction in Direction::ALL {
            let next = current.step(direction);
            let Some(index) = grid.index(next) else {
                continue;
            };
            if grid.is_passage(next) && !visited[index] {
                visited[index] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

/// Every passage cell connected to `start`, including `start` itself.
pub fn reachable_passages(grid: &Grid, start: Cell) -> BTreeSet<Cell> {
    let mut visited = BTreeSet::new();
    if !grid.is_passage(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let next = current.step(direction);
            if grid.is_passage(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}
