//! Shared grid fixtures for the `mapgen` test suites.

use crate::types::Cell;

use super::grid::Grid;

/// Builds a grid from text rows: `#` is a wall, anything else a passage.
pub(crate) fn grid_from_rows(rows: &[&str]) -> Grid {
    let cols = rows.first().map_or(0, |row| row.len());
    let mut grid = Grid::new(rows.len(), cols).expect("fixture dimensions must be valid");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), cols, "fixture rows must share one width");
        for (x, symbol) in row.chars().enumerate() {
            if symbol != '#' {
                grid.set_passage(Cell { y: y as i32, x: x as i32 });
            }
        }
    }
    grid
}
