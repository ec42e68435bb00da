//! Public data model for a generated maze.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, Tile};

use super::carver::CarveReport;
use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
    pub carve: CarveReport,
    pub goal_attempts: u32,
    pub fallback_used: bool,
}

impl GeneratedMaze {
    /// Byte layout hashed by [`GeneratedMaze::fingerprint`]; not a storage format.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.grid.tiles().len() + 24);
        bytes.extend((self.grid.rows() as u32).to_le_bytes());
        bytes.extend((self.grid.cols() as u32).to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(match tile {
                Tile::Wall => 0,
                Tile::Passage => 1,
            });
        }
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.goal.y.to_le_bytes());
        bytes.extend(self.goal.x.to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn tile_at(&self, cell: Cell) -> Tile {
        self.grid.tile_at(cell)
    }

    /// Text rendering: `#` wall, `.` passage, `S` start, `G` goal.
    pub fn ascii_rows(&self) -> Vec<String> {
        (0..self.grid.rows())
            .map(|y| {
                (0..self.grid.cols())
                    .map(|x| {
                        let cell = Cell { y: y as i32, x: x as i32 };
                        if cell == self.goal {
                            'G'
                        } else if cell == self.start {
                            'S'
                        } else if self.grid.is_passage(cell) {
                            '.'
                        } else {
                            '#'
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::test_support::grid_from_rows;

    fn fixture() -> GeneratedMaze {
        GeneratedMaze {
            grid: grid_from_rows(&[
                "...", //
                "#.#",
            ]),
            start: Cell::ORIGIN,
            goal: Cell::new(1, 1),
            carve: CarveReport::default(),
            goal_attempts: 1,
            fallback_used: false,
        }
    }

    #[test]
    fn ascii_rows_mark_start_and_goal() {
        assert_eq!(fixture().ascii_rows(), vec!["S..".to_string(), "#G#".to_string()]);
    }

    #[test]
    fn fingerprint_tracks_goal_and_tiles() {
        let base = fixture();
        let mut moved_goal = fixture();
        moved_goal.goal = Cell::new(2, 0);
        let mut extra_wall = fixture();
        extra_wall.grid.set_wall(Cell::new(2, 0));

        assert_eq!(base.fingerprint(), fixture().fingerprint());
        assert_ne!(base.fingerprint(), moved_goal.fingerprint());
        assert_ne!(base.fingerprint(), extra_wall.fingerprint());
    }

    #[test]
    fn fingerprint_ignores_generation_bookkeeping() {
        let mut other = fixture();
        other.goal_attempts = 40;
        assert_eq!(fixture().fingerprint(), other.fingerprint());
    }
}
