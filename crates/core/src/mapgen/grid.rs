//! Wall/passage grid used by carving, reachability checks, and movement.

use crate::config::validate_dimensions;
use crate::error::MazeError;
use crate::types::{Cell, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a `rows x cols` grid with every cell walled.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        validate_dimensions(rows, cols)?;
        Ok(Self { rows, cols, tiles: vec![Tile::Wall; rows * cols] })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.cols && (cell.y as usize) < self.rows
    }

    pub fn tile_at(&self, cell: Cell) -> Tile {
        match self.index(cell) {
            Some(index) => self.tiles[index],
            None => Tile::Wall,
        }
    }

    pub fn is_passage(&self, cell: Cell) -> bool {
        self.tile_at(cell) == Tile::Passage
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.tile_at(cell) == Tile::Wall
    }

    /// Returns `false` and leaves the grid untouched when `cell` is out of bounds.
    pub fn set_passage(&mut self, cell: Cell) -> bool {
        self.set_tile(cell, Tile::Passage)
    }

    pub fn set_wall(&mut self, cell: Cell) -> bool {
        self.set_tile(cell, Tile::Wall)
    }

    pub fn passage_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Tile::Passage).count()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols).map(move |x| Cell { y: y as i32, x: x as i32 })
        })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y as usize) * self.cols + (cell.x as usize))
    }

    fn set_tile(&mut self, cell: Cell, tile: Tile) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        self.tiles[index] = tile;
        true
    }
}
