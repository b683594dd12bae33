//! Relative-offset view of the grid around the cell being updated.

use crate::cell::Cell;
use crate::material::{Material, MaterialKind};
use crate::Grid;

/// Offsets are `(dx, dy)` from the subject cell, `dy = 1` being the cell
/// below. Every read and write goes through [`Grid::index`], so touching a
/// cell outside the grid panics rather than reading made-up content.
#[derive(Debug)]
pub struct CellApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> CellApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.grid.cells[self.grid.index(self.x + dx, self.y + dy)]
    }

    #[must_use]
    pub fn material(&self, dx: i32, dy: i32) -> &'static Material {
        self.get(dx, dy).material()
    }

    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        self.get(0, 0).kind
    }

    /// The subject cell's own material.
    #[must_use]
    pub fn me(&self) -> &'static Material {
        self.material(0, 0)
    }

    /// True if the neighbour at the offset is strictly lighter than this cell.
    #[must_use]
    pub fn lighter(&self, dx: i32, dy: i32) -> bool {
        self.material(dx, dy).density < self.me().density
    }

    pub fn mark_updated(&mut self) {
        let i = self.grid.index(self.x, self.y);
        self.grid.cells[i].updated = true;
    }

    /// Exchange the subject cell with a neighbour. The view keeps pointing at
    /// the original position, which now holds the displaced neighbour.
    pub fn swap(&mut self, dx: i32, dy: i32) {
        self.grid.swap((self.x, self.y), (self.x + dx, self.y + dy));
    }

    /// Change the subject cell's material in place, keeping its flag.
    pub fn transform(&mut self, kind: MaterialKind) {
        let i = self.grid.index(self.x, self.y);
        self.grid.cells[i].kind = kind;
    }
}
