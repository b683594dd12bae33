//! Falling sand simulation engine.
//!
//! A fixed-size grid of cells, each holding one material, advanced one frame
//! at a time by density-driven swap rules. Row 0, column 0 and the last row
//! and column are Concrete for the lifetime of the grid, which lets every
//! rule read its one-cell neighbourhood without bounds juggling.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod error;
pub mod material;
pub mod rng;
pub mod rules;
pub mod simulation;
pub mod universe;

pub use brush::{inject, Brush, Buttons, PointerState};
pub use config::{EvaporationNeighbors, SimConfig};
pub use error::SimError;
pub use material::{Material, MaterialKind, Phase, Rgb};
pub use simulation::Simulation;
pub use universe::Universe;

use cell::Cell;
use rng::SimRng;

/// 2D grid of cells stored row-major, `y` growing downward.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with a Concrete border and an Air interior.
    ///
    /// # Errors
    ///
    /// [`SimError::GridTooSmall`] if either side is below 3.
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        if width < 3 || height < 3 {
            return Err(SimError::GridTooSmall { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                        Cell::concrete()
                    } else {
                        Cell::air()
                    }
                })
            })
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Strictly inside the border: the only cells input may write to.
    #[must_use]
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        x > 0 && (x as usize) < self.width - 1 && y > 0 && (y as usize) < self.height - 1
    }

    /// Flat index of an in-bounds position.
    ///
    /// # Panics
    ///
    /// If the position is outside the grid. The sweep only reaches this
    /// when the border invariant has been broken.
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    /// Out-of-bounds reads return Concrete, matching the border.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            Cell::concrete()
        }
    }

    #[must_use]
    pub fn kind(&self, x: i32, y: i32) -> MaterialKind {
        self.get(x, y).kind
    }

    /// Overwrite an interior cell with a fresh cell of `kind`. Border and
    /// out-of-bounds writes are no-ops; returns whether anything was written.
    pub fn set(&mut self, x: i32, y: i32, kind: MaterialKind) -> bool {
        if !self.is_interior(x, y) {
            return false;
        }
        let i = self.index(x, y);
        self.cells[i] = Cell::new(kind);
        true
    }

    /// Exchange the full state of two cells.
    ///
    /// # Panics
    ///
    /// If either position is outside the grid.
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    pub fn reset_flags(&mut self) {
        for cell in &mut self.cells {
            cell.updated = false;
        }
    }

    #[must_use]
    pub fn cell_color(&self, x: i32, y: i32) -> Rgb {
        self.kind(x, y).color()
    }

    /// Per-kind cell counts, indexed by `MaterialKind as usize`.
    #[must_use]
    pub fn census(&self) -> [usize; MaterialKind::COUNT] {
        let mut counts = [0usize; MaterialKind::COUNT];
        for cell in &self.cells {
            counts[cell.kind as usize] += 1;
        }
        counts
    }

    #[must_use]
    pub fn count(&self, kind: MaterialKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    /// Fill `out` with row-major RGBA8. Stops early if `out` is short.
    pub fn write_rgba(&self, out: &mut [u8]) {
        for (cell, px) in self.cells.iter().zip(out.chunks_exact_mut(4)) {
            px.copy_from_slice(&cell.kind.color().to_rgba());
        }
    }

    /// One pass of the movement rules over every interior cell.
    ///
    /// Columns are walked left-to-right or right-to-left on a coin flip per
    /// sweep, and each column is walked top-down or bottom-up on a fresh
    /// flip per column. Cells that are immobile or already flagged this
    /// sweep are skipped. Flags are left set; call [`Grid::reset_flags`]
    /// before the next sweep.
    pub fn sweep<R: SimRng + ?Sized>(&mut self, rng: &mut R, config: &SimConfig) {
        let w = self.width as i32;
        let h = self.height as i32;

        let columns: Box<dyn Iterator<Item = i32>> = if rng.coin() {
            Box::new(1..w - 1)
        } else {
            Box::new((1..w - 1).rev())
        };
        for x in columns {
            let rows: Box<dyn Iterator<Item = i32>> = if rng.coin() {
                Box::new((1..h - 1).rev())
            } else {
                Box::new(1..h - 1)
            };
            for y in rows {
                if !self.get(x, y).is_pending() {
                    continue;
                }
                let mut api = api::CellApi::new(self, x, y);
                rules::update_cell(&mut api, rng, config);
            }
        }
    }
}
