//! Frame loop owner: grid, random source, configuration and brush.

use rand::SeedableRng;

use crate::brush::{self, Brush, PointerState};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::material::{MaterialKind, Rgb};
use crate::rng::SimulationRng;
use crate::Grid;

/// Everything needed to advance the world one frame at a time. The grid is
/// mutated only by [`Simulation::step`] and the injection methods, never
/// concurrently; readers borrow it between frames.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    rng: SimulationRng,
    config: SimConfig,
    brush: Brush,
    frame: u64,
}

impl Simulation {
    /// # Errors
    ///
    /// Whatever [`SimConfig::validate`] rejects.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        log::debug!(
            "created {}x{} simulation, seed {:#x}",
            config.width,
            config.height,
            config.seed
        );
        Ok(Self {
            grid,
            rng: SimulationRng::seed_from_u64(config.seed),
            brush: Brush::from_config(&config),
            config,
            frame: 0,
        })
    }

    /// Advance exactly one frame: one sweep, then clear every update flag.
    pub fn step(&mut self) {
        self.grid.sweep(&mut self.rng, &self.config);
        self.grid.reset_flags();
        self.frame += 1;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("frame {}: census {:?}", self.frame, self.grid.census());
        }
    }

    /// A full interactive frame: step, then paint whatever the pointer
    /// holds. Returns the number of cells painted.
    pub fn frame(&mut self, pointer: Option<&PointerState>) -> usize {
        self.step();
        pointer.map_or(0, |p| self.brush.apply(&mut self.grid, p))
    }

    /// Paint `kind` in a disc around `(x, y)`, radius clamped to the
    /// configured brush range. Only Air cells inside the border change.
    pub fn inject(&mut self, kind: MaterialKind, x: i32, y: i32, radius: u32) -> usize {
        let radius = self.brush.clamp(radius);
        brush::inject(&mut self.grid, kind, x, y, radius)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scripted setups; the border is still
    /// protected because [`Grid::set`] ignores it.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    #[must_use]
    pub fn cell_color(&self, x: i32, y: i32) -> Rgb {
        self.grid.cell_color(x, y)
    }

    /// Frames stepped since construction.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
