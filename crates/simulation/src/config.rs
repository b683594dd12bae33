//! Tunable simulation parameters.

use crate::error::SimError;

/// Largest brush radius a config may allow: every offset from a cell to the
/// brush centre stays representable in the grid's `i32` coordinates.
pub const MAX_BRUSH_RADIUS: u32 = i32::MAX as u32;

/// Which neighbours must be gas before a liquid cell may evaporate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EvaporationNeighbors {
    /// The cell above and the cell to the left.
    AboveAndLeft,
    /// The cell above and both horizontal neighbours.
    #[default]
    AboveAndSides,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid width in cells, border included.
    pub width: usize,
    /// Grid height in cells, border included.
    pub height: usize,
    /// Per-check chance that an exposed liquid cell turns to steam.
    pub evaporation_chance: f64,
    /// Per-check chance that a steam cell reverts to air.
    pub steam_decay_chance: f64,
    pub min_brush_radius: u32,
    pub max_brush_radius: u32,
    pub evaporation_neighbors: EvaporationNeighbors,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // 1280x720 window at 4 pixels per cell.
            width: 320,
            height: 180,
            evaporation_chance: 0.001,
            steam_decay_chance: 0.001,
            min_brush_radius: 1,
            max_brush_radius: 15,
            evaporation_neighbors: EvaporationNeighbors::default(),
            seed: 0x5EED,
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_evaporation_chance(mut self, chance: f64) -> Self {
        self.evaporation_chance = chance;
        self
    }

    #[must_use]
    pub fn with_steam_decay_chance(mut self, chance: f64) -> Self {
        self.steam_decay_chance = chance;
        self
    }

    /// Disable both phase transitions, leaving a swap-only simulation.
    #[must_use]
    pub fn without_transitions(self) -> Self {
        self.with_evaporation_chance(0.0).with_steam_decay_chance(0.0)
    }

    /// # Errors
    ///
    /// Returns the first parameter that cannot drive a simulation.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width < 3 || self.height < 3 {
            return Err(SimError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        check_probability("evaporation_chance", self.evaporation_chance)?;
        check_probability("steam_decay_chance", self.steam_decay_chance)?;
        if self.min_brush_radius < 1
            || self.min_brush_radius > self.max_brush_radius
            || self.max_brush_radius > MAX_BRUSH_RADIUS
        {
            return Err(SimError::InvalidBrushRange {
                min: self.min_brush_radius,
                max: self.max_brush_radius,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidProbability { name, value })
    }
}
