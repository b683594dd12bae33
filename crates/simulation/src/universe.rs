//! Browser-facing wrapper: owns a [`Simulation`] and an RGBA frame buffer
//! that JS reads straight out of WASM memory after each tick.

use wasm_bindgen::prelude::*;

use crate::brush::{Buttons, PointerState};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::material::MaterialKind;
use crate::simulation::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    pointer: Option<PointerState>,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// Rejects grids smaller than 3x3.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, seed: u64) -> Result<Universe, JsError> {
        let config = SimConfig::default()
            .with_size(width as usize, height as usize)
            .with_seed(seed);
        Ok(Self::from_config(config)?)
    }

    /// Run one frame with the last pointer state, then repaint the buffer.
    pub fn tick(&mut self) {
        self.sim.frame(self.pointer.as_ref());
        self.refresh_pixels();
    }

    /// Record pointer state in window pixels. `buttons` is a bit mask
    /// (1 primary, 2 secondary, 4 tertiary); `wheel` is the cumulative
    /// wheel position reported by the browser.
    pub fn set_pointer(&mut self, px: f64, py: f64, scale: u32, buttons: u8, wheel: i32) {
        self.sim.brush_mut().observe_wheel(wheel);
        self.pointer = Some(PointerState::from_pixels(
            px,
            py,
            scale,
            Buttons::from_mask(buttons),
        ));
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Paint directly in grid coordinates. Unknown material ids paint nothing.
    pub fn paint(&mut self, material: u8, x: i32, y: i32, radius: u32) -> u32 {
        let kind = match MaterialKind::try_from(material) {
            Ok(kind) => kind,
            Err(err) => {
                log::warn!("paint ignored: {err}");
                return 0;
            }
        };
        let painted = self.sim.inject(kind, x, y, radius);
        self.refresh_pixels();
        painted as u32
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sim.dimensions().0 as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sim.dimensions().1 as u32
    }

    #[must_use]
    pub fn brush_radius(&self) -> u32 {
        self.sim.brush().radius()
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.sim.frame_count()
    }

    #[must_use]
    pub fn pixels_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    #[must_use]
    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

impl Universe {
    /// # Errors
    ///
    /// Whatever [`SimConfig::validate`] rejects.
    pub fn from_config(config: SimConfig) -> Result<Self, SimError> {
        let sim = Simulation::new(config)?;
        let (width, height) = sim.dimensions();
        let mut universe = Self {
            pixels: vec![0; width * height * 4],
            sim,
            pointer: None,
        };
        universe.refresh_pixels();
        Ok(universe)
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn refresh_pixels(&mut self) {
        self.sim.grid().write_rgba(&mut self.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(width: usize, height: usize) -> Universe {
        Universe::from_config(SimConfig::default().with_size(width, height).with_seed(1)).unwrap()
    }

    #[test]
    fn buffer_matches_grid() {
        let universe = universe(8, 6);
        assert_eq!(universe.width(), 8);
        assert_eq!(universe.height(), 6);
        assert_eq!(universe.pixels_len(), 8 * 6 * 4);
        // Top-left is border concrete, (1, 1) is air.
        assert_eq!(&universe.pixels()[0..4], &[128, 128, 128, 255]);
        assert_eq!(&universe.pixels()[(8 + 1) * 4..(8 + 2) * 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn paint_refreshes_buffer_and_ignores_unknown_ids() {
        let mut universe = universe(8, 8);
        assert_eq!(universe.paint(2, 3, 3, 1), 1);
        let i = (3 * 8 + 3) * 4;
        assert_eq!(&universe.pixels()[i..i + 4], &[0, 0, 255, 255]);
        assert_eq!(universe.paint(42, 3, 3, 1), 0);
    }

    #[test]
    fn pointer_paints_on_tick() {
        let mut universe = universe(16, 16);
        // Pixel (20, 20) at scale 4 is cell (5, 5); middle button = concrete.
        universe.set_pointer(20.0, 20.0, 4, 0b100, 0);
        universe.tick();
        assert_eq!(
            universe.simulation().grid().kind(5, 5),
            MaterialKind::Concrete
        );
        assert_eq!(universe.frame_count(), 1);

        universe.clear_pointer();
        universe.tick();
        assert_eq!(universe.simulation().grid().count(MaterialKind::Concrete), 60 + 1);
    }

    #[test]
    fn out_of_range_input_is_skipped() {
        let mut universe = universe(8, 8);
        assert_eq!(universe.paint(1, i32::MAX, 3, 2), 0);
        assert_eq!(universe.paint(2, i32::MIN, i32::MIN, u32::MAX), 0);

        universe.set_pointer(1e12, 1e12, 4, 0b001, 0);
        universe.tick();
        universe.set_pointer(-1e12, 8.0, 1, 0b010, 0);
        universe.tick();
        assert_eq!(universe.simulation().grid().count(MaterialKind::Air), 36);
    }

    #[test]
    fn wheel_grows_brush() {
        let mut universe = universe(16, 16);
        universe.set_pointer(0.0, 0.0, 4, 0, 3);
        universe.set_pointer(0.0, 0.0, 4, 0, 6);
        assert_eq!(universe.brush_radius(), 3);
    }
}
