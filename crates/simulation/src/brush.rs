//! Input injection: painting material onto air cells with a round brush.

use crate::config::SimConfig;
use crate::material::MaterialKind;
use crate::Grid;

/// Paint `kind` onto every Air cell strictly inside the border whose
/// Euclidean distance from `(x, y)` is strictly less than `radius`.
/// Non-air cells are never touched. Returns the number of cells written.
///
/// The brush's bounding box is clipped to the interior before walking it,
/// so centres and radii far off the grid cost nothing and never overflow.
pub fn inject(grid: &mut Grid, kind: MaterialKind, x: i32, y: i32, radius: u32) -> usize {
    let r = i64::from(radius);
    let (x, y) = (i64::from(x), i64::from(y));
    let (w, h) = (grid.width as i64, grid.height as i64);
    let columns = (x - r).max(1)..=(x + r).min(w - 2);
    let rows = (y - r).max(1)..=(y + r).min(h - 2);

    let mut written = 0;
    for cy in rows {
        for cx in columns.clone() {
            if !within_radius(cx - x, cy - y, r) {
                continue;
            }
            // Clipped to the interior, so both fit the grid's i32 space.
            let (cx, cy) = (cx as i32, cy as i32);
            if grid.kind(cx, cy) == MaterialKind::Air && grid.set(cx, cy, kind) {
                written += 1;
            }
        }
    }
    written
}

/// `dx² + dy² < r²`. Offsets from a clipped cell to a far-off centre can
/// approach 2^32, so the squares are taken in `i128`.
fn within_radius(dx: i64, dy: i64, r: i64) -> bool {
    let sq = |v: i64| i128::from(v) * i128::from(v);
    sq(dx) + sq(dy) < sq(r)
}

/// Pointer buttons held this frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Buttons {
    pub primary: bool,
    pub secondary: bool,
    pub tertiary: bool,
}

impl Buttons {
    /// Bit 0 primary, bit 1 secondary, bit 2 tertiary.
    #[must_use]
    pub fn from_mask(mask: u8) -> Self {
        Self {
            primary: mask & 0b001 != 0,
            secondary: mask & 0b010 != 0,
            tertiary: mask & 0b100 != 0,
        }
    }

    /// Material painted this frame. Primary wins over secondary, secondary
    /// over tertiary.
    #[must_use]
    pub fn material(self) -> Option<MaterialKind> {
        if self.primary {
            Some(MaterialKind::Sand)
        } else if self.secondary {
            Some(MaterialKind::Water)
        } else if self.tertiary {
            Some(MaterialKind::Concrete)
        } else {
            None
        }
    }
}

/// Pointer position in grid coordinates plus button state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub buttons: Buttons,
}

impl PointerState {
    #[must_use]
    pub fn new(x: i32, y: i32, buttons: Buttons) -> Self {
        Self { x, y, buttons }
    }

    /// Map window pixels to cells, `scale` pixels per cell.
    #[must_use]
    pub fn from_pixels(px: f64, py: f64, scale: u32, buttons: Buttons) -> Self {
        let scale = f64::from(scale.max(1));
        Self {
            x: (px / scale).floor() as i32,
            y: (py / scale).floor() as i32,
            buttons,
        }
    }
}

/// Brush radius state persisted across frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    radius: u32,
    min_radius: u32,
    max_radius: u32,
    last_wheel: i32,
}

impl Brush {
    /// Starts at the smallest radius.
    #[must_use]
    pub fn new(min_radius: u32, max_radius: u32) -> Self {
        Self {
            radius: min_radius,
            min_radius,
            max_radius,
            last_wheel: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.min_brush_radius, config.max_brush_radius)
    }

    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[must_use]
    pub fn clamp(&self, radius: u32) -> u32 {
        radius.clamp(self.min_radius, self.max_radius)
    }

    pub fn set_radius(&mut self, radius: u32) {
        let clamped = self.clamp(radius);
        if clamped != self.radius {
            log::debug!("brush radius {} -> {}", self.radius, clamped);
            self.radius = clamped;
        }
    }

    /// One step of radius per scroll tick, positive ticks growing the brush.
    pub fn scroll(&mut self, ticks: i32) {
        let target = i64::from(self.radius) + i64::from(ticks);
        let target = target.clamp(i64::from(self.min_radius), i64::from(self.max_radius));
        self.set_radius(target as u32);
    }

    /// Feed the platform's cumulative wheel value. The radius moves by at
    /// most one per call, in the direction the wheel moved since last call.
    pub fn observe_wheel(&mut self, total: i32) {
        let delta = total.cmp(&self.last_wheel) as i32;
        self.last_wheel = total;
        self.scroll(delta);
    }

    /// Paint with the pointer's selected material, if any button is held.
    pub fn apply(&self, grid: &mut Grid, pointer: &PointerState) -> usize {
        match pointer.buttons.material() {
            Some(kind) => inject(grid, kind, pointer.x, pointer.y, self.radius),
            None => 0,
        }
    }
}
