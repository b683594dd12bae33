//! Per-position grid state.

use std::fmt;

use crate::material::{Material, MaterialKind};

/// Two-byte grid cell. Swapping two cells exchanges the whole value, so the
/// `updated` flag always travels with the material it belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub kind: MaterialKind,
    /// Set once the cell has been moved or transformed in the current sweep.
    pub updated: bool,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Cell {
    #[must_use]
    pub const fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            updated: false,
        }
    }

    #[must_use]
    pub const fn air() -> Self {
        Self::new(MaterialKind::Air)
    }

    #[must_use]
    pub const fn concrete() -> Self {
        Self::new(MaterialKind::Concrete)
    }

    #[must_use]
    pub const fn material(self) -> &'static Material {
        self.kind.material()
    }

    /// Whether the sweep should evaluate rules for this cell.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        !self.updated && self.kind.is_mobile()
    }
}
