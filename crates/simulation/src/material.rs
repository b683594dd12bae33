//! Material registry: the closed catalog of kinds and their fixed properties.

use std::fmt;

use crate::error::SimError;

/// Physical phase; decides which rules a cell takes part in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

/// 8-bit RGB render colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA8, the layout renderers upload.
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Immutable physical descriptor shared by every cell of one kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Material {
    /// Relative weight. A cell sinks into any neighbour of strictly lower density.
    pub density: u8,
    pub color: Rgb,
    pub phase: Phase,
    /// Immobile materials are skipped by the sweep entirely.
    pub mobile: bool,
}

const AIR: Material = Material {
    density: 1,
    color: Rgb::new(0, 0, 0),
    phase: Phase::Gas,
    mobile: true,
};

const SAND: Material = Material {
    density: 3,
    color: Rgb::new(255, 255, 0),
    phase: Phase::Solid,
    mobile: true,
};

const WATER: Material = Material {
    density: 2,
    color: Rgb::new(0, 0, 255),
    phase: Phase::Liquid,
    mobile: true,
};

const CONCRETE: Material = Material {
    density: 99,
    color: Rgb::new(128, 128, 128),
    phase: Phase::Solid,
    mobile: false,
};

const STEAM: Material = Material {
    density: 0,
    color: Rgb::new(240, 248, 255),
    phase: Phase::Gas,
    mobile: true,
};

/// Discriminants double as census indices and as the ids used at the WASM
/// boundary, so they must stay dense and stable.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MaterialKind {
    #[default]
    Air = 0,
    Sand = 1,
    Water = 2,
    Concrete = 3,
    Steam = 4,
}

impl MaterialKind {
    pub const COUNT: usize = 5;

    pub const ALL: [MaterialKind; Self::COUNT] = [
        Self::Air,
        Self::Sand,
        Self::Water,
        Self::Concrete,
        Self::Steam,
    ];

    /// Catalog lookup. Returns a `'static` reference, never a copy per cell.
    #[must_use]
    pub const fn material(self) -> &'static Material {
        match self {
            Self::Air => &AIR,
            Self::Sand => &SAND,
            Self::Water => &WATER,
            Self::Concrete => &CONCRETE,
            Self::Steam => &STEAM,
        }
    }

    #[must_use]
    pub const fn density(self) -> u8 {
        self.material().density
    }

    #[must_use]
    pub const fn phase(self) -> Phase {
        self.material().phase
    }

    #[must_use]
    pub const fn color(self) -> Rgb {
        self.material().color
    }

    #[must_use]
    pub const fn is_mobile(self) -> bool {
        self.material().mobile
    }

    #[must_use]
    pub fn is_gas(self) -> bool {
        self.phase() == Phase::Gas
    }
}

impl TryFrom<u8> for MaterialKind {
    type Error = SimError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(SimError::UnknownMaterial(id))
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "Air"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Concrete => write!(f, "Concrete"),
            Self::Steam => write!(f, "Steam"),
        }
    }
}
