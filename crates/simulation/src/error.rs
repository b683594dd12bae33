//! Errors raised while building a simulation or decoding boundary input.
//!
//! Nothing in the per-frame path returns one of these: bad coordinates are
//! clipped, and a broken grid invariant panics instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("grid must be at least 3x3 to hold a border and one interior cell, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("brush radius range {min}..={max} is empty, starts below 1 or ends past i32::MAX")]
    InvalidBrushRange { min: u32, max: u32 },

    #[error("unknown material id {0}")]
    UnknownMaterial(u8),
}
