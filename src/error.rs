//! Error types for world construction.

use core::fmt;

/// Errors that can occur while building a world.
///
/// Stepping, picking and recoloring never fail; only a malformed
/// configuration is rejected, before any body exists.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    /// Arena width and height must be positive and finite.
    InvalidBounds,
    /// Radii must be positive and finite, with min <= max.
    InvalidRadius,
    /// The largest body cannot fit inside the arena.
    ArenaTooSmall { diameter: f32, width: f32, height: f32 },
    /// Speed range must be finite, with min <= max.
    InvalidSpeedRange,
    /// Collision damping must be in [0, 1].
    InvalidDamping,
    /// Two bodies share an id.
    DuplicateBodyId { id: u32 },
    /// A body's position or velocity is not finite.
    NonFiniteBody { id: u32 },
    /// A color string is not `#rgb` or `#rrggbb`.
    InvalidColor,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::InvalidBounds => write!(f, "arena width and height must be positive and finite"),
            WorldError::InvalidRadius => write!(f, "radius must be positive and finite (min <= max)"),
            WorldError::ArenaTooSmall { diameter, width, height } => {
                write!(f, "body diameter {} does not fit in a {}x{} arena", diameter, width, height)
            }
            WorldError::InvalidSpeedRange => write!(f, "speed range must be finite (min <= max)"),
            WorldError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            WorldError::DuplicateBodyId { id } => write!(f, "duplicate body id {}", id),
            WorldError::NonFiniteBody { id } => write!(f, "body {} has a non-finite position or velocity", id),
            WorldError::InvalidColor => write!(f, "color must be #rgb or #rrggbb"),
        }
    }
}

impl core::error::Error for WorldError {}
