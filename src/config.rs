//! Configuration consumed once when a world is generated.

use crate::collision::{CollisionResolver, ImpulseModel};
use crate::error::WorldError;
use crate::float::Float;

/// Parameters for generating a randomized world.
///
/// # Builder Pattern
/// ```
/// use ballpit::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_body_count(25)
///     .with_arena(1024.0, 768.0)
///     .with_radius_range(5.0, 15.0)
///     .with_speed_range(-3.0, 3.0)
///     .with_damping(0.9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig<F: Float> {
    /// Number of bodies created. Default: 10.
    pub body_count: usize,
    /// Arena width. Default: 800.
    pub width: F,
    /// Arena height. Default: 600.
    pub height: F,
    /// Radii are drawn uniformly from `[min, max)`. Default: 10..30.
    pub radius_range: (F, F),
    /// Each velocity component is drawn uniformly from `[min, max)`.
    /// Default: -2..2.
    pub speed_range: (F, F),
    /// Collision response parameters.
    pub resolver: CollisionResolver<F>,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            body_count: 10,
            width: F::from_f64(800.0),
            height: F::from_f64(600.0),
            radius_range: (F::from_f64(10.0), F::from_f64(30.0)),
            speed_range: (F::from_f64(-2.0), F::from_f64(2.0)),
            resolver: CollisionResolver::new(),
        }
    }

    pub fn with_body_count(mut self, body_count: usize) -> Self {
        self.body_count = body_count;
        self
    }

    pub fn with_arena(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_radius_range(mut self, min: F, max: F) -> Self {
        self.radius_range = (min, max);
        self
    }

    pub fn with_speed_range(mut self, min: F, max: F) -> Self {
        self.speed_range = (min, max);
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.resolver.damping = damping;
        self
    }

    pub fn with_impulse_model(mut self, model: ImpulseModel) -> Self {
        self.resolver.model = model;
        self
    }

    /// Check every precondition generation relies on.
    ///
    /// The largest radius the range can produce must leave room for the
    /// whole disk on both axes, otherwise the spawn formula would place
    /// centers outside the arena.
    pub fn validate(&self) -> Result<(), WorldError> {
        validate_bounds(self.width, self.height)?;

        let (r_min, r_max) = self.radius_range;
        if !(r_min.is_finite() && r_max.is_finite()) || r_min <= F::zero() || r_min > r_max {
            return Err(WorldError::InvalidRadius);
        }
        check_fit(r_max, self.width, self.height)?;

        let (s_min, s_max) = self.speed_range;
        if !(s_min.is_finite() && s_max.is_finite()) || s_min > s_max {
            return Err(WorldError::InvalidSpeedRange);
        }

        validate_damping(self.resolver.damping)
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_bounds<F: Float>(width: F, height: F) -> Result<(), WorldError> {
    let zero = F::zero();
    if !(width.is_finite() && height.is_finite()) || width <= zero || height <= zero {
        return Err(WorldError::InvalidBounds);
    }
    Ok(())
}

pub(crate) fn check_fit<F: Float>(radius: F, width: F, height: F) -> Result<(), WorldError> {
    let diameter = F::two() * radius;
    if diameter >= width || diameter >= height {
        return Err(WorldError::ArenaTooSmall {
            diameter: diameter.to_f32(),
            width: width.to_f32(),
            height: height.to_f32(),
        });
    }
    Ok(())
}

pub(crate) fn validate_damping<F: Float>(damping: F) -> Result<(), WorldError> {
    if !damping.is_finite() || damping < F::zero() || damping > F::one() {
        return Err(WorldError::InvalidDamping);
    }
    Ok(())
}
