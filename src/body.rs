//! Circular point-mass bodies.

use core::fmt;

use crate::color::Color;
use crate::float::Float;
use crate::vec::Vec2;

/// Stable identity of a body within its world. Never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A disk moving with constant per-step displacement until it hits
/// something. No spin; mass is taken proportional to radius.
///
/// Only [`World`](crate::World) mutates a body once it has been handed
/// over, so the fields are read through accessors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body<F: Float> {
    pub(crate) id: BodyId,
    pub(crate) position: Vec2<F>,
    pub(crate) velocity: Vec2<F>,
    pub(crate) radius: F,
    pub(crate) color: Color,
}

impl<F: Float> Body<F> {
    pub fn new(id: BodyId, position: Vec2<F>, velocity: Vec2<F>, radius: F, color: Color) -> Self {
        Body { id, position, velocity, radius, color }
    }

    pub fn id(&self) -> BodyId { self.id }
    pub fn position(&self) -> Vec2<F> { self.position }
    pub fn velocity(&self) -> Vec2<F> { self.velocity }
    pub fn radius(&self) -> F { self.radius }
    pub fn color(&self) -> Color { self.color }

    /// Magnitude of the per-step displacement.
    pub fn speed(&self) -> F {
        self.velocity.length()
    }

    /// Mass used by collision exchange.
    pub fn mass(&self) -> F {
        self.radius
    }

    /// Strict containment: a point exactly on the rim is outside.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        self.position.distance(point) < self.radius
    }

    /// `r_a + r_b - distance`; positive when the disks intersect.
    pub fn overlap(&self, other: &Body<F>) -> F {
        self.radius + other.radius - self.position.distance(other.position)
    }

    /// Euler step with unit time: position += velocity.
    pub(crate) fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Flip the velocity component of each axis whose wall the disk
    /// crosses. Position is left where it is.
    pub(crate) fn reflect(&mut self, width: F, height: F) -> (bool, bool) {
        let zero = F::zero();
        let hit_x = self.position.x + self.radius > width || self.position.x - self.radius < zero;
        if hit_x {
            self.velocity.x = -self.velocity.x;
        }
        let hit_y = self.position.y + self.radius > height || self.position.y - self.radius < zero;
        if hit_y {
            self.velocity.y = -self.velocity.y;
        }
        (hit_x, hit_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f64, y: f64, dx: f64, dy: f64, r: f64) -> Body<f64> {
        Body::new(BodyId(0), Vec2::new(x, y), Vec2::new(dx, dy), r, Color::BLACK)
    }

    #[test]
    fn integrate_adds_velocity() {
        let mut b = body(10.0, 20.0, 1.5, -2.0, 5.0);
        b.integrate();
        assert_eq!(b.position(), Vec2::new(11.5, 18.0));
    }

    #[test]
    fn reflect_flips_only_crossing_axis() {
        let mut b = body(3.0, 50.0, -1.0, 1.0, 5.0);
        let hits = b.reflect(100.0, 100.0);
        assert_eq!(hits, (true, false));
        assert_eq!(b.velocity(), Vec2::new(1.0, 1.0));
        // Position untouched.
        assert_eq!(b.position(), Vec2::new(3.0, 50.0));
    }

    #[test]
    fn reflect_both_axes_in_corner() {
        let mut b = body(98.0, 98.0, 2.0, 3.0, 5.0);
        assert_eq!(b.reflect(100.0, 100.0), (true, true));
        assert_eq!(b.velocity(), Vec2::new(-2.0, -3.0));
    }

    #[test]
    fn contains_is_strict() {
        let b = body(0.0, 0.0, 0.0, 0.0, 5.0);
        assert!(b.contains(Vec2::new(4.9, 0.0)));
        assert!(!b.contains(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn overlap_sign() {
        let a = body(0.0, 0.0, 0.0, 0.0, 10.0);
        let b = body(15.0, 0.0, 0.0, 0.0, 10.0);
        let c = body(25.0, 0.0, 0.0, 0.0, 10.0);
        assert!((a.overlap(&b) - 5.0).abs() < 1e-12);
        assert!(a.overlap(&c) < 0.0);
    }
}
