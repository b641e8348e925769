//! Pairwise disk collision response: normal-axis impulse exchange,
//! damping, and de-penetration.

use crate::body::Body;
use crate::float::Float;
use crate::vec::Vec2;

/// Velocity multiplier applied to both bodies after every collision.
pub const DEFAULT_DAMPING: f64 = 0.8;

/// Formula used for the 1-D velocity exchange along the collision normal.
///
/// Both variants take mass proportional to radius and swap velocities
/// exactly when the radii are equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpulseModel {
    /// Textbook 1-D elastic collision. Conserves `r_a*v_a + r_b*v_b` and
    /// kinetic energy along the normal for any pair of radii.
    #[default]
    MomentumConserving,
    /// `v1' = ((ra-rb)v1 + (ra+rb)v2)/(ra+rb)`,
    /// `v2' = ((ra+rb)v1 + (rb-ra)v2)/(ra+rb)`. Reproduces the trajectories
    /// of the browser version; not momentum conserving for unequal radii.
    Legacy,
}

impl ImpulseModel {
    /// Post-collision normal velocities for masses `ra`, `rb` moving at
    /// `v1`, `v2` along the normal.
    pub fn exchange<F: Float>(self, ra: F, rb: F, v1: F, v2: F) -> (F, F) {
        let total = ra + rb;
        match self {
            ImpulseModel::MomentumConserving => (
                ((ra - rb) * v1 + F::two() * rb * v2) / total,
                (F::two() * ra * v1 + (rb - ra) * v2) / total,
            ),
            ImpulseModel::Legacy => (
                ((ra - rb) * v1 + (rb + ra) * v2) / total,
                ((ra + rb) * v1 + (rb - ra) * v2) / total,
            ),
        }
    }
}

/// Geometry of one resolved contact, reported to observers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    /// `r_a + r_b - distance` before correction.
    pub overlap: F,
    /// Angle of the line of centers, from A toward B.
    pub angle: F,
    /// Unit vector `(cos angle, sin angle)`.
    pub normal: Vec2<F>,
}

/// Resolves overlapping disk pairs. Holds parameters only; every call is
/// independent of earlier ones.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionResolver<F: Float> {
    /// Multiplier on both final velocities, in [0, 1].
    pub damping: F,
    pub model: ImpulseModel,
}

impl<F: Float> CollisionResolver<F> {
    pub fn new() -> Self {
        CollisionResolver {
            damping: F::from_f64(DEFAULT_DAMPING),
            model: ImpulseModel::default(),
        }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_model(mut self, model: ImpulseModel) -> Self {
        self.model = model;
        self
    }

    /// Normal-axis exchange for this resolver's model, before damping.
    pub fn exchange(&self, ra: F, rb: F, v1: F, v2: F) -> (F, F) {
        self.model.exchange(ra, rb, v1, v2)
    }

    /// Resolve the overlap between `a` and `b`, whose centers are
    /// `distance` apart.
    ///
    /// Both velocities are rotated into the frame of the line of centers,
    /// the normal components are exchanged, the tangential components kept,
    /// and the result rotated back and damped. Each body is then pushed
    /// by the full overlap along the normal, A backward and B forward.
    ///
    /// Coincident centers give a zero angle, so the pair is separated along
    /// +x. The call does not check whether the pair actually overlaps.
    pub fn resolve(&self, a: &mut Body<F>, b: &mut Body<F>, distance: F) -> Contact<F> {
        let overlap = a.radius + b.radius - distance;
        let angle = (b.position - a.position).angle();
        let sin = angle.sin();
        let cos = angle.cos();

        let u1 = a.velocity.to_frame(cos, sin);
        let u2 = b.velocity.to_frame(cos, sin);

        let (n1, n2) = self.exchange(a.radius, b.radius, u1.x, u2.x);

        a.velocity = Vec2::new(n1, u1.y).from_frame(cos, sin).scale(self.damping);
        b.velocity = Vec2::new(n2, u2.y).from_frame(cos, sin).scale(self.damping);

        let shift = Vec2::new(overlap * cos, overlap * sin);
        a.position -= shift;
        b.position += shift;

        Contact { overlap, angle, normal: Vec2::new(cos, sin) }
    }
}

impl<F: Float> Default for CollisionResolver<F> {
    fn default() -> Self {
        Self::new()
    }
}
