//! The arena: owns the bodies and advances them one frame at a time.

use alloc::collections::BTreeSet;
use alloc::vec::Vec as AllocVec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::body::{Body, BodyId};
use crate::collision::CollisionResolver;
use crate::color::Color;
use crate::config::{check_fit, validate_bounds, validate_damping, WorldConfig};
use crate::error::WorldError;
use crate::float::Float;
use crate::observer::{Axis, NoOpStepObserver, StepObserver};
use crate::render::Canvas;
use crate::vec::Vec2;

/// Arena rectangle with corners (0, 0) and (width, height).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds { width, height }
    }

    /// Whether the whole disk lies inside the arena, rim included.
    pub fn contains_disk(&self, center: Vec2<F>, radius: F) -> bool {
        center.x - radius >= F::zero()
            && center.x + radius <= self.width
            && center.y - radius >= F::zero()
            && center.y + radius <= self.height
    }
}

/// A fixed population of disks bouncing inside a rectangle.
///
/// The world is the only owner of its bodies. Callers advance it with
/// [`step`](World::step), find bodies under a point with
/// [`hit_test`](World::hit_test) and change colors with
/// [`recolor`](World::recolor); nothing else writes to a body.
#[derive(Clone, Debug)]
pub struct World<F: Float> {
    bounds: Bounds<F>,
    bodies: AllocVec<Body<F>>,
    resolver: CollisionResolver<F>,
    frame: u64,
}

impl<F: Float> World<F> {
    /// Generate `config.body_count` random bodies using `rng`.
    ///
    /// Per body the draws are, in order: radius, x, y, color, dx, dy. The
    /// center is placed so the full disk fits inside the arena.
    pub fn generate<R: Rng>(config: &WorldConfig<F>, rng: &mut R) -> Result<Self, WorldError> {
        config.validate()?;

        let (r_min, r_max) = config.radius_range;
        let (s_min, s_max) = config.speed_range;
        let (width, height) = (config.width, config.height);

        let mut bodies = AllocVec::with_capacity(config.body_count);
        for i in 0..config.body_count {
            let radius = F::sample_range(unit(rng), r_min, r_max);
            let x = unit::<F, _>(rng) * (width - F::two() * radius) + radius;
            let y = unit::<F, _>(rng) * (height - F::two() * radius) + radius;
            let color = Color::random(rng);
            let dx = F::sample_range(unit(rng), s_min, s_max);
            let dy = F::sample_range(unit(rng), s_min, s_max);
            bodies.push(Body::new(
                BodyId(i as u32),
                Vec2::new(x, y),
                Vec2::new(dx, dy),
                radius,
                color,
            ));
        }

        tracing::debug!(
            bodies = bodies.len(),
            width = width.to_f32(),
            height = height.to_f32(),
            "world generated"
        );

        Ok(World {
            bounds: Bounds::new(width, height),
            bodies,
            resolver: config.resolver,
            frame: 0,
        })
    }

    /// [`generate`](World::generate) with a `SmallRng` seeded from `seed`.
    pub fn seeded(config: &WorldConfig<F>, seed: u64) -> Result<Self, WorldError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }

    /// Build a world from explicit bodies, keeping their order and ids.
    ///
    /// Bodies may start outside the arena; the usual wall rule pushes them
    /// back. Every disk must still be small enough to fit.
    pub fn from_bodies<I>(bounds: Bounds<F>, bodies: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = Body<F>>,
    {
        validate_bounds(bounds.width, bounds.height)?;

        let bodies: AllocVec<Body<F>> = bodies.into_iter().collect();
        let mut seen = BTreeSet::new();
        for body in &bodies {
            if !body.radius.is_finite() || body.radius <= F::zero() {
                return Err(WorldError::InvalidRadius);
            }
            check_fit(body.radius, bounds.width, bounds.height)?;
            if !(body.position.is_finite() && body.velocity.is_finite()) {
                return Err(WorldError::NonFiniteBody { id: body.id.0 });
            }
            if !seen.insert(body.id) {
                return Err(WorldError::DuplicateBodyId { id: body.id.0 });
            }
        }

        tracing::debug!(bodies = bodies.len(), "world assembled from fixtures");

        Ok(World {
            bounds,
            bodies,
            resolver: CollisionResolver::new(),
            frame: 0,
        })
    }

    /// Replace the collision parameters.
    pub fn with_resolver(mut self, resolver: CollisionResolver<F>) -> Result<Self, WorldError> {
        validate_damping(resolver.damping)?;
        self.resolver = resolver;
        Ok(self)
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.step_with(&mut NoOpStepObserver);
    }

    /// Advance one frame, reporting events to `observer`.
    ///
    /// Bodies are visited in creation order. Each one moves, reflects off
    /// the walls, and is then resolved against every other body (later
    /// bodies have not moved yet this frame). Resolution writes in place, so
    /// every pair test sees the results of the ones before it and a pair can
    /// be resolved twice in one frame, once from each side.
    ///
    /// The default [`ImpulseModel::MomentumConserving`] exchange differs
    /// from the browser version's formula whenever radii differ, so a
    /// default world does not replay its trajectories. Build the world with
    /// [`ImpulseModel::Legacy`] (through [`WorldConfig::with_impulse_model`]
    /// or [`World::with_resolver`]) to reproduce them.
    ///
    /// [`ImpulseModel::MomentumConserving`]: crate::ImpulseModel::MomentumConserving
    /// [`ImpulseModel::Legacy`]: crate::ImpulseModel::Legacy
    pub fn step_with<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let Bounds { width, height } = self.bounds;
        let count = self.bodies.len();

        for i in 0..count {
            let body = &mut self.bodies[i];
            body.integrate();
            observer.on_integrate(body.id);
            let (hit_x, hit_y) = body.reflect(width, height);
            if hit_x {
                observer.on_wall_bounce(body.id, Axis::X);
            }
            if hit_y {
                observer.on_wall_bounce(body.id, Axis::Y);
            }

            for j in 0..count {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                let distance = a.position.distance(b.position);
                if distance < a.radius + b.radius {
                    let contact = self.resolver.resolve(a, b, distance);
                    observer.on_collision(a.id, b.id, &contact);
                }
            }
        }

        self.frame += 1;
        observer.on_step_complete(self.frame);
    }

    /// Run `frames` consecutive steps.
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// First body, in creation order, whose disk strictly contains `point`.
    pub fn hit_test(&self, point: Vec2<F>) -> Option<&Body<F>> {
        self.bodies.iter().find(|b| b.contains(point))
    }

    /// Id of the body [`hit_test`](World::hit_test) would return.
    pub fn pick(&self, point: Vec2<F>) -> Option<BodyId> {
        self.hit_test(point).map(Body::id)
    }

    /// Set the color of body `id`. Returns false, changing nothing, when no
    /// body has that id.
    pub fn recolor(&mut self, id: BodyId, color: Color) -> bool {
        match self.bodies.iter_mut().find(|b| b.id == id) {
            Some(body) => {
                tracing::trace!(body = id.0, color = %color, "recolor");
                body.color = color;
                true
            }
            None => false,
        }
    }

    /// Paint every body onto `canvas`, in creation order.
    pub fn render<C: Canvas<F> + ?Sized>(&self, canvas: &mut C) {
        for body in &self.bodies {
            canvas.fill_circle(body.position, body.radius, body.color);
        }
    }

    /// Sum of `0.5 * r * |v|^2`, with mass taken as radius.
    pub fn kinetic_energy(&self) -> F {
        self.bodies
            .iter()
            .fold(F::zero(), |acc, b| acc + F::half() * b.mass() * b.velocity.length_sq())
    }

    pub fn bodies(&self) -> &[Body<F>] { &self.bodies }
    pub fn body(&self, id: BodyId) -> Option<&Body<F>> { self.bodies.iter().find(|b| b.id == id) }
    pub fn len(&self) -> usize { self.bodies.len() }
    pub fn is_empty(&self) -> bool { self.bodies.is_empty() }
    pub fn bounds(&self) -> Bounds<F> { self.bounds }
    pub fn resolver(&self) -> &CollisionResolver<F> { &self.resolver }

    /// Number of completed steps.
    pub fn frame(&self) -> u64 { self.frame }
}

/// Uniform sample in [0, 1).
fn unit<F: Float, R: Rng>(rng: &mut R) -> F {
    F::from_f32(rng.random::<f32>())
}

/// Two distinct mutable elements of a slice, in the requested order.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = items.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
