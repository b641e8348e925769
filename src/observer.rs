//! Step observer trait for monitoring what happens inside a world step.

use crate::body::BodyId;
use crate::collision::Contact;
use crate::float::Float;

/// Arena axis whose wall a body crossed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Trait for observing world steps.
///
/// Implement this to monitor the simulation (debug overlays, sound cues on
/// impact, counters in tests). All methods have default no-op
/// implementations.
pub trait StepObserver<F: Float> {
    /// Called after a body moved by its velocity, before the wall test.
    fn on_integrate(&mut self, _body: BodyId) {}

    /// Called after a body's velocity was reflected off a wall.
    fn on_wall_bounce(&mut self, _body: BodyId, _axis: Axis) {}

    /// Called after an overlapping pair was resolved.
    fn on_collision(&mut self, _a: BodyId, _b: BodyId, _contact: &Contact<F>) {}

    /// Called when a step is fully complete. `frame` counts completed steps.
    fn on_step_complete(&mut self, _frame: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Counts events, per step and in total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: u64,
    pub integrations: u64,
    pub wall_bounces: u64,
    pub collisions: u64,
}

impl<F: Float> StepObserver<F> for StepStats {
    fn on_integrate(&mut self, _body: BodyId) {
        self.integrations += 1;
    }

    fn on_wall_bounce(&mut self, _body: BodyId, _axis: Axis) {
        self.wall_bounces += 1;
    }

    fn on_collision(&mut self, _a: BodyId, _b: BodyId, _contact: &Contact<F>) {
        self.collisions += 1;
    }

    fn on_step_complete(&mut self, _frame: u64) {
        self.steps += 1;
    }
}

/// Emits `tracing` events: one `trace` per bounce or collision and a
/// `debug` summary per step.
#[derive(Debug, Default)]
pub struct TracingObserver {
    bounces: u32,
    collisions: u32,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall bounces seen since the last completed step.
    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Collisions resolved since the last completed step.
    pub fn collisions(&self) -> u32 {
        self.collisions
    }
}

impl<F: Float> StepObserver<F> for TracingObserver {
    fn on_wall_bounce(&mut self, body: BodyId, axis: Axis) {
        self.bounces += 1;
        tracing::trace!(body = body.0, axis = ?axis, "wall bounce");
    }

    fn on_collision(&mut self, a: BodyId, b: BodyId, contact: &Contact<F>) {
        self.collisions += 1;
        tracing::trace!(
            a = a.0,
            b = b.0,
            overlap = contact.overlap.to_f32(),
            angle = contact.angle.to_f32(),
            "collision resolved"
        );
    }

    fn on_step_complete(&mut self, frame: u64) {
        tracing::debug!(frame, bounces = self.bounces, collisions = self.collisions, "step complete");
        self.bounces = 0;
        self.collisions = 0;
    }
}
