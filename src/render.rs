//! Drawing contract between a world and whatever displays it.

use crate::color::Color;
use crate::float::Float;
use crate::vec::Vec2;

/// A surface that can paint filled disks.
///
/// [`World::render`](crate::World::render) calls this once per body, in
/// creation order, so later bodies paint over earlier ones.
pub trait Canvas<F: Float> {
    fn fill_circle(&mut self, center: Vec2<F>, radius: F, color: Color);
}
