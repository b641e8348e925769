//! Disks bouncing in a box.
//!
//! `ballpit` simulates a fixed population of circular bodies inside a
//! rectangular arena, one frame per call. Each frame every body moves by its
//! velocity, reflects off the walls, and is resolved against every other
//! body it overlaps: velocities are exchanged along the line of centers
//! (mass proportional to radius), damped, and the pair is pushed apart.
//!
//! # Features
//!
//! - **Deterministic stepping**: fixed traversal order, no hidden randomness
//! - **Injectable randomness**: worlds are generated from any `rand::Rng`
//! - **Picking**: `hit_test` / `recolor` for pointer interaction
//! - **Observable**: monitor bounces and collisions via the `StepObserver` trait
//! - **Renderer agnostic**: draw through the `Canvas` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use ballpit::{World, WorldConfig, Vec2};
//!
//! let mut world: World<f32> = World::seeded(&WorldConfig::new(), 42).unwrap();
//! world.advance(60);
//! if let Some(id) = world.pick(Vec2::new(400.0, 300.0)) {
//!     world.recolor(id, ballpit::Color::RED);
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod color;
pub mod body;
pub mod collision;
pub mod world;
pub mod observer;
pub mod render;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use color::Color;
pub use body::{Body, BodyId};
pub use collision::{CollisionResolver, Contact, ImpulseModel, DEFAULT_DAMPING};
pub use world::{Bounds, World};
pub use observer::{Axis, NoOpStepObserver, StepObserver, StepStats, TracingObserver};
pub use render::Canvas;
pub use config::WorldConfig;
pub use error::WorldError;
