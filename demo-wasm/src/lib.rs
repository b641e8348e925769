use ballpit::{BodyId, Canvas, Color, TracingObserver, Vec2, World, WorldConfig};
use wasm_bindgen::prelude::*;

/// Flattens draw calls into `[x, y, radius, rgb, ...]` for the JS side.
struct FlatCanvas<'a>(&'a mut Vec<f32>);

impl Canvas<f32> for FlatCanvas<'_> {
    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Color) {
        self.0.extend_from_slice(&[center.x, center.y, radius, color.to_u32() as f32]);
    }
}

// ---- Bouncing Balls Demo ----

#[wasm_bindgen]
pub struct BallsDemo {
    world: World<f32>,
    selected: Option<BodyId>,
    tracer: Option<TracingObserver>,
}

#[wasm_bindgen]
impl BallsDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Result<BallsDemo, JsError> {
        let config = WorldConfig::new()
            .with_arena(width, height)
            .with_body_count(count);
        let world = World::seeded(&config, seed).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(BallsDemo { world, selected: None, tracer: None })
    }

    /// One animation frame; call from `requestAnimationFrame`.
    pub fn update(&mut self) {
        match self.tracer.as_mut() {
            Some(tracer) => self.world.step_with(tracer),
            None => self.world.step(),
        }
    }

    /// Toggle per-step `tracing` events.
    pub fn set_debug(&mut self, on: bool) {
        self.tracer = on.then(TracingObserver::new);
    }

    /// Returns flat [x0, y0, r0, rgb0, x1, ...] in draw order
    pub fn draw_list(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.world.len() * 4);
        self.world.render(&mut FlatCanvas(&mut out));
        out
    }

    /// Pointer down: select the body under the cursor. Returns its id or -1.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> i32 {
        self.selected = self.world.pick(Vec2::new(x, y));
        self.selected.map_or(-1, |id| id.0 as i32)
    }

    pub fn pointer_up(&mut self) {
        self.selected = None;
    }

    /// Menu anchor for the selected body: [x + radius, y], or empty.
    pub fn menu_anchor(&self) -> Vec<f32> {
        self.selected
            .and_then(|id| self.world.body(id))
            .map(|b| vec![b.position().x + b.radius(), b.position().y])
            .unwrap_or_default()
    }

    /// Palette as `#rrggbb` strings, in menu order.
    pub fn palette() -> Vec<String> {
        Color::PALETTE.iter().map(|c| c.to_string()).collect()
    }

    /// Recolor the selected body. Accepts `#rgb` or `#rrggbb`.
    pub fn choose_color(&mut self, color: &str) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        match color.parse::<Color>() {
            Ok(c) => self.world.recolor(id, c),
            Err(_) => false,
        }
    }

    pub fn body_count(&self) -> usize {
        self.world.len()
    }
}
