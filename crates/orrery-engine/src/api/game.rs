use glam::Vec2;
use serde::Serialize;

use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport width in pixels.
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Maximum number of sphere instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_instances: 64,
            max_events: 32,
        }
    }
}

/// Declarative description of one UI slider, serialized to JSON for the
/// browser layer to build its controls panel from.
#[derive(Debug, Clone, Serialize)]
pub struct SliderSpec {
    pub label: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn bodies, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Advance state, handle input, emit events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Slider descriptions for the UI layer. Empty by default.
    fn controls(&self) -> Vec<SliderSpec> {
        Vec::new()
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
///
/// This is the single session context: scene, camera, clock and viewport all
/// live here rather than in module-level statics.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub events: Vec<GameEvent>,
    /// Session wall-clock in milliseconds, advanced by the runner each fixed
    /// step. Tests set it directly to drive time-based animation.
    pub clock_ms: f64,
    /// Current viewport size in pixels (render surface dimensions).
    pub viewport: Vec2,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::default(),
            events: Vec::new(),
            clock_ms: 0.0,
            viewport: Vec2::new(800.0, 600.0),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Advance the session clock by one step.
    pub fn advance_clock(&mut self, dt_ms: f64) {
        self.clock_ms += dt_ms;
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, ..Default::default() });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn clock_accumulates() {
        let mut ctx = EngineContext::new();
        ctx.advance_clock(16.0);
        ctx.advance_clock(16.0);
        assert!((ctx.clock_ms - 32.0).abs() < 1e-9);
    }
}
