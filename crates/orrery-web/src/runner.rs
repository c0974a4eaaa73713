use glam::Vec2;
use orrery_engine::{
    Game, GameConfig, EngineContext,
    InputEvent, InputQueue, RenderBuffer,
    FixedTimestep,
};
use orrery_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.ctx.viewport = Vec2::new(self.config.viewport_width, self.config.viewport_height);
        self.ctx.camera.set_aspect(self.config.viewport_width / self.config.viewport_height);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: advance the clock, update the game, rebuild the
    /// render buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.ctx.advance_clock(self.timestep.dt_ms());
            self.game.update(&mut self.ctx, &self.input);
            // One-shot delivery: a tick that accumulates several steps must
            // not re-apply the same click or button event on every step.
            self.input.drain();
        }

        // Build render buffer from bodies + camera
        build_render_buffer(
            self.ctx.scene.iter(),
            &self.ctx.camera,
            self.ctx.viewport,
            &mut self.render_buffer,
        );
    }

    /// Slider descriptions as JSON for the UI layer. An unserializable
    /// manifest degrades to an empty panel rather than a broken page.
    pub fn controls_manifest(&self) -> String {
        match serde_json::to_string(&self.game.controls()) {
            Ok(json) => json,
            Err(err) => {
                log::error!("controls manifest serialization failed: {err}");
                "[]".to_string()
            }
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn view_proj_ptr(&self) -> *const f32 {
        self.render_buffer.view_proj_ptr()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.x
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.y
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
