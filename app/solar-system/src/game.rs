//! Solar System — interactive 3D orrery.
//!
//! Circular orbits in the XZ plane, hover tooltips via ray picking,
//! click-to-focus camera jumps and a timed reset tween back to the home view.

use orrery_engine::*;
use orrery_engine::api::game::GameConfig;
use orrery_engine::input::queue::{InputEvent, InputQueue};
use glam::{Vec2, Vec3};

use crate::bodies;

// ── Custom event kinds from the UI ──────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_TOGGLE_PAUSE: u32 = 2;
const CUSTOM_RESET_VIEW: u32 = 3;
/// Viewport resize (sent by worker as kind=99).
const CUSTOM_RESIZE: u32 = 99;

// ── Game event kinds to the UI ───────────────────────────────────────

/// a = planet index (-1 = no hit), b/c = tooltip anchor in pixels.
const EVENT_HOVER: f32 = 1.0;
/// a = 1.0 paused, 0.0 running.
const EVENT_PAUSE_STATE: f32 = 2.0;

// ── Camera ───────────────────────────────────────────────────────────

const CAMERA_FOV_DEG: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
/// Home view: on the +Z axis, whole system in frame.
const HOME_POS: Vec3 = Vec3::new(0.0, 0.0, 20.0);
/// Click-to-focus parks the camera slightly above and behind the target.
const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 3.0);
const RESET_DURATION_MS: f64 = 1000.0;

// ── Controls panel ───────────────────────────────────────────────────

const SLIDER_MIN: f32 = 0.001;
const SLIDER_MAX: f32 = 0.05;
const SLIDER_STEP: f32 = 0.001;

/// Tooltip anchor offset from the cursor, in pixels.
const TOOLTIP_OFFSET_PX: f32 = 10.0;

/// Orbit position for a given radius and angle: circular path in the
/// XZ plane, sun at the origin.
fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

// ── Game struct ──────────────────────────────────────────────────────

pub struct SolarSystem {
    /// Current orbit angle per planet, radians. Not wrapped — magnitudes
    /// stay small over a session and tests rely on angle == steps · speed.
    angles: [f32; bodies::PLANET_COUNT],
    /// Angular speed per planet, radians per fixed step. Slider-controlled.
    speeds: [f32; bodies::PLANET_COUNT],
    /// Paused state: freezes orbit advancement, not picking or rendering.
    paused: bool,
    /// Last cursor position in pixels.
    cursor_px: Vec2,
    /// In-flight reset tweens.
    tweens: TweenState,

    // Entity IDs
    sun_id: Option<EntityId>,
    planet_ids: [Option<EntityId>; bodies::PLANET_COUNT],
}

impl SolarSystem {
    pub fn new() -> Self {
        let mut speeds = [0.0; bodies::PLANET_COUNT];
        for (i, speed) in speeds.iter_mut().enumerate() {
            *speed = bodies::default_speed(i);
        }

        Self {
            angles: [0.0; bodies::PLANET_COUNT],
            speeds,
            paused: false,
            cursor_px: Vec2::ZERO,
            tweens: TweenState::new(),
            sun_id: None,
            planet_ids: [None; bodies::PLANET_COUNT],
        }
    }

    /// Pixel coordinates to normalized device coordinates (x, y in [-1, 1],
    /// +y up).
    fn to_ndc(px: Vec2, viewport: Vec2) -> Vec2 {
        Vec2::new(
            (px.x / viewport.x) * 2.0 - 1.0,
            -(px.y / viewport.y) * 2.0 + 1.0,
        )
    }

    /// Planet index for a picked entity ID, if it is a planet.
    fn planet_index(&self, id: EntityId) -> Option<usize> {
        self.planet_ids.iter().position(|pid| *pid == Some(id))
    }

    /// Jump the camera to a picked body: slightly above and behind it,
    /// looking at it. Candidates are all bodies, sun included.
    fn focus_on_click(&self, ctx: &mut EngineContext, click_px: Vec2) {
        let ndc = Self::to_ndc(click_px, ctx.viewport);
        let ray = ctx.camera.pick_ray(ndc);
        if let Some(hit) = pick_nearest(&ray, ctx.scene.iter()) {
            if let Some(body) = ctx.scene.get(hit.id) {
                let target = body.pos;
                ctx.camera.pos = target + FOCUS_OFFSET;
                ctx.camera.look_at(target);
            }
        }
    }

    /// Hover pick against planets only — the sun never gets a tooltip —
    /// and emit the result for the UI tooltip overlay.
    fn emit_hover(&self, ctx: &mut EngineContext) {
        let ndc = Self::to_ndc(self.cursor_px, ctx.viewport);
        let ray = ctx.camera.pick_ray(ndc);
        let hit = pick_nearest(&ray, ctx.scene.iter().filter(|b| b.tag != "sun"));

        let index = hit
            .and_then(|h| self.planet_index(h.id))
            .map(|i| i as f32)
            .unwrap_or(-1.0);

        ctx.emit_event(GameEvent {
            kind: EVENT_HOVER,
            a: index,
            b: self.cursor_px.x + TOOLTIP_OFFSET_PX,
            c: self.cursor_px.y + TOOLTIP_OFFSET_PX,
        });
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            max_instances: bodies::PLANET_COUNT + 1,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.camera = PerspectiveCamera::new(
            CAMERA_FOV_DEG,
            ctx.viewport.x / ctx.viewport.y,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        ctx.camera.pos = HOME_POS;
        ctx.camera.look_at(Vec3::ZERO);

        // ── Spawn sun ────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Body::new(sun_id)
                .with_tag("sun")
                .with_radius(bodies::SUN_RADIUS)
                .with_color(bodies::SUN_COLOR)
                .with_emissive(1.0),
        );
        self.sun_id = Some(sun_id);

        // ── Spawn planets ────────────────────────────────────────────
        for (i, planet) in bodies::PLANETS.iter().enumerate() {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Body::new(id)
                    .with_tag(planet.name)
                    .with_pos(orbit_position(planet.orbit_radius, self.angles[i]))
                    .with_radius(planet.size)
                    .with_color(planet.color),
            );
            self.planet_ids[i] = Some(id);
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            match event {
                InputEvent::PointerMove { x, y } => {
                    self.cursor_px = Vec2::new(*x, *y);
                }
                InputEvent::PointerDown { x, y } => {
                    self.focus_on_click(ctx, Vec2::new(*x, *y));
                }
                InputEvent::PointerUp { .. } => {}
                InputEvent::Custom { kind, a, b, .. } => match *kind {
                    CUSTOM_SET_SPEED => {
                        // Unknown planet index is a no-op
                        let idx = *a as i32;
                        if idx >= 0 && (idx as usize) < bodies::PLANET_COUNT {
                            self.speeds[idx as usize] = *b;
                        }
                    }
                    CUSTOM_TOGGLE_PAUSE => {
                        self.paused = !self.paused;
                        ctx.emit_event(GameEvent {
                            kind: EVENT_PAUSE_STATE,
                            a: if self.paused { 1.0 } else { 0.0 },
                            b: 0.0,
                            c: 0.0,
                        });
                    }
                    CUSTOM_RESET_VIEW => {
                        self.tweens.add(CameraTween::new(
                            ctx.camera.pos,
                            HOME_POS,
                            Vec3::ZERO,
                            ctx.clock_ms,
                            RESET_DURATION_MS,
                        ));
                    }
                    CUSTOM_RESIZE => {
                        ctx.viewport = Vec2::new(*a, *b);
                        ctx.camera.set_aspect(*a / *b);
                    }
                    _ => {}
                },
            }
        }

        // ── Advance orbits ───────────────────────────────────────────
        if !self.paused {
            for i in 0..bodies::PLANET_COUNT {
                self.angles[i] += self.speeds[i];
                if let Some(id) = self.planet_ids[i] {
                    if let Some(body) = ctx.scene.get_mut(id) {
                        body.pos = orbit_position(bodies::PLANETS[i].orbit_radius, self.angles[i]);
                    }
                }
            }
        }

        // ── Reset tween ──────────────────────────────────────────────
        // Ticked after input, so an in-flight reset overwrites a click in
        // the same step: last writer wins, no mutual exclusion.
        self.tweens.tick(ctx.clock_ms, &mut ctx.camera);

        // ── Hover pick (runs while paused too) ───────────────────────
        self.emit_hover(ctx);
    }

    fn controls(&self) -> Vec<SliderSpec> {
        bodies::PLANETS
            .iter()
            .enumerate()
            .map(|(i, planet)| SliderSpec {
                label: planet.name.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: self.speeds[i],
            })
            .collect()
    }
}
