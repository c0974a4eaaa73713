// extensions/tween.rs
//
// Camera tween system — time-bounded interpolation of the camera position.
//
// Each tween is an explicit task with absolute timestamps driven by an
// external per-frame tick, rather than a self-rescheduling callback chain.
// Callers inject the clock, so tests can use synthetic timestamps.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(CameraTween::new(camera.pos, HOME, ORIGIN, now_ms, 1000.0));
//   tweens.tick(now_ms, &mut camera);  // each frame

use glam::Vec3;

use crate::renderer::camera::PerspectiveCamera;
use super::easing::{Easing, ease_vec3};

/// A single camera movement: interpolate position from `start` to `end`
/// over a fixed wall-clock window, re-aiming at `look_at` every tick.
#[derive(Debug, Clone, Copy)]
pub struct CameraTween {
    /// Camera position when the tween was triggered.
    pub start: Vec3,
    /// Destination position.
    pub end: Vec3,
    /// Point the camera keeps looking at while moving.
    pub look_at: Vec3,
    /// Clock value at trigger time, in milliseconds.
    pub start_ms: f64,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// Easing function.
    pub easing: Easing,
}

impl CameraTween {
    pub fn new(start: Vec3, end: Vec3, look_at: Vec3, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            look_at,
            start_ms,
            duration_ms,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Normalized progress [0, 1] at the given clock value.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)) as f32
    }

    /// Whether the tween has run its full duration at the given clock value.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

/// Manages all in-flight camera tweens.
///
/// Tweens are applied in insertion order each tick, so when several run at
/// once the newest one wins the frame. There is no cancellation: a tween
/// runs to completion and is then dropped.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: Vec<CameraTween>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween. Does not interrupt tweens already in flight.
    pub fn add(&mut self, tween: CameraTween) {
        self.tweens.push(tween);
    }

    /// Advance all tweens to `now_ms` and apply them to the camera.
    /// Completed tweens are applied one final time at t = 1, then removed.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, now_ms: f64, camera: &mut PerspectiveCamera) -> usize {
        for tween in &self.tweens {
            let t = tween.progress(now_ms);
            camera.pos = ease_vec3(tween.start, tween.end, t, tween.easing);
            camera.look_at(tween.look_at);
        }

        let before = self.tweens.len();
        self.tweens.retain(|tween| !tween.is_complete(now_ms));
        before - self.tweens.len()
    }

    /// Number of in-flight tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether no tween is in flight.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Drop all in-flight tweens.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
