// extensions/mod.rs
//
// Optional extension modules decoupled from core Scene internals.
// Games opt-in by creating these systems.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp, lerp_vec3, ease, ease_vec3};
pub use tween::{CameraTween, TweenState};
