pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, SliderSpec};
pub use api::types::{EntityId, GameEvent};
pub use components::body::Body;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::camera::PerspectiveCamera;
pub use renderer::instance::{SphereInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::picking::{Ray, PickHit, ray_sphere, pick_nearest};
pub use systems::render::build_render_buffer;

// Extensions — decoupled optional systems
pub use extensions::{
    Easing, lerp, lerp_vec3, ease, ease_vec3,
    CameraTween, TweenState,
};
