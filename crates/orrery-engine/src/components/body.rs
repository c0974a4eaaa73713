use glam::Vec3;
use crate::api::types::EntityId;

/// Fat entity — everything the scene renders is a sphere, so the body
/// carries its bounding-sphere radius directly instead of a mesh component.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding bodies by name.
    pub tag: String,
    /// Whether this body is active (inactive bodies are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Sphere radius in world units. Used for both rendering and picking.
    pub radius: f32,
    /// Base color (linear RGB).
    pub color: [f32; 3],
    /// Emissive intensity (0.0 = lit only, 1.0 = self-lit like the sun).
    pub emissive: f32,
}

impl Body {
    /// Create a new body with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            radius: 1.0,
            color: [1.0, 1.0, 1.0],
            emissive: 0.0,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
