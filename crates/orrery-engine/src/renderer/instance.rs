use bytemuck::{Pod, Zeroable};

/// Per-sphere render data written to SharedArrayBuffer for the WebGPU
/// rasterizer. Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Red component (linear).
    pub r: f32,
    /// Green component (linear).
    pub g: f32,
    /// Blue component (linear).
    pub b: f32,
    /// Emissive intensity (0.0 = lit only, 1.0 = self-lit).
    pub emissive: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sphere instances plus the frame's camera
/// matrix and viewport, read by the browser rasterizer through raw pointers.
pub struct RenderBuffer {
    /// Sphere instances to be rendered.
    pub instances: Vec<SphereInstance>,
    /// Column-major view-projection matrix.
    pub view_proj: [f32; 16],
    /// Render surface size in pixels (width, height).
    pub viewport: [f32; 2],
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            view_proj: [0.0; 16],
            viewport: [0.0; 2],
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Raw pointer to the view-projection matrix.
    pub fn view_proj_ptr(&self) -> *const f32 {
        self.view_proj.as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
