//! Builds the per-frame render buffer from the scene and camera.

use glam::Vec2;

use crate::components::body::Body;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::{RenderBuffer, SphereInstance};

/// Rebuild the render buffer: one sphere instance per active body, plus the
/// camera's view-projection matrix and the viewport in pixels.
pub fn build_render_buffer<'a>(
    bodies: impl Iterator<Item = &'a Body>,
    camera: &PerspectiveCamera,
    viewport: Vec2,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for body in bodies {
        if !body.active {
            continue;
        }
        buffer.push(SphereInstance {
            x: body.pos.x,
            y: body.pos.y,
            z: body.pos.z,
            radius: body.radius,
            r: body.color[0],
            g: body.color[1],
            b: body.color[2],
            emissive: body.emissive,
        });
    }
    buffer.view_proj = camera.view_proj().to_cols_array();
    buffer.viewport = [viewport.x, viewport.y];
}
