use glam::{Mat4, Vec2, Vec3};

use crate::systems::picking::Ray;

/// Perspective look-at camera.
///
/// Orientation is implicit: the camera always points at `target`. Moving the
/// camera and re-aiming it are the only mutations the system performs.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Position in world space.
    pub pos: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up reference for the view basis.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 75.0_f32.to_radians(),
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
            ..Default::default()
        }
    }

    /// Re-aim the camera at a world point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Normalized view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.pos).normalize_or_zero()
    }

    /// Combined view-projection matrix (right-handed, column-major).
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.pos, self.target, self.up);
        proj * view
    }

    /// Cast a ray from normalized device coordinates (x, y in [-1, 1],
    /// +y up) through the camera into the world.
    pub fn pick_ray(&self, ndc: Vec2) -> Ray {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize_or_zero();
        let true_up = right.cross(forward);

        let half_h = (self.fov_y / 2.0).tan();
        let half_w = half_h * self.aspect;

        let dir = (forward + right * (ndc.x * half_w) + true_up * (ndc.y * half_h))
            .normalize_or_zero();
        Ray {
            origin: self.pos,
            dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_is_forward() {
        let camera = PerspectiveCamera::default();
        let ray = camera.pick_ray(Vec2::ZERO);
        assert_eq!(ray.origin, camera.pos);
        // Camera at (0,0,20) looking at origin: forward is -Z
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn edge_rays_diverge() {
        let camera = PerspectiveCamera::default();
        let right = camera.pick_ray(Vec2::new(1.0, 0.0));
        let up = camera.pick_ray(Vec2::new(0.0, 1.0));
        assert!(right.dir.x > 0.0);
        assert!(up.dir.y > 0.0);
    }

    #[test]
    fn look_at_retargets_forward() {
        let mut camera = PerspectiveCamera::default();
        camera.pos = Vec3::new(0.0, 0.0, 5.0);
        camera.look_at(Vec3::new(5.0, 0.0, 5.0));
        assert!((camera.forward() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn view_proj_maps_target_to_clip_center() {
        let camera = PerspectiveCamera::default();
        let clip = camera.view_proj() * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }

    #[test]
    fn set_aspect_widens_horizontal_rays() {
        let mut camera = PerspectiveCamera::default();
        camera.set_aspect(1.0);
        let narrow = camera.pick_ray(Vec2::new(1.0, 0.0)).dir.x;
        camera.set_aspect(2.0);
        let wide = camera.pick_ray(Vec2::new(1.0, 0.0)).dir.x;
        assert!(wide > narrow);
    }
}
