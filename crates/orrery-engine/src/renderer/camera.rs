use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::picking::Ray;

/// Perspective camera looking from `position` toward `target`, Y-up.
/// Uses the GL clip convention (z in [-1, 1]) so matrices match Three.js.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    /// Look-at point (the orbit-controls target on the JS side).
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in CSS pixels, used to convert pointer coordinates.
    pub viewport: Vec2,
}

/// Camera data read by the renderer each frame (8 floats).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraState {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees, as Three.js expects it.
    pub fov_deg: f32,
    pub aspect: f32,
}

impl CameraState {
    pub const FLOATS: usize = 8;
}

impl Camera3D {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, viewport: Vec2) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            fov_y: fov_y_degrees.to_radians(),
            near,
            far,
            viewport,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    /// Update the viewport on window resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Place the camera and aim it.
    pub fn look_from(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect(), self.near, self.far)
    }

    /// Convert a pointer position in viewport pixels (origin top-left, y down)
    /// to normalized device coordinates (origin center, y up).
    pub fn ndc_from_viewport(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x / self.viewport.x) * 2.0 - 1.0,
            -(pixel.y / self.viewport.y) * 2.0 + 1.0,
        )
    }

    /// Ray from the camera through a point in normalized device coordinates.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let clip = inv * ndc.extend(0.5).extend(1.0);
        let world = clip.truncate() / clip.w;
        Ray::new(self.position, world - self.position)
    }

    /// Ray from the camera through a pointer position in viewport pixels.
    pub fn ray_from_pointer(&self, pixel: Vec2) -> Ray {
        self.ray_through(self.ndc_from_viewport(pixel))
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position.to_array(),
            target: self.target.to_array(),
            fov_deg: self.fov_y.to_degrees(),
            aspect: self.aspect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        Camera3D::new(75.0, 0.1, 1000.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn ndc_corners() {
        let cam = camera();
        assert_eq!(cam.ndc_from_viewport(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(cam.ndc_from_viewport(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_eq!(cam.ndc_from_viewport(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_through(Vec2::ZERO);
        assert_eq!(ray.origin, cam.position);
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4, "dir = {:?}", ray.dir);
    }

    #[test]
    fn right_edge_ray_leans_right() {
        let cam = camera();
        let ray = cam.ray_through(Vec2::new(1.0, 0.0));
        assert!(ray.dir.x > 0.0);
        assert!(ray.dir.z < 0.0);
        // Half the horizontal fov: tan(h/2) = aspect * tan(v/2)
        let expected = cam.aspect() * (cam.fov_y / 2.0).tan();
        assert!((ray.dir.x / -ray.dir.z - expected).abs() < 1e-3);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = camera();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn state_reports_degrees() {
        let cam = camera();
        let state = cam.state();
        assert!((state.fov_deg - 75.0).abs() < 1e-3);
        assert_eq!(state.position, [0.0, 0.0, 100.0]);
    }
}
