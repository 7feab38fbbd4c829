//! Eases the camera toward a selected body.

use glam::Vec3;
use crate::renderer::camera::Camera3D;

/// Default exponential smoothing factor per frame.
pub const DEFAULT_FOCUS_SMOOTHING: f32 = 0.05;

/// Camera goal relative to a body: two radii right and up, one radius toward the viewer.
pub fn focus_offset(radius: f32) -> Vec3 {
    Vec3::new(radius * 2.0, radius * 2.0, radius)
}

/// Exponential camera easing toward a fixed goal position while the look
/// target chases a (possibly moving) body.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFocus {
    goal: Option<Vec3>,
    /// Fraction of the remaining distance covered each frame, in (0, 1].
    pub smoothing: f32,
}

impl CameraFocus {
    pub fn new(smoothing: f32) -> Self {
        Self {
            goal: None,
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Start (or supersede) easing toward `goal`.
    pub fn aim(&mut self, goal: Vec3) {
        self.goal = Some(goal);
    }

    pub fn release(&mut self) {
        self.goal = None;
    }

    pub fn goal(&self) -> Option<Vec3> {
        self.goal
    }

    pub fn is_active(&self) -> bool {
        self.goal.is_some()
    }

    /// One frame of easing. `look_at` is the followed body's current position.
    pub fn step(&self, camera: &mut Camera3D, look_at: Vec3) {
        if let Some(goal) = self.goal {
            camera.position = camera.position.lerp(goal, self.smoothing);
            camera.target = camera.target.lerp(look_at, self.smoothing);
        }
    }
}

impl Default for CameraFocus {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SMOOTHING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn camera() -> Camera3D {
        Camera3D::new(75.0, 0.1, 1000.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn one_step_covers_smoothing_fraction() {
        let mut cam = camera();
        let mut focus = CameraFocus::default();
        focus.aim(Vec3::new(0.0, 0.0, 0.0));
        focus.step(&mut cam, Vec3::new(10.0, 0.0, 0.0));
        assert!((cam.position.z - 95.0).abs() < 1e-4);
        assert!((cam.target.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn converges_after_many_frames() {
        let mut cam = camera();
        let mut focus = CameraFocus::default();
        let goal = Vec3::new(22.0, 1.2, 20.6);
        focus.aim(goal);
        for _ in 0..400 {
            focus.step(&mut cam, Vec3::new(20.0, 0.0, 0.0));
        }
        assert!((cam.position - goal).length() < 1e-3);
        assert!((cam.target - Vec3::new(20.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn released_focus_leaves_camera_alone() {
        let mut cam = camera();
        let mut focus = CameraFocus::default();
        focus.aim(Vec3::ZERO);
        focus.release();
        let before = cam.clone();
        focus.step(&mut cam, Vec3::ONE);
        assert_eq!(cam, before);
    }

    #[test]
    fn offset_scales_with_radius() {
        assert_eq!(focus_offset(2.0), Vec3::new(4.0, 4.0, 2.0));
    }
}
