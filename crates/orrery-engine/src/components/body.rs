use std::f64::consts::TAU;
use glam::Vec3;
use serde::Serialize;
use crate::api::types::BodyId;

/// What a body is, for picking and info-panel purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
}

/// Circular orbit in the XZ plane around the scene origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orbit {
    /// Orbital radius in scene units.
    pub radius: f32,
    /// Angular speed in radians per frame.
    pub angular_speed: f32,
    /// Current angular position in radians, kept in `[0, 2π)`.
    /// Held in f64 so per-frame steps stay exact over long sessions.
    pub angle: f64,
}

impl Orbit {
    pub fn new(radius: f32, angular_speed: f32) -> Self {
        Self { radius, angular_speed, angle: 0.0 }
    }

    /// Move one frame along the orbit, wrapping the angle into `[0, 2π)`.
    #[inline]
    pub fn step(&mut self) {
        self.angle = (self.angle + f64::from(self.angular_speed)).rem_euclid(TAU);
    }

    /// Position on the orbit at the current angle.
    #[inline]
    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(self.radius * cos as f32, 0.0, self.radius * sin as f32)
    }
}

/// A star or planet in the scene.
/// One flat struct with builder methods, same shape for every body.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier, doubles as the renderable handle on the JS side.
    pub id: BodyId,
    /// Display name, also the key for metadata lookups.
    pub name: String,
    pub kind: BodyKind,
    /// Whether this body takes part in picking and rendering.
    pub active: bool,
    /// Bounding-sphere radius in scene units.
    pub radius: f32,
    pub orbit: Orbit,
    /// World position, recomputed from the orbit every advanced frame.
    pub pos: Vec3,
    /// Texture key the renderer resolves to an image (e.g. "assets/earth.jpg").
    pub texture: String,
}

impl Body {
    /// A body fixed at the origin.
    pub fn star(id: BodyId, name: impl Into<String>, radius: f32) -> Self {
        Self {
            id,
            name: name.into(),
            kind: BodyKind::Star,
            active: true,
            radius,
            orbit: Orbit::default(),
            pos: Vec3::ZERO,
            texture: String::new(),
        }
    }

    /// A body on a circular orbit, starting at angle 0 (on the +X axis).
    pub fn planet(
        id: BodyId,
        name: impl Into<String>,
        radius: f32,
        orbit_radius: f32,
        angular_speed: f32,
    ) -> Self {
        let orbit = Orbit::new(orbit_radius, angular_speed);
        Self {
            id,
            name: name.into(),
            kind: BodyKind::Planet,
            active: true,
            radius,
            orbit,
            pos: orbit.position(),
            texture: String::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.texture = texture.into();
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.orbit.angle = angle.rem_euclid(TAU);
        self.pos = self.orbit.position();
        self
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Whether this body answers to `name`, ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
