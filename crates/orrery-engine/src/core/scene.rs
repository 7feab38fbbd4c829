use serde::Serialize;
use crate::api::types::BodyId;
use crate::components::body::{Body, BodyKind};

/// Flat body storage for one star system.
/// Systems hold a star and a handful of planets, so linear scans are fine.
pub struct Scene {
    bodies: Vec<Body>,
    /// Bumped on every teardown so the renderer knows to rebuild its meshes.
    generation: u32,
}

/// Static description of a body, sent once per generation to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct BodyDescriptor {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub radius: f32,
    pub orbit_radius: f32,
    pub texture: String,
}

/// Everything the renderer needs to build meshes for the current system.
#[derive(Debug, Clone, Serialize)]
pub struct SceneManifest {
    pub generation: u32,
    pub bodies: Vec<BodyDescriptor>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            generation: 0,
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Find a body by display name, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_named(name))
    }

    /// The first star in the scene, if any.
    pub fn star(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_star())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Tear the system down. Every previously issued BodyId becomes stale.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Bodies kept their ids but changed how they look; the renderer
    /// rebuilds its meshes from a fresh manifest.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn manifest(&self) -> SceneManifest {
        SceneManifest {
            generation: self.generation,
            bodies: self
                .bodies
                .iter()
                .map(|b| BodyDescriptor {
                    id: b.id,
                    name: b.name.clone(),
                    kind: b.kind,
                    radius: b.radius,
                    orbit_radius: b.orbit.radius,
                    texture: b.texture.clone(),
                })
                .collect(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
