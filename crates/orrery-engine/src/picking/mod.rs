//! Ray picking against body bounding spheres, and the single-body selection.

use glam::Vec3;
use crate::api::types::BodyId;
use crate::components::body::Body;
use crate::core::scene::Scene;

/// A half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray; `dir` is normalized (a zero direction stays zero and hits nothing).
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir: dir.normalize_or_zero() }
    }

    /// Distance along the ray to the first intersection with a sphere.
    /// A ray starting inside the sphere reports its exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if self.dir == Vec3::ZERO || radius <= 0.0 {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        let near = -b - s;
        let far = -b + s;
        if far < 0.0 {
            None
        } else if near >= 0.0 {
            Some(near)
        } else {
            Some(far)
        }
    }
}

/// The body a ray hit and how far along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: BodyId,
    pub distance: f32,
}

/// Nearest active body whose bounding sphere the ray intersects.
pub fn pick(scene: &Scene, ray: &Ray) -> Option<Hit> {
    scene
        .iter()
        .filter(|b| b.active)
        .filter_map(|b| {
            ray.intersect_sphere(b.pos, b.radius)
                .map(|distance| Hit { id: b.id, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// At most one selected body, held by id so a torn-down body is never dereferenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<BodyId>,
}

impl Selection {
    pub fn select(&mut self, id: BodyId) {
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<BodyId> {
        self.current
    }

    pub fn is(&self, id: BodyId) -> bool {
        self.current == Some(id)
    }

    /// The selected body, if it still exists in `scene`.
    pub fn resolve<'a>(&self, scene: &'a Scene) -> Option<&'a Body> {
        self.current.and_then(|id| scene.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_down_z() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn sphere_hit_distance() {
        let d = ray_down_z().intersect_sphere(Vec3::ZERO, 6.0).unwrap();
        assert!((d - 94.0).abs() < 1e-4);
    }

    #[test]
    fn sphere_miss() {
        assert!(ray_down_z().intersect_sphere(Vec3::new(20.0, 0.0, 0.0), 0.6).is_none());
    }

    #[test]
    fn sphere_behind_origin_is_ignored() {
        let ray = ray_down_z();
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 200.0), 5.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let d = ray.intersect_sphere(Vec3::ZERO, 3.0).unwrap();
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn pick_returns_nearest() {
        let mut scene = Scene::new();
        scene.spawn(Body::star(BodyId(1), "Sun", 6.0));
        // A planet in front of the sun along the same line of sight.
        scene.spawn(Body::planet(BodyId(2), "Near", 1.0, 0.0, 0.0));
        scene.get_mut(BodyId(2)).unwrap().pos = Vec3::new(0.0, 0.0, 50.0);

        let hit = pick(&scene, &ray_down_z()).unwrap();
        assert_eq!(hit.id, BodyId(2));
        assert!((hit.distance - 49.0).abs() < 1e-4);
    }

    #[test]
    fn pick_skips_inactive() {
        let mut scene = Scene::new();
        let mut star = Body::star(BodyId(1), "Sun", 6.0);
        star.active = false;
        scene.spawn(star);
        assert!(pick(&scene, &ray_down_z()).is_none());
    }

    #[test]
    fn selection_resolves_only_live_bodies() {
        let mut scene = Scene::new();
        scene.spawn(Body::star(BodyId(1), "Sun", 6.0));
        let mut sel = Selection::default();
        sel.select(BodyId(1));
        assert!(sel.resolve(&scene).is_some());
        scene.clear();
        assert!(sel.resolve(&scene).is_none());
        assert!(sel.is(BodyId(1)));
    }
}
