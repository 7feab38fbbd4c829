//! Per-frame orbital advancement.

use crate::components::body::Body;
use crate::core::scene::Scene;

/// Advance every active body by one frame: `angle += angular_speed` (mod 2π),
/// then recompute its position on the orbit.
pub fn advance_orbits(scene: &mut Scene) {
    for body in scene.iter_mut().filter(|b| b.active) {
        body.orbit.step();
        place_on_orbit(body);
    }
}

/// Recompute a body's position from its current angle without advancing it.
#[inline]
pub fn place_on_orbit(body: &mut Body) {
    body.pos = body.orbit.position();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use std::f64::consts::TAU;

    fn wrapped(angle: f64) -> f64 {
        angle.rem_euclid(TAU)
    }

    /// Shortest distance between two angles on the circle.
    fn angular_error(a: f64, b: f64) -> f64 {
        let d = wrapped(a - b);
        d.min(TAU - d)
    }

    #[test]
    fn angle_after_n_frames() {
        let mut scene = Scene::new();
        scene.spawn(Body::planet(BodyId(1), "Mercury", 0.22, 10.0, 0.04));
        scene.spawn(Body::planet(BodyId(2), "Jupiter", 5.1, 80.0, 0.002).with_angle(1.0));

        let n = 500;
        for _ in 0..n {
            advance_orbits(&mut scene);
        }

        let mercury = scene.get(BodyId(1)).unwrap();
        let expected = n as f64 * f64::from(0.04f32);
        assert!(angular_error(mercury.orbit.angle, expected) < 1e-6);

        let jupiter = scene.get(BodyId(2)).unwrap();
        let expected = 1.0 + n as f64 * f64::from(0.002f32);
        assert!(angular_error(jupiter.orbit.angle, expected) < 1e-6);
    }

    #[test]
    fn long_run_keeps_speed() {
        // A million frames is about four and a half hours at 60 fps.
        let mut scene = Scene::new();
        scene.spawn(Body::planet(BodyId(1), "Mercury", 0.22, 10.0, 0.04));

        let n: u32 = 1_000_000;
        for _ in 0..n {
            advance_orbits(&mut scene);
        }

        let mercury = scene.get(BodyId(1)).unwrap();
        let expected = f64::from(n) * f64::from(0.04f32);
        assert!(angular_error(mercury.orbit.angle, expected) < 1e-3);
        assert!((0.0..TAU).contains(&mercury.orbit.angle));

        let before = mercury.orbit.angle;
        advance_orbits(&mut scene);
        let after = scene.get(BodyId(1)).unwrap().orbit.angle;
        assert!((angular_error(after, before) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn position_stays_on_circle() {
        let mut scene = Scene::new();
        scene.spawn(Body::planet(BodyId(1), "Earth", 0.6, 20.0, 0.01));
        for _ in 0..137 {
            advance_orbits(&mut scene);
        }
        let earth = scene.get(BodyId(1)).unwrap();
        assert!((earth.pos.length() - 20.0).abs() < 1e-3);
        assert_eq!(earth.pos.y, 0.0);
        assert!((earth.pos.x as f64 - 20.0 * earth.orbit.angle.cos()).abs() < 1e-4);
        assert!((earth.pos.z as f64 - 20.0 * earth.orbit.angle.sin()).abs() < 1e-4);
    }

    #[test]
    fn star_does_not_move() {
        let mut scene = Scene::new();
        scene.spawn(Body::star(BodyId(1), "Sun", 6.0));
        advance_orbits(&mut scene);
        assert_eq!(scene.get(BodyId(1)).unwrap().pos, glam::Vec3::ZERO);
    }

    #[test]
    fn inactive_bodies_are_skipped() {
        let mut scene = Scene::new();
        let mut body = Body::planet(BodyId(1), "Venus", 0.56, 15.0, 0.02);
        body.active = false;
        scene.spawn(body);
        advance_orbits(&mut scene);
        assert_eq!(scene.get(BodyId(1)).unwrap().orbit.angle, 0.0);
    }
}
