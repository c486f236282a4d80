use glam::DVec2;

use crate::simulation::types::{Body, GRAVITATIONAL_CONSTANT, MIN_DISTANCE};

/// Newtonian attraction with a hard cutoff at close range
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gravity {
    pub g: f64,
    /// Pairs at or below this separation exert no force on each other
    pub min_distance: f64,
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            min_distance: MIN_DISTANCE,
        }
    }
}

impl Gravity {
    /// Force exerted on `body` by `other`
    pub fn force_between(&self, body: &Body, other: &Body) -> DVec2 {
        let direction = other.position - body.position;
        let distance = direction.length();

        if distance > self.min_distance {
            let magnitude = self.g * body.mass() * other.mass() / (distance * distance);
            direction.normalize() * magnitude
        } else {
            DVec2::ZERO
        }
    }

    /// Net force on every body, index-aligned with `bodies`.
    ///
    /// Each ordered pair is evaluated on its own, so `(i, j)` and `(j, i)` are
    /// two separate computations.
    pub fn accumulate_forces(&self, bodies: &[Body]) -> Vec<DVec2> {
        bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                bodies
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .fold(DVec2::ZERO, |acc, (_, other)| acc + self.force_between(body, other))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::types::{BODY_MASS, BodyColor};

    fn body_at(x: f64, y: f64, mass: f64) -> Body {
        Body::new(DVec2::new(x, y), DVec2::ZERO, mass, BodyColor::Red).unwrap()
    }

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn magnitude_follows_inverse_square() {
        let gravity = Gravity::default();
        let a = body_at(0.0, 0.0, 2.0e17);
        let b = body_at(300.0, 400.0, 5.0e16);

        let force = gravity.force_between(&a, &b);
        let expected = GRAVITATIONAL_CONSTANT * 2.0e17 * 5.0e16 / (500.0 * 500.0);

        assert!(relative_error(force.length(), expected) < 1e-12);
    }

    #[test]
    fn force_points_toward_other_body() {
        let gravity = Gravity::default();
        let a = body_at(0.0, 0.0, BODY_MASS);
        let b = body_at(300.0, 400.0, BODY_MASS);

        let direction = gravity.force_between(&a, &b).normalize();

        assert!((direction - DVec2::new(0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn no_force_inside_min_distance() {
        let gravity = Gravity::default();
        let a = body_at(0.0, 0.0, BODY_MASS);

        for separation in [0.0, 1.0, 39.999, MIN_DISTANCE] {
            let b = body_at(separation, 0.0, BODY_MASS);
            assert_eq!(gravity.force_between(&a, &b), DVec2::ZERO);
        }

        let just_outside = body_at(MIN_DISTANCE + 1e-6, 0.0, BODY_MASS);
        assert!(gravity.force_between(&a, &just_outside).x > 0.0);
    }

    #[test]
    fn coincident_bodies_do_not_produce_nan() {
        let gravity = Gravity::default();
        let a = body_at(50.0, 50.0, BODY_MASS);
        let b = body_at(50.0, 50.0, BODY_MASS);

        let force = gravity.force_between(&a, &b);
        assert!(force.is_finite());
        assert_eq!(force, DVec2::ZERO);
    }

    #[test]
    fn pair_forces_mirror_each_other() {
        let gravity = Gravity::default();
        let a = body_at(100.0, 200.0, BODY_MASS);
        let b = body_at(350.0, -20.0, BODY_MASS);

        let on_a = gravity.force_between(&a, &b);
        let on_b = gravity.force_between(&b, &a);

        assert!(relative_error(on_a.length(), on_b.length()) < 1e-12);
        assert!((on_a + on_b).length() < on_a.length() * 1e-12);
    }

    #[test]
    fn accumulation_sums_every_other_body() {
        let gravity = Gravity { g: 1.0, min_distance: 0.5 };
        let bodies = [
            body_at(0.0, 0.0, 1.0),
            body_at(1.0, 0.0, 1.0),
            body_at(-2.0, 0.0, 1.0),
        ];

        let forces = gravity.accumulate_forces(&bodies);

        // +1 from the right neighbour, -1/4 from the left one
        assert!((forces[0] - DVec2::new(0.75, 0.0)).length() < 1e-12);
        assert_eq!(forces.len(), 3);
    }

    #[test]
    fn lone_body_feels_nothing() {
        let gravity = Gravity::default();
        let forces = gravity.accumulate_forces(&[body_at(5.0, 5.0, BODY_MASS)]);
        assert_eq!(forces, vec![DVec2::ZERO]);
    }
}
