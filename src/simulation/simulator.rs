use glam::DVec2;

use crate::simulation::forces::Gravity;
use crate::simulation::types::Body;

/// Owns the bodies and advances them one explicit Euler step at a time
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
    gravity: Gravity,
}

impl Simulator {
    pub fn new(bodies: Vec<Body>, gravity: Gravity) -> Self {
        Self { bodies, gravity }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Net force on each body from its current position
    pub fn compute_forces(&self) -> Vec<DVec2> {
        self.gravity.accumulate_forces(&self.bodies)
    }

    /// Applies `forces` (index-aligned with the bodies) over `dt` seconds.
    ///
    /// Velocity is updated first, then the position moves with the new
    /// velocity. `previous_position` is snapshotted right before the move.
    pub fn step(&mut self, forces: &[DVec2], dt: f64) {
        debug_assert_eq!(forces.len(), self.bodies.len());

        for (body, force) in self.bodies.iter_mut().zip(forces) {
            body.apply_force(*force, dt);
            body.update_position(dt);
        }
    }

    pub fn advance(&mut self, dt: f64) {
        let forces = self.compute_forces();
        self.step(&forces, dt);
    }
}
