use anyhow::{Result, ensure};
use glam::DVec2;

// Constants for simulation
pub const NUM_BODIES: usize = 3;
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;
pub const MIN_DISTANCE: f64 = 40.0;
pub const BODY_MASS: f64 = 3.162_277_660_168_379_5e17; // 10^17.5
pub const BODY_RADIUS: f64 = 12.0;

/// Named colors cycled through by creation order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Pink,
}

impl BodyColor {
    pub const PALETTE: [BodyColor; 8] = [
        BodyColor::Red,
        BodyColor::Blue,
        BodyColor::Green,
        BodyColor::Yellow,
        BodyColor::Purple,
        BodyColor::Orange,
        BodyColor::Cyan,
        BodyColor::Pink,
    ];

    /// Color for the body created at `index`
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// 8-bit sRGB components
    pub fn srgb(self) -> [u8; 3] {
        match self {
            BodyColor::Red => [255, 0, 0],
            BodyColor::Blue => [0, 0, 255],
            BodyColor::Green => [0, 255, 0],
            BodyColor::Yellow => [255, 255, 0],
            BodyColor::Purple => [160, 32, 240],
            BodyColor::Orange => [255, 165, 0],
            BodyColor::Cyan => [0, 255, 255],
            BodyColor::Pink => [255, 192, 203],
        }
    }

    /// Linear rgba, ready to be written into an sRGB render target
    pub fn linear_rgba(self) -> [f32; 4] {
        let [r, g, b] = self.srgb();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0]
    }
}

fn srgb_to_linear(component: u8) -> f32 {
    let c = component as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// Represents a single point mass
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub previous_position: DVec2, // start of the current frame, only read for the trail
    pub velocity: DVec2,
    mass: f64,
    pub color: BodyColor,
    pub radius: f64, // visual only
}

impl Body {
    pub fn new(position: DVec2, velocity: DVec2, mass: f64, color: BodyColor) -> Result<Self> {
        ensure!(
            mass.is_finite() && mass > 0.0,
            "body mass must be positive and finite, got {mass}"
        );
        ensure!(position.is_finite(), "body position must be finite, got {position}");
        ensure!(velocity.is_finite(), "body velocity must be finite, got {velocity}");

        Ok(Self {
            position,
            previous_position: position,
            velocity,
            mass,
            color,
            radius: BODY_RADIUS,
        })
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// velocity += (force / mass) * dt
    pub fn apply_force(&mut self, force: DVec2, dt: f64) {
        let acceleration = force / self.mass;
        self.velocity += acceleration * dt;
    }

    /// Snapshots the current position, then moves along the velocity
    pub fn update_position(&mut self, dt: f64) {
        self.previous_position = self.position;
        self.position += self.velocity * dt;
    }
}

/// Startup constants for the simulation. Not exposed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub num_bodies: usize,
    pub mass_range: (f64, f64),
    pub velocity_range: (f64, f64),
    pub margin: i64,
    pub gravitational_constant: f64,
    pub min_distance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_bodies: NUM_BODIES,
            mass_range: (BODY_MASS, BODY_MASS),
            velocity_range: (-0.05, 0.05),
            margin: 100,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            min_distance: MIN_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_mass() {
        assert!(Body::new(DVec2::ZERO, DVec2::ZERO, 0.0, BodyColor::Red).is_err());
        assert!(Body::new(DVec2::ZERO, DVec2::ZERO, -1.0, BodyColor::Red).is_err());
        assert!(Body::new(DVec2::ZERO, DVec2::ZERO, f64::NAN, BodyColor::Red).is_err());
        assert!(Body::new(DVec2::ZERO, DVec2::ZERO, f64::INFINITY, BodyColor::Red).is_err());
    }

    #[test]
    fn rejects_non_finite_vectors() {
        let bad = DVec2::new(f64::NAN, 0.0);
        assert!(Body::new(bad, DVec2::ZERO, 1.0, BodyColor::Red).is_err());
        assert!(Body::new(DVec2::ZERO, bad, 1.0, BodyColor::Red).is_err());
    }

    #[test]
    fn new_body_starts_with_previous_equal_to_position() {
        let body = Body::new(DVec2::new(3.0, 4.0), DVec2::X, 2.0, BodyColor::Cyan).unwrap();
        assert_eq!(body.previous_position, body.position);
        assert_eq!(body.radius, BODY_RADIUS);
        assert_eq!(body.mass(), 2.0);
    }

    #[test]
    fn apply_force_changes_only_velocity() {
        let mut body = Body::new(DVec2::new(1.0, 1.0), DVec2::new(0.5, 0.0), 4.0, BodyColor::Red).unwrap();
        body.apply_force(DVec2::new(8.0, -4.0), 0.5);

        assert_eq!(body.velocity, DVec2::new(1.5, -0.5));
        assert_eq!(body.position, DVec2::new(1.0, 1.0));
    }

    #[test]
    fn update_position_snapshots_before_moving() {
        let mut body = Body::new(DVec2::new(10.0, 20.0), DVec2::new(2.0, -4.0), 1.0, BodyColor::Red).unwrap();
        body.update_position(0.25);

        assert_eq!(body.previous_position, DVec2::new(10.0, 20.0));
        assert_eq!(body.position, DVec2::new(10.5, 19.0));
    }

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(BodyColor::for_index(0), BodyColor::Red);
        assert_eq!(BodyColor::for_index(2), BodyColor::Green);
        assert_eq!(BodyColor::for_index(8), BodyColor::Red);
        assert_eq!(BodyColor::for_index(15), BodyColor::Pink);
    }

    #[test]
    fn linear_color_keeps_primaries() {
        assert_eq!(BodyColor::Red.linear_rgba(), [1.0, 0.0, 0.0, 1.0]);
        let [_, g, _, a] = BodyColor::Orange.linear_rgba();
        assert!(g > 0.0 && g < 1.0);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn default_mass_is_ten_to_the_seventeen_and_a_half() {
        let expected = 10f64.powf(17.5);
        assert!((BODY_MASS - expected).abs() / expected < 1e-12);
        assert_eq!(SimulationConfig::default().mass_range, (BODY_MASS, BODY_MASS));
    }
}
