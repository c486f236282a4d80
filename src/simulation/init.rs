use anyhow::Result;
use glam::DVec2;
use rand::{Rng, RngCore};

use crate::simulation::trait_def::Scenario;
use crate::simulation::types::{Body, BodyColor, SimulationConfig};

/// Bodies scattered uniformly over the canvas, nearly at rest
pub struct RandomCluster {
    config: SimulationConfig,
    canvas: (u32, u32),
}

impl RandomCluster {
    pub fn new(config: SimulationConfig, canvas: (u32, u32)) -> Self {
        Self { config, canvas }
    }
}

impl Scenario for RandomCluster {
    fn name(&self) -> &str {
        "Random Cluster"
    }

    fn description(&self) -> &str {
        "Equal masses dropped at random spots with a tiny random drift"
    }

    fn initialize_bodies(&self, rng: &mut dyn RngCore) -> Result<Vec<Body>> {
        create_random_bodies(rng, &self.config, self.canvas)
    }
}

pub fn create_random_bodies(
    rng: &mut dyn RngCore,
    config: &SimulationConfig,
    (width, height): (u32, u32),
) -> Result<Vec<Body>> {
    let (min_mass, max_mass) = config.mass_range;
    let (min_velocity, max_velocity) = config.velocity_range;
    let mut bodies = Vec::with_capacity(config.num_bodies);

    for i in 0..config.num_bodies {
        // Whole-pixel starting spot inside the margin
        let x = rng.gen_range(config.margin..=i64::from(width) - config.margin);
        let y = rng.gen_range(config.margin..=i64::from(height) - config.margin);

        let velocity = DVec2::new(
            rng.gen_range(min_velocity..=max_velocity),
            rng.gen_range(min_velocity..=max_velocity),
        );
        let mass = rng.gen_range(min_mass..=max_mass);

        bodies.push(Body::new(
            DVec2::new(x as f64, y as f64),
            velocity,
            mass,
            BodyColor::for_index(i),
        )?);
    }

    Ok(bodies)
}
