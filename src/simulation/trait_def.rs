use rand::RngCore;

use crate::simulation::types::Body;

/// A trait that defines how a simulation run is seeded
pub trait Scenario {
    /// Name of the scenario
    fn name(&self) -> &str;

    /// Description of the scenario
    fn description(&self) -> &str;

    /// Build the initial bodies, drawing any randomness from `rng`
    fn initialize_bodies(&self, rng: &mut dyn RngCore) -> anyhow::Result<Vec<Body>>;
}
