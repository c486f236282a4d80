pub mod forces;
pub mod init;
pub mod simulator;
pub mod trait_def;
pub mod types;

pub use forces::Gravity;
pub use init::{RandomCluster, create_random_bodies};
pub use simulator::Simulator;
pub use trait_def::Scenario;
pub use types::{Body, BodyColor, SimulationConfig};
