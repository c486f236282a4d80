use glam::DVec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gravity_trails::simulation::types::{BODY_MASS, GRAVITATIONAL_CONSTANT, MIN_DISTANCE};
use gravity_trails::simulation::{
    Body, BodyColor, Gravity, RandomCluster, Scenario, SimulationConfig, Simulator,
};

/// Two bodies at rest, `distance` apart along x, centred on (1000, 700)
fn two_body_system(distance: f64, mass: f64) -> Simulator {
    let a = Body::new(DVec2::new(1000.0 - distance / 2.0, 700.0), DVec2::ZERO, mass, BodyColor::Red).unwrap();
    let b = Body::new(DVec2::new(1000.0 + distance / 2.0, 700.0), DVec2::ZERO, mass, BodyColor::Blue).unwrap();
    Simulator::new(vec![a, b], Gravity::default())
}

fn reference_simulator(seed: u64) -> Simulator {
    let scenario = RandomCluster::new(SimulationConfig::default(), (2560, 1440));
    let bodies = scenario
        .initialize_bodies(&mut StdRng::seed_from_u64(seed))
        .unwrap();
    Simulator::new(bodies, Gravity::default())
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn pairwise_force_matches_newton() {
    let sim = two_body_system(200.0, BODY_MASS);
    let forces = sim.compute_forces();

    let expected = GRAVITATIONAL_CONSTANT * BODY_MASS * BODY_MASS / (200.0 * 200.0);

    assert!(((forces[0].x - expected) / expected).abs() < 1e-12);
    assert_eq!(forces[0].y, 0.0);
    assert!(forces[1].x < 0.0);
}

#[test]
fn ordered_pairs_are_independent_but_opposite() {
    let sim = two_body_system(250.0, BODY_MASS);
    let gravity = sim.gravity();
    let [a, b] = [sim.bodies()[0], sim.bodies()[1]];

    let on_a = gravity.force_between(&a, &b);
    let on_b = gravity.force_between(&b, &a);

    assert_eq!(on_a.length(), on_b.length());
    assert_eq!(on_a, -on_b);
}

#[test]
fn close_pair_feels_nothing() {
    let sim = two_body_system(MIN_DISTANCE, BODY_MASS);
    assert_eq!(sim.compute_forces(), vec![DVec2::ZERO, DVec2::ZERO]);
}

// ==================================================================================
// End-to-end scenarios
// ==================================================================================

#[test]
fn two_bodies_fall_toward_each_other() {
    let mut sim = two_body_system(200.0, BODY_MASS);
    let before = [sim.bodies()[0].position, sim.bodies()[1].position];

    sim.advance(1.0 / 120.0);

    let [a, b] = [sim.bodies()[0], sim.bodies()[1]];

    // Velocities point at each other with equal speed
    assert!(a.velocity.x > 0.0 && b.velocity.x < 0.0);
    assert_eq!(a.velocity.y, 0.0);
    assert!(((a.velocity.length() - b.velocity.length()) / a.velocity.length()).abs() < 1e-12);

    // Moved a tiny but nonzero amount inward
    let moved_a = a.position.x - before[0].x;
    let moved_b = before[1].x - b.position.x;
    assert!(moved_a > 0.0 && moved_a < 1.0);
    assert!(moved_b > 0.0 && moved_b < 1.0);
    assert!((a.position - b.position).length() < 200.0);

    // Trail segment spans exactly this step
    assert_eq!(a.previous_position, before[0]);
    assert_eq!(b.previous_position, before[1]);
}

#[test]
fn lone_body_coasts_in_a_straight_line() {
    let start = DVec2::new(500.0, 600.0);
    let velocity = DVec2::new(0.03, -0.02);
    let body = Body::new(start, velocity, BODY_MASS, BodyColor::Yellow).unwrap();
    let mut sim = Simulator::new(vec![body], Gravity::default());

    let dt = 0.125;
    for _ in 0..1000 {
        assert_eq!(sim.compute_forces(), vec![DVec2::ZERO]);
        sim.advance(dt);
        assert_eq!(sim.bodies()[0].velocity, velocity);
    }

    let expected = start + velocity * dt * 1000.0;
    assert!((sim.bodies()[0].position - expected).length() < 1e-9);
}

#[test]
fn trajectories_are_reproducible() {
    let dts = [1.0 / 120.0, 0.009, 0.0083, 0.012, 1.0 / 60.0];

    let mut first = reference_simulator(2024);
    let mut second = reference_simulator(2024);
    assert_eq!(first.bodies(), second.bodies());

    for _ in 0..200 {
        for dt in dts {
            first.advance(dt);
            second.advance(dt);
        }
    }

    assert_eq!(first.bodies(), second.bodies());
}

#[test]
fn body_count_never_changes() {
    let mut sim = reference_simulator(9);
    let masses: Vec<f64> = sim.bodies().iter().map(Body::mass).collect();

    for _ in 0..500 {
        sim.advance(1.0 / 120.0);
    }

    assert_eq!(sim.bodies().len(), 3);
    let after: Vec<f64> = sim.bodies().iter().map(Body::mass).collect();
    assert_eq!(masses, after);
}
