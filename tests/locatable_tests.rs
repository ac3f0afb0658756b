#![allow(missing_docs)]

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use evo_arena::simulation::agent::{Agent, Team};
use evo_arena::simulation::brain::Brain;
use evo_arena::simulation::locatable::Locatable;
use evo_arena::simulation::params::Params;
use evo_arena::simulation::projectile::Projectile;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

#[test]
fn test_projectile_locatable() {
    let mut projectile = Projectile::new(10.0, 20.0, 0.0, Team::Blue);

    assert_eq!(projectile.pos().x(), 10.0);
    assert_eq!(projectile.pos().y(), 20.0);

    projectile.advance(15.0);
    assert!((projectile.pos().x() - 25.0).abs() < 1e-5);
    assert!((projectile.pos().y() - 20.0).abs() < 1e-5);
}

#[test]
fn test_projectile_keeps_heading() {
    let mut projectile = Projectile::new(100.0, 100.0, FRAC_PI_4, Team::Red);

    for _ in 0..4 {
        projectile.advance(15.0);
    }

    let expected = 100.0 + 60.0 * FRAC_PI_4.cos();
    assert!((projectile.x - expected).abs() < 1e-3);
    assert!((projectile.y - expected).abs() < 1e-3);
    assert_eq!(projectile.heading, FRAC_PI_4);
}

#[test]
fn test_projectile_bounds_are_inclusive() {
    assert!(Projectile::new(0.0, 0.0, 0.0, Team::Blue).is_within(800.0, 600.0));
    assert!(Projectile::new(800.0, 600.0, 0.0, Team::Blue).is_within(800.0, 600.0));
    assert!(!Projectile::new(800.1, 300.0, 0.0, Team::Blue).is_within(800.0, 600.0));
    assert!(!Projectile::new(300.0, -0.1, 0.0, Team::Blue).is_within(800.0, 600.0));
}

#[test]
fn test_locatable_distance_and_bearing() {
    let params = Params::default();
    let mut rng = ChaCha12Rng::seed_from_u64(1);
    let agent = Agent::with_brain(
        Team::Blue,
        100.0,
        100.0,
        0.0,
        Brain::new(&params.layer_sizes, &mut rng),
        &params,
    );
    let projectile = Projectile::new(100.0, 130.0, 0.0, Team::Red);

    assert!((agent.distance_to(&projectile) - 30.0).abs() < 1e-5);
    assert!((agent.bearing_to(&projectile) - FRAC_PI_2).abs() < 1e-5);
    assert!((projectile.distance_to(&agent) - 30.0).abs() < 1e-5);
}
