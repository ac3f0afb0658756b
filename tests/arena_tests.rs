#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evo_arena::simulation::agent::Team;
use evo_arena::simulation::arena::{Arena, RoundOutcome};
use evo_arena::simulation::brain::Brain;
use evo_arena::simulation::clock::ManualClock;
use evo_arena::simulation::event_log::EventKind;
use evo_arena::simulation::params::{Params, ParamsError};
use evo_arena::simulation::projectile::Projectile;
use ndarray::{Array1, Array2};

/// Euclidean distance between the weights of two equally shaped brains.
fn weight_distance(a: &Brain, b: &Brain) -> f32 {
    a.weights()
        .iter()
        .zip(b.weights())
        .map(|(x, y)| (x - &y).mapv(|d| d * d).sum())
        .sum::<f32>()
        .sqrt()
}

fn create_test_params() -> Params {
    Params {
        seed: Some(7),
        ..Params::default()
    }
}

fn create_arena() -> (Arena, ManualClock) {
    let clock = ManualClock::default();
    let arena = Arena::with_clock(create_test_params(), clock.clone()).expect("valid params");
    (arena, clock)
}

/// A brain whose every output is exactly zero: never moves, turns or fires.
fn silent_brain() -> Brain {
    Brain::from_weights(vec![
        Array2::zeros((4, 10)),
        Array2::zeros((10, 10)),
        Array2::zeros((10, 5)),
    ])
}

/// A brain that always wants to fire and does nothing else.
///
/// The vision input is always positive, which keeps the hidden layers active.
fn trigger_happy_brain() -> Brain {
    let mut first = Array2::zeros((4, 10));
    first.row_mut(3).fill(1.0);
    let mut last = Array2::zeros((10, 5));
    last.column_mut(3).fill(1.0);
    Brain::from_weights(vec![first, Array2::ones((10, 10)), last])
}

/// A brain that fires only while a hostile bullet is in view.
fn bullet_watching_brain() -> Brain {
    let mut first = Array2::zeros((4, 10));
    first.row_mut(1).fill(1.0);
    let mut last = Array2::zeros((10, 5));
    last.column_mut(3).fill(1.0);
    Brain::from_weights(vec![first, Array2::ones((10, 10)), last])
}

/// Arena with silent brains and both agents on their default spawns.
fn create_quiet_arena() -> (Arena, ManualClock) {
    let (mut arena, clock) = create_arena();
    arena.blue.brain = silent_brain();
    arena.red.brain = silent_brain();
    arena.blue.x = 200.0;
    arena.blue.y = 300.0;
    arena.red.x = 600.0;
    arena.red.y = 300.0;
    (arena, clock)
}

#[test]
fn test_arena_creation() {
    let (arena, _) = create_arena();
    let params = &arena.params;

    assert_eq!(arena.generation, 0);
    assert_eq!(arena.round_ticks, 0);
    assert!(arena.projectiles.is_empty());

    assert!(arena.blue.x >= params.blue_spawn_x.0 && arena.blue.x <= params.blue_spawn_x.1);
    assert!(arena.red.x >= params.red_spawn_x.0 && arena.red.x <= params.red_spawn_x.1);
    for agent in [&arena.blue, &arena.red] {
        assert!(agent.y >= params.spawn_y.0 && agent.y <= params.spawn_y.1);
        assert_eq!(agent.lives, 3);
        assert_eq!(agent.score, 0);
    }
}

#[test]
fn test_invalid_params_are_rejected() {
    let params = Params {
        layer_sizes: vec![3, 10, 5],
        ..Params::default()
    };

    let result = Arena::with_clock(params, ManualClock::default());
    assert!(matches!(result, Err(ParamsError::InputWidth { actual: 3 })));
}

#[test]
fn test_seeded_arenas_agree() {
    let (mut first, _) = create_arena();
    let (mut second, _) = create_arena();

    assert_eq!(weight_distance(&first.blue.brain, &second.blue.brain), 0.0);
    assert_eq!(weight_distance(&first.red.brain, &second.red.brain), 0.0);

    for _ in 0..50 {
        first.step();
        second.step();
    }

    assert_eq!(first.blue.x, second.blue.x);
    assert_eq!(first.red.y, second.red.y);
    assert_eq!(first.blue.score, second.blue.score);
    assert_eq!(first.red.score, second.red.score);
    assert_eq!(first.projectiles, second.projectiles);
}

#[test]
fn test_idle_agents_are_penalised() {
    let (mut arena, _) = create_quiet_arena();

    for _ in 0..3 {
        arena.step();
    }

    assert_eq!(arena.blue.score, -30);
    assert_eq!(arena.red.score, -30);
    assert_eq!((arena.blue.x, arena.blue.y), (200.0, 300.0));
    assert_eq!((arena.red.x, arena.red.y), (600.0, 300.0));
    assert!(arena.projectiles.is_empty());
    assert_eq!(arena.round_ticks, 3);
}

#[test]
fn test_projectiles_fly_straight_then_leave() {
    let (mut arena, _) = create_quiet_arena();
    // Far from both agents; only a wide miss is scored.
    arena.projectiles.push(Projectile::new(400.0, 100.0, 0.3, Team::Red));

    for _ in 0..4 {
        arena.step();
    }

    assert_eq!(arena.projectiles.len(), 1);
    let projectile = arena.projectiles[0];
    assert!((projectile.x - (400.0 + 60.0 * 0.3f32.cos())).abs() < 1e-3);
    assert!((projectile.y - (100.0 + 60.0 * 0.3f32.sin())).abs() < 1e-3);

    for _ in 0..30 {
        arena.step();
    }
    assert!(arena.projectiles.is_empty());
}

#[test]
fn test_firing_through_decisions() {
    let (mut arena, clock) = create_quiet_arena();
    arena.blue.brain = trigger_happy_brain();

    arena.step();

    assert_eq!(arena.projectiles.len(), 1);
    assert_eq!(arena.projectiles[0].team, Team::Blue);
    assert!(arena.blue.has_fired);
    assert!(!arena.red.has_fired);
    // Shot reward, then a wide miss against the distant red agent.
    assert_eq!(arena.blue.score, 2 - 50);
    assert_eq!(arena.blue.bullets_fired, 0);

    // Cooldown still running: no second shot.
    arena.step();
    assert!(!arena.blue.has_fired);
    assert_eq!(arena.projectiles.len(), 1);

    clock.advance_secs(2.0);
    arena.step();
    assert!(arena.blue.has_fired);
    assert_eq!(arena.projectiles.len(), 2);
    assert!(
        arena
            .event_log
            .iter()
            .any(|event| event.kind == EventKind::Shot)
    );
}

#[test]
fn test_decisions_ignore_same_tick_moves() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.brain = trigger_happy_brain();
    arena.red.brain = bullet_watching_brain();
    arena.blue.x = 380.0;
    arena.blue.heading = 0.0;
    arena.red.x = 420.0;
    arena.red.heading = std::f32::consts::PI;

    arena.step();

    // Red decided on the world before blue's shot existed.
    assert!(arena.blue.has_fired);
    assert!(!arena.red.has_fired);
    assert_eq!(arena.projectiles.len(), 1);

    arena.step();

    assert!(arena.red.has_fired);
}

#[test]
fn test_non_finite_params_are_rejected() {
    let params = Params {
        max_vision_field: f32::NAN,
        ..create_test_params()
    };

    let result = Arena::with_clock(params, ManualClock::default());
    assert!(matches!(
        result,
        Err(ParamsError::Invalid { field: "max_vision_field", .. })
    ));
}

#[test]
fn test_negative_fire_output_never_fires() {
    let (mut arena, _) = create_quiet_arena();
    let now = arena.now();

    arena.apply_decision(Team::Blue, &Array1::from_vec(vec![0.0, 0.0, 0.0, -0.5, 0.0]), now);
    arena.apply_decision(Team::Blue, &Array1::from_vec(vec![0.0, 0.0, 0.0, 0.0, 0.0]), now);

    assert!(arena.projectiles.is_empty());
    assert!(arena.blue.can_fire(now));
}

#[test]
fn test_decision_moves_turns_and_widens() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.heading = 0.0;
    let now = arena.now();

    arena.apply_decision(Team::Blue, &Array1::from_vec(vec![1.0, 0.0, 0.5, 0.0, 0.1]), now);

    assert!((arena.blue.x - 205.0).abs() < 1e-4);
    assert!((arena.blue.heading - 0.05).abs() < 1e-5);
    assert!((arena.blue.vision_field - (std::f32::consts::FRAC_PI_4 + 0.01)).abs() < 1e-5);
}

#[test]
fn test_hit_scoring() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.x = 395.0;
    arena.red.x = 405.0;
    arena.projectiles.push(Projectile::new(400.0, 300.0, 0.0, Team::Blue));

    arena.resolve_collisions();

    assert_eq!(arena.red.lives, 2);
    assert_eq!(arena.blue.lives, 3);
    assert_eq!(arena.blue.score, 500);
    assert_eq!(arena.blue.bullets_hit, 1);
    assert_eq!(arena.blue.consecutive_hits, 1);
    assert!(arena.projectiles.is_empty());
}

#[test]
fn test_hit_streak_bonus() {
    let (mut arena, _) = create_quiet_arena();
    arena.red.x = 600.0;
    arena.red.y = 300.0;

    for _ in 0..3 {
        arena.projectiles.push(Projectile::new(590.0, 300.0, 0.0, Team::Blue));
        arena.resolve_collisions();
    }

    // 500, then 500 + 2 * 500, then 500 + 3 * 500.
    assert_eq!(arena.blue.score, 4000);
    assert_eq!(arena.blue.consecutive_hits, 3);
    assert_eq!(arena.red.lives, 0);
}

#[test]
fn test_lives_are_not_floored() {
    let (mut arena, _) = create_quiet_arena();
    arena.red.lives = 0;
    arena.projectiles.push(Projectile::new(600.0, 305.0, 0.0, Team::Blue));

    arena.resolve_collisions();

    assert_eq!(arena.red.lives, -1);
}

#[test]
fn test_near_miss_rewards_target() {
    let (mut arena, _) = create_quiet_arena();
    arena.projectiles.push(Projectile::new(220.0, 300.0, 0.0, Team::Red));

    arena.resolve_collisions();

    assert_eq!(arena.blue.score, 5);
    assert_eq!(arena.red.score, 0);
    assert_eq!(arena.blue.lives, 3);
    assert_eq!(arena.projectiles.len(), 1);
    assert!(
        arena
            .event_log
            .iter()
            .any(|event| event.kind == EventKind::Dodge)
    );
}

#[test]
fn test_hit_radius_is_exclusive() {
    let (mut arena, _) = create_quiet_arena();
    arena.projectiles.push(Projectile::new(215.0, 300.0, 0.0, Team::Red));

    arena.resolve_collisions();

    // Exactly on the hit radius counts as a near miss.
    assert_eq!(arena.blue.lives, 3);
    assert_eq!(arena.blue.score, 5);
}

#[test]
fn test_wide_miss_penalises_shooter() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.consecutive_hits = 2;
    arena.projectiles.push(Projectile::new(600.0, 150.0, 0.0, Team::Blue));

    arena.resolve_collisions();

    assert_eq!(arena.blue.score, -50);
    assert_eq!(arena.blue.consecutive_hits, 0);
    assert_eq!(arena.red.score, 0);
    assert_eq!(arena.projectiles.len(), 1);
}

#[test]
fn test_dead_zone_scores_nothing() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.consecutive_hits = 1;
    arena.projectiles.push(Projectile::new(600.0, 250.0, 0.0, Team::Blue));

    arena.resolve_collisions();

    assert_eq!(arena.blue.score, 0);
    assert_eq!(arena.red.score, 0);
    assert_eq!(arena.blue.consecutive_hits, 1);
}

#[test]
fn test_activity_shaping() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.bullets_fired = 2;

    arena.apply_activity_shaping();

    assert_eq!(arena.blue.score, 4);
    assert_eq!(arena.red.score, -10);
    assert_eq!(arena.blue.bullets_fired, 0);
}

#[test]
fn test_tally_winner() {
    let (mut arena, _) = create_quiet_arena();
    arena.red.lives = 2;

    let outcome = arena.tally_round_outcome();

    assert_eq!(outcome, RoundOutcome::Winner(Team::Blue));
    assert_eq!(arena.blue.score, 500);
    assert_eq!(arena.red.score, 0);
}

#[test]
fn test_tally_draw() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.lives = 1;
    arena.red.lives = 1;

    let outcome = arena.tally_round_outcome();

    assert_eq!(outcome, RoundOutcome::Draw);
    assert_eq!(arena.blue.score, 250);
    assert_eq!(arena.red.score, 250);
}

#[test]
fn test_display_scores() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.lives = 1;
    arena.blue.score = 200;
    arena.red.score = -40;

    assert_eq!(arena.display_score(Team::Blue), -1800);
    assert_eq!(arena.display_scores(), (-1800, -40));

    let board = arena.scores();
    assert_eq!(board.blue_score, -1800);
    assert_eq!(board.red_score, -40);
    assert_eq!(board.blue_lives, 1);
    assert_eq!(board.red_lives, 3);
    assert_eq!(board.generation, 0);
}

#[test]
fn test_evolve_starts_fresh_round() {
    let (mut arena, clock) = create_arena();
    let blue_brain = arena.blue.brain.clone();
    let red_brain = arena.red.brain.clone();

    for _ in 0..10 {
        arena.step();
    }
    arena.blue.lives = 1;
    arena.red.score = 900;
    arena.projectiles.push(Projectile::new(400.0, 300.0, 0.0, Team::Red));
    clock.advance_secs(30.0);

    let generation = arena.evolve();

    assert_eq!(generation, 1);
    assert_eq!(arena.generation, 1);
    assert_eq!(arena.round_ticks, 0);
    assert!(arena.projectiles.is_empty());
    assert_eq!(arena.round_started_at, arena.now());
    assert_eq!((arena.blue.x, arena.blue.y), (200.0, 300.0));
    assert_eq!((arena.red.x, arena.red.y), (600.0, 300.0));
    for agent in [&arena.blue, &arena.red] {
        assert_eq!(agent.lives, 3);
        assert_eq!(agent.score, 0);
        assert_eq!(agent.bullets_fired, 0);
        assert_eq!(agent.bullets_hit, 0);
        assert_eq!(agent.consecutive_hits, 0);
        assert!(!agent.has_fired);
    }
    assert!(weight_distance(&blue_brain, &arena.blue.brain) > 0.0);
    assert!(weight_distance(&red_brain, &arena.red.brain) > 0.0);
    assert!(
        arena
            .event_log
            .iter()
            .any(|event| event.kind == EventKind::Generation)
    );
}

#[test]
fn test_reset_round_keeps_heading_and_vision() {
    let (mut arena, _) = create_quiet_arena();
    arena.blue.heading = 2.5;
    arena.red.vision_field = 1.2;
    arena.round_ticks = 17;

    arena.reset_round();

    assert_eq!(arena.blue.heading, 2.5);
    assert_eq!(arena.red.vision_field, 1.2);
    assert_eq!(arena.round_ticks, 0);
    assert_eq!(arena.generation, 0);
}

#[test]
fn test_snapshot_traces() {
    let (arena, _) = create_arena();

    let snapshot = arena.snapshot();

    assert_eq!(snapshot.generation, 0);
    assert_eq!(snapshot.blue.team, Team::Blue);
    assert_eq!(snapshot.red.team, Team::Red);
    for team in Team::ALL {
        let trace = snapshot.network(team);
        assert_eq!(trace.inputs.len(), 4);
        assert_eq!(trace.outputs.len(), 5);
        let shapes: Vec<_> = trace.weights.iter().map(|w| w.dim()).collect();
        assert_eq!(shapes, vec![(4, 10), (10, 10), (10, 5)]);
        assert_eq!(trace.outputs, arena.agent(team).brain.think(&trace.inputs));
        assert_eq!(snapshot.agent(team).x, arena.agent(team).x);
    }
}

#[test]
fn test_snapshot_does_not_mutate() {
    let (arena, _) = create_arena();

    let first = arena.snapshot();
    let second = arena.snapshot();

    assert_eq!(first.blue, second.blue);
    assert_eq!(first.red_network.outputs, second.red_network.outputs);
    assert_eq!(arena.round_ticks, 0);
}

#[test]
fn test_tick_returns_snapshot() {
    let (mut arena, _) = create_quiet_arena();

    let snapshot = arena.tick();

    assert_eq!(snapshot.round_ticks, 1);
    assert_eq!(snapshot.blue.score, -10);
    assert_eq!(snapshot.red.score, -10);

    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    assert!(json.contains("blue_network"));
}
