//! Agent state, kinematics and firing.

use chrono::{DateTime, Utc};
use geo::Point;
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::super::brain::Brain;
use super::super::geometric_utils::{angle_difference, clamp_point, wrap_angle};
use super::super::locatable::Locatable;
use super::super::params::Params;
use super::super::projectile::Projectile;
use super::super::world::{AgentView, World};
use super::Perception;
use super::Team;

/// One side's bot: a neural network plus kinematic and scoring state.
///
/// Agents:
/// - Perceive the world through four senses
/// - Move, turn and widen or narrow their vision cone based on brain outputs
/// - Fire projectiles, gated by a wall-clock cooldown
/// - Accumulate a per-round score from the arena's reward shaping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Team this agent plays for.
    pub team: Team,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Heading in radians, kept within `[0, 2π)`.
    pub heading: f32,
    /// Full width of the vision cone in radians.
    pub vision_field: f32,
    /// Neural network that controls behavior.
    pub brain: Brain,
    /// Remaining lives this round.
    pub lives: i32,
    /// Reward-shaping score accumulated this round.
    pub score: i32,
    /// Time of the last successful shot.
    pub last_shot: Option<DateTime<Utc>>,
    /// Minimum time between shots (seconds).
    pub shot_cooldown_secs: f64,
    /// Shots fired since the last activity shaping pass.
    pub bullets_fired: u32,
    /// Hits landed this round.
    pub bullets_hit: u32,
    /// Uninterrupted hits; reset by a wide miss.
    pub consecutive_hits: u32,
    /// Set when the agent fired during the current tick.
    pub has_fired: bool,
    /// Horizontal range the agent is confined to.
    pub x_range: (f32, f32),
    /// Vertical range the agent is confined to.
    pub y_range: (f32, f32),
    /// Allowed range of `vision_field`.
    pub vision_range: (f32, f32),
}

impl Agent {
    /// Creates an agent at a random spawn point with a random heading and brain.
    pub fn new_random<R: Rng + ?Sized>(team: Team, params: &Params, rng: &mut R) -> Self {
        let spawn_x = match team {
            Team::Blue => params.blue_spawn_x,
            Team::Red => params.red_spawn_x,
        };
        let x = rng.random_range(spawn_x.0..=spawn_x.1);
        let y = rng.random_range(params.spawn_y.0..=params.spawn_y.1);
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        let brain = Brain::new(&params.layer_sizes, rng);

        Self::with_brain(team, x, y, heading, brain, params)
    }

    /// Creates an agent at an explicit pose with the given brain.
    pub fn with_brain(
        team: Team,
        x: f32,
        y: f32,
        heading: f32,
        brain: Brain,
        params: &Params,
    ) -> Self {
        let x_range = match team {
            Team::Blue => params.blue_x_range,
            Team::Red => params.red_x_range,
        };

        Self {
            team,
            x,
            y,
            heading: wrap_angle(heading),
            vision_field: params
                .initial_vision_field
                .clamp(params.min_vision_field, params.max_vision_field),
            brain,
            lives: params.initial_lives,
            score: 0,
            last_shot: None,
            shot_cooldown_secs: params.shot_cooldown_secs,
            bullets_fired: 0,
            bullets_hit: 0,
            consecutive_hits: 0,
            has_fired: false,
            x_range,
            y_range: params.y_range(),
            vision_range: (params.min_vision_field, params.max_vision_field),
        }
    }

    /// Builds the perception vector
    /// `[enemy visible, hostile bullet visible, can fire, vision / π]`.
    pub fn perceive(&self, world: &World, now: DateTime<Utc>) -> Array1<f32> {
        Perception::standard().perceive(self, world, now)
    }

    /// Perceives the world and runs the brain on it.
    ///
    /// Pure: the agent is not modified.
    pub fn decide(&self, world: &World, now: DateTime<Utc>) -> Array1<f32> {
        self.brain.think(&self.perceive(world, now))
    }

    /// Checks whether `target` lies inside the forward vision cone.
    pub fn in_vision_field<L: Locatable + ?Sized>(&self, target: &L) -> bool {
        let diff = angle_difference(self.bearing_to(target), self.heading);
        diff.abs() <= self.vision_field / 2.0
    }

    /// Checks if the cooldown since the last shot has elapsed.
    pub fn can_fire(&self, now: DateTime<Utc>) -> bool {
        match self.last_shot {
            None => true,
            Some(last_shot) => {
                let elapsed = (now - last_shot).num_microseconds().unwrap_or(i64::MAX);
                elapsed as f64 / 1_000_000.0 >= self.shot_cooldown_secs
            }
        }
    }

    /// Fires a projectile if the cooldown has elapsed.
    ///
    /// The projectile leaves from the agent's position; its heading deviates
    /// from the agent's by a uniform angle within half the vision field, so a
    /// wide cone aims worse.
    pub fn fire<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) -> Option<Projectile> {
        if !self.can_fire(now) {
            return None;
        }

        let half_field = self.vision_field / 2.0;
        let spread = rng.random_range(-half_field..=half_field);

        self.last_shot = Some(now);
        self.bullets_fired += 1;
        self.has_fired = true;

        Some(Projectile::new(self.x, self.y, self.heading + spread, self.team))
    }

    /// Moves along the current heading, clipped to the agent's half of the arena.
    pub fn move_forward(&mut self, distance: f32) {
        let target = Point::new(
            self.x + self.heading.cos() * distance,
            self.y + self.heading.sin() * distance,
        );
        let clamped = clamp_point(target, self.x_range, self.y_range);
        self.x = clamped.x();
        self.y = clamped.y();
    }

    /// Turns by `delta` radians.
    pub fn rotate(&mut self, delta: f32) {
        self.heading = wrap_angle(self.heading + delta);
    }

    /// Widens or narrows the vision cone, clamped to the allowed range.
    pub fn adjust_vision(&mut self, delta: f32) {
        self.vision_field = (self.vision_field + delta).clamp(self.vision_range.0, self.vision_range.1);
    }

    /// Teleports to `spawn` and clears the per-round state.
    ///
    /// Heading, vision and the firing cooldown carry over.
    pub fn reset_for_round(&mut self, spawn: (f32, f32), lives: i32) {
        self.x = spawn.0;
        self.y = spawn.1;
        self.lives = lives;
        self.score = 0;
        self.bullets_fired = 0;
        self.bullets_hit = 0;
        self.consecutive_hits = 0;
        self.has_fired = false;
    }

    /// Read-only view of this agent for perception and snapshots.
    pub fn view(&self, now: DateTime<Utc>) -> AgentView {
        AgentView {
            team: self.team,
            x: self.x,
            y: self.y,
            heading: self.heading,
            vision_field: self.vision_field,
            lives: self.lives,
            score: self.score,
            can_fire: self.can_fire(now),
            has_fired: self.has_fired,
        }
    }
}

impl Locatable for Agent {
    fn pos(&self) -> Point<f32> {
        Point::new(self.x, self.y)
    }
}
