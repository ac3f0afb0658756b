//! The two-bot arena.
//!
//! The arena owns both agents and every projectile in flight. It handles:
//! - One simulation tick: perceive, decide, act, fly, collide, shape rewards
//! - Round resets and generation advances (mutation of both brains)
//! - Boundary-facing snapshots and score boards

use chrono::{DateTime, Utc};
use ndarray::Array1;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::agent::{Agent, Team};
use super::clock::{Clock, SystemClock};
use super::event_log::{EventKind, EventLog};
use super::events;
use super::params::{Params, ParamsError};
use super::projectile::Projectile;
use super::snapshot::{DecisionTrace, ScoreBoard, Snapshot};
use super::world::World;

/// Decision vector index: throttle.
pub const MOVE: usize = 0;
/// Decision vector index: turn left.
pub const TURN_LEFT: usize = 1;
/// Decision vector index: turn right.
pub const TURN_RIGHT: usize = 2;
/// Decision vector index: fire.
pub const FIRE: usize = 3;
/// Decision vector index: change vision.
pub const CHANGE_VISION: usize = 4;

/// Labels of the decision vector components, in order.
pub const OUTPUT_LABELS: [&str; 5] = ["Move", "TurnL", "TurnR", "Fire", "ChgVis"];

/// Result of comparing lives at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One team finished with strictly more lives.
    Winner(Team),
    /// Both teams finished with the same lives.
    Draw,
}

/// The arena containing all simulation state.
pub struct Arena {
    /// Parameters the arena was built with.
    pub params: Params,
    /// Blue agent.
    pub blue: Agent,
    /// Red agent.
    pub red: Agent,
    /// Projectiles in flight.
    pub projectiles: Vec<Projectile>,
    /// Generation counter, starts at 0.
    pub generation: u32,
    /// When the current generation started.
    pub round_started_at: DateTime<Utc>,
    /// Ticks since the last round reset.
    pub round_ticks: u64,
    /// Recent human-readable events.
    pub event_log: EventLog,
    rng: ChaCha12Rng,
    clock: Box<dyn Clock>,
}

impl Arena {
    /// Creates an arena driven by the system clock.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        Self::with_clock(params, SystemClock)
    }

    /// Creates an arena that reads time from `clock`.
    ///
    /// Both agents spawn at random positions within their spawn ranges with
    /// random headings and fresh brains.
    pub fn with_clock(params: Params, clock: impl Clock + 'static) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_rng(&mut rand::rng()),
        };
        let blue = Agent::new_random(Team::Blue, &params, &mut rng);
        let red = Agent::new_random(Team::Red, &params, &mut rng);
        let round_started_at = clock.now();

        Ok(Self {
            event_log: EventLog::with_capacity(params.event_log_size),
            params,
            blue,
            red,
            projectiles: Vec::new(),
            generation: 0,
            round_started_at,
            round_ticks: 0,
            rng,
            clock: Box::new(clock),
        })
    }

    /// The agent playing for `team`.
    pub fn agent(&self, team: Team) -> &Agent {
        match team {
            Team::Blue => &self.blue,
            Team::Red => &self.red,
        }
    }

    /// Mutable access to the agent playing for `team`.
    pub fn agent_mut(&mut self, team: Team) -> &mut Agent {
        match team {
            Team::Blue => &mut self.blue,
            Team::Red => &mut self.red,
        }
    }

    /// Current time according to the arena's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Captures the world as both agents perceive it at `now`.
    pub fn world(&self, now: DateTime<Utc>) -> World {
        World::capture(&[&self.blue, &self.red], &self.projectiles, now)
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        let now = self.clock.now();
        let world = self.world(now);

        // Both decisions are taken against the same world before either is applied.
        let (blue_decision, red_decision) = rayon::join(
            || self.blue.decide(&world, now),
            || self.red.decide(&world, now),
        );

        self.blue.has_fired = false;
        self.red.has_fired = false;

        self.apply_decision(Team::Blue, &blue_decision, now);
        self.apply_decision(Team::Red, &red_decision, now);

        self.advance_projectiles();
        self.resolve_collisions();
        self.apply_activity_shaping();

        self.round_ticks += 1;
        trace!(
            tick = self.round_ticks,
            projectiles = self.projectiles.len(),
            blue_score = self.blue.score,
            red_score = self.red.score,
            "arena tick"
        );
    }

    /// Applies one decision vector to the agent playing for `team`.
    ///
    /// Movement, turning and vision change always apply; a positive fire
    /// component fires if the cooldown allows.
    pub fn apply_decision(&mut self, team: Team, decision: &Array1<f32>, now: DateTime<Utc>) {
        let params = &self.params;
        let agent = match team {
            Team::Blue => &mut self.blue,
            Team::Red => &mut self.red,
        };

        agent.move_forward(decision[MOVE] * params.max_speed);
        agent.rotate((decision[TURN_RIGHT] - decision[TURN_LEFT]) * params.turn_gain);
        agent.adjust_vision(decision[CHANGE_VISION] * params.vision_gain);

        if decision[FIRE] > 0.0 && agent.can_fire(now) {
            if let Some(projectile) = agent.fire(now, &mut self.rng) {
                self.projectiles.push(projectile);
                self.event_log
                    .record(self.round_ticks, EventKind::Shot, format!("{team} fired"));
            }
        }
    }

    /// Moves every projectile and drops those that left the arena.
    pub fn advance_projectiles(&mut self) {
        let speed = self.params.bullet_speed();
        let (width, height) = (self.params.arena_width, self.params.arena_height);

        for projectile in &mut self.projectiles {
            projectile.advance(speed);
        }
        self.projectiles.retain(|p| p.is_within(width, height));
    }

    /// Scores hits, near misses and wide misses and removes spent projectiles.
    pub fn resolve_collisions(&mut self) {
        let queue = events::detect_collisions(&self.projectiles, &[&self.blue, &self.red], &self.params);
        events::apply_events(self, queue);
    }

    /// Rewards agents that fired this tick and penalises idle ones, then
    /// clears the per-tick shot counters.
    pub fn apply_activity_shaping(&mut self) {
        let shot_reward = self.params.shot_reward;
        let inactivity_penalty = self.params.inactivity_penalty;

        for agent in [&mut self.blue, &mut self.red] {
            if agent.bullets_fired > 0 {
                agent.score += shot_reward * agent.bullets_fired as i32;
            } else {
                agent.score -= inactivity_penalty;
            }
            agent.bullets_fired = 0;
        }
    }

    /// Puts both agents back on their spawn points with full lives and clears
    /// scores, counters and projectiles.
    pub fn reset_round(&mut self) {
        let lives = self.params.initial_lives;
        self.blue.reset_for_round(self.params.blue_spawn, lives);
        self.red.reset_for_round(self.params.red_spawn, lives);
        self.projectiles.clear();
        self.round_ticks = 0;
        self.event_log.clear();

        debug!(generation = self.generation, "round reset");
        self.event_log.record(0, EventKind::Round, "round reset");
    }

    /// Starts a new generation: mutates both brains and resets the round.
    ///
    /// The mutation is kept whether or not it helped.
    ///
    /// # Returns
    ///
    /// The new generation count.
    pub fn evolve(&mut self) -> u32 {
        self.generation += 1;

        let rate = self.params.mutation_rate;
        self.blue.brain.mutate(rate, &mut self.rng);
        self.red.brain.mutate(rate, &mut self.rng);

        self.reset_round();
        self.round_started_at = self.clock.now();

        info!(generation = self.generation, "advanced generation");
        self.event_log.record(
            0,
            EventKind::Generation,
            format!("generation {} started", self.generation),
        );
        self.generation
    }

    /// Awards the end-of-round bonus: the agent with more lives wins, equal
    /// lives split the draw bonus.
    pub fn tally_round_outcome(&mut self) -> RoundOutcome {
        let outcome = if self.blue.lives > self.red.lives {
            RoundOutcome::Winner(Team::Blue)
        } else if self.red.lives > self.blue.lives {
            RoundOutcome::Winner(Team::Red)
        } else {
            RoundOutcome::Draw
        };

        match outcome {
            RoundOutcome::Winner(team) => {
                self.agent_mut(team).score += self.params.round_win_bonus;
            }
            RoundOutcome::Draw => {
                self.blue.score += self.params.round_draw_bonus;
                self.red.score += self.params.round_draw_bonus;
            }
        }

        debug!(?outcome, blue_lives = self.blue.lives, red_lives = self.red.lives, "round tallied");
        let description = match outcome {
            RoundOutcome::Winner(team) => format!("{team} won the round"),
            RoundOutcome::Draw => "round drawn".to_string(),
        };
        self.event_log.record(self.round_ticks, EventKind::Round, description);
        outcome
    }

    /// Display score of one agent: a fixed penalty per life lost on top of
    /// its raw score.
    pub fn display_score(&self, team: Team) -> i32 {
        let agent = self.agent(team);
        (self.params.initial_lives - agent.lives) * -self.params.life_loss_penalty + agent.score
    }

    /// Display scores as `(blue, red)`.
    pub fn display_scores(&self) -> (i32, i32) {
        (self.display_score(Team::Blue), self.display_score(Team::Red))
    }

    /// Display scores, lives and generation.
    pub fn scores(&self) -> ScoreBoard {
        let (blue_score, red_score) = self.display_scores();
        ScoreBoard {
            blue_score,
            red_score,
            blue_lives: self.blue.lives,
            red_lives: self.red.lives,
            generation: self.generation,
        }
    }

    fn decision_trace(agent: &Agent, world: &World, now: DateTime<Utc>) -> DecisionTrace {
        let inputs = agent.perceive(world, now);
        let outputs = agent.brain.think(&inputs);
        DecisionTrace {
            inputs,
            outputs,
            weights: agent.brain.weights(),
        }
    }

    /// Current state of the arena.
    ///
    /// The decision traces show what each agent would decide against the
    /// current state; nothing is modified.
    pub fn snapshot(&self) -> Snapshot {
        let now = self.clock.now();
        let world = self.world(now);

        Snapshot {
            generation: self.generation,
            round_ticks: self.round_ticks,
            round_started_at: self.round_started_at,
            blue: self.blue.view(now),
            red: self.red.view(now),
            projectiles: self.projectiles.clone(),
            blue_network: Self::decision_trace(&self.blue, &world, now),
            red_network: Self::decision_trace(&self.red, &world, now),
        }
    }

    /// Runs one tick and returns the resulting snapshot.
    pub fn tick(&mut self) -> Snapshot {
        self.step();
        self.snapshot()
    }
}
