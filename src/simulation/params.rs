//! Simulation parameters.
//!
//! Every tunable constant of the arena lives here. The defaults reproduce the
//! classic two-bot setup: an 800×600 field split down the middle, three lives
//! per bot and a `4 → 10 → 10 → 5` network.

use std::f32::consts::{FRAC_PI_4, PI};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of perception inputs every network must accept.
pub const INPUT_SIZE: usize = 4;
/// Number of decision outputs every network must produce.
pub const OUTPUT_SIZE: usize = 5;

/// Errors raised while building or loading [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// A value is out of its allowed range.
    #[error("invalid parameter `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },
    /// The network input width is not [`INPUT_SIZE`].
    #[error("network input width {actual} must be 4")]
    InputWidth {
        /// Configured width.
        actual: usize,
    },
    /// The network output width is not [`OUTPUT_SIZE`].
    #[error("network output width {actual} must be 5")]
    OutputWidth {
        /// Configured width.
        actual: usize,
    },
    /// Reading or writing a parameter file failed.
    #[error("parameter file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A parameter file is not valid JSON for [`Params`].
    #[error("parameter file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Simulation parameters that control arena behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Arena width.
    pub arena_width: f32,
    /// Arena height.
    pub arena_height: f32,
    /// Horizontal range the blue bot is confined to.
    pub blue_x_range: (f32, f32),
    /// Horizontal range the red bot is confined to.
    pub red_x_range: (f32, f32),
    /// Blue position after a round reset.
    pub blue_spawn: (f32, f32),
    /// Red position after a round reset.
    pub red_spawn: (f32, f32),
    /// Horizontal range for the blue bot's initial random spawn.
    pub blue_spawn_x: (f32, f32),
    /// Horizontal range for the red bot's initial random spawn.
    pub red_spawn_x: (f32, f32),
    /// Vertical range for both bots' initial random spawn.
    pub spawn_y: (f32, f32),
    /// Neural network layer dimensions, input and output included.
    pub layer_sizes: Vec<usize>,
    /// Lives at the start of every round.
    pub initial_lives: i32,
    /// Full vision cone width for freshly created bots (radians).
    pub initial_vision_field: f32,
    /// Lower bound of the vision cone width.
    pub min_vision_field: f32,
    /// Upper bound of the vision cone width.
    pub max_vision_field: f32,
    /// Distance a bot covers per tick at full throttle.
    pub max_speed: f32,
    /// Bullet speed as a multiple of `max_speed`.
    pub bullet_speed_multiplier: f32,
    /// Heading change per unit of (turn right − turn left).
    pub turn_gain: f32,
    /// Vision change per unit of the change-vision output.
    pub vision_gain: f32,
    /// Minimum wall-clock time between two shots of one bot (seconds).
    pub shot_cooldown_secs: f64,
    /// Projectiles closer than this hit.
    pub hit_radius: f32,
    /// Projectiles closer than this (but not hitting) reward the target for dodging.
    pub near_miss_radius: f32,
    /// Projectiles farther than this penalise the shooter.
    pub wide_miss_distance: f32,
    /// Score for a hit, also the unit of the consecutive-hit bonus.
    pub hit_reward: i32,
    /// Dodge bonus for the target of a near miss.
    pub near_miss_reward: i32,
    /// Penalty for the shooter of a wide miss.
    pub wide_miss_penalty: i32,
    /// Reward per bullet fired in a tick.
    pub shot_reward: i32,
    /// Penalty for a tick without firing.
    pub inactivity_penalty: i32,
    /// End-of-round bonus for the bot with more lives.
    pub round_win_bonus: i32,
    /// End-of-round bonus for each bot on equal lives.
    pub round_draw_bonus: i32,
    /// Display-score penalty per life lost.
    pub life_loss_penalty: i32,
    /// Scale of the Gaussian noise added on every generation.
    pub mutation_rate: f32,
    /// Seed for the arena's random source; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Viewer: seconds between ticks.
    pub tick_interval_secs: f32,
    /// Viewer: seconds between automatic generation advances.
    pub generation_secs: f32,
    /// Number of recent events kept in the event log.
    pub event_log_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            blue_x_range: (0.0, 395.0),
            red_x_range: (405.0, 800.0),
            blue_spawn: (200.0, 300.0),
            red_spawn: (600.0, 300.0),
            blue_spawn_x: (100.0, 300.0),
            red_spawn_x: (500.0, 700.0),
            spawn_y: (100.0, 500.0),
            layer_sizes: vec![INPUT_SIZE, 10, 10, OUTPUT_SIZE],
            initial_lives: 3,
            initial_vision_field: FRAC_PI_4,
            min_vision_field: 0.1,
            max_vision_field: PI,
            max_speed: 5.0,
            bullet_speed_multiplier: 3.0,
            turn_gain: 0.1,
            vision_gain: 0.1,
            shot_cooldown_secs: 2.0,
            hit_radius: 15.0,
            near_miss_radius: 30.0,
            wide_miss_distance: 100.0,
            hit_reward: 500,
            near_miss_reward: 5,
            wide_miss_penalty: 50,
            shot_reward: 2,
            inactivity_penalty: 10,
            round_win_bonus: 500,
            round_draw_bonus: 250,
            life_loss_penalty: 1000,
            mutation_rate: 0.1,
            seed: None,
            tick_interval_secs: 0.1,
            generation_secs: 30.0,
            event_log_size: 20,
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ParamsError {
    ParamsError::Invalid { field, reason }
}

fn check_range(
    field: &'static str,
    range: (f32, f32),
    bounds: (f32, f32),
) -> Result<(), ParamsError> {
    if range.0 > range.1 {
        return Err(invalid(field, "range is inverted"));
    }
    if range.0 < bounds.0 || range.1 > bounds.1 {
        return Err(invalid(field, "range leaves the arena"));
    }
    Ok(())
}

fn check_inside(
    field: &'static str,
    point: (f32, f32),
    x_range: (f32, f32),
    y_range: (f32, f32),
) -> Result<(), ParamsError> {
    if point.0 < x_range.0 || point.0 > x_range.1 || point.1 < y_range.0 || point.1 > y_range.1 {
        return Err(invalid(field, "spawn lies outside the team's half"));
    }
    Ok(())
}

impl Params {
    /// Bullet speed per tick.
    pub fn bullet_speed(&self) -> f32 {
        self.max_speed * self.bullet_speed_multiplier
    }

    /// Vertical range shared by both teams.
    pub fn y_range(&self) -> (f32, f32) {
        (0.0, self.arena_height)
    }

    fn float_fields(&self) -> [(&'static str, f32); 23] {
        [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("blue_x_range", self.blue_x_range.0),
            ("blue_x_range", self.blue_x_range.1),
            ("red_x_range", self.red_x_range.0),
            ("red_x_range", self.red_x_range.1),
            ("blue_spawn", self.blue_spawn.0),
            ("blue_spawn", self.blue_spawn.1),
            ("red_spawn", self.red_spawn.0),
            ("red_spawn", self.red_spawn.1),
            ("initial_vision_field", self.initial_vision_field),
            ("min_vision_field", self.min_vision_field),
            ("max_vision_field", self.max_vision_field),
            ("max_speed", self.max_speed),
            ("bullet_speed_multiplier", self.bullet_speed_multiplier),
            ("turn_gain", self.turn_gain),
            ("vision_gain", self.vision_gain),
            ("hit_radius", self.hit_radius),
            ("near_miss_radius", self.near_miss_radius),
            ("wide_miss_distance", self.wide_miss_distance),
            ("mutation_rate", self.mutation_rate),
            ("tick_interval_secs", self.tick_interval_secs),
            ("generation_secs", self.generation_secs),
        ]
    }

    /// Checks every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        let spawn_ranges = [
            ("blue_spawn_x", self.blue_spawn_x),
            ("red_spawn_x", self.red_spawn_x),
            ("spawn_y", self.spawn_y),
        ];
        for (field, (low, high)) in spawn_ranges {
            if !low.is_finite() || !high.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if !self.shot_cooldown_secs.is_finite() {
            return Err(invalid("shot_cooldown_secs", "must be finite"));
        }

        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(invalid("arena_width/arena_height", "must be positive"));
        }

        let x_bounds = (0.0, self.arena_width);
        let y_range = self.y_range();
        check_range("blue_x_range", self.blue_x_range, x_bounds)?;
        check_range("red_x_range", self.red_x_range, x_bounds)?;
        check_range("blue_spawn_x", self.blue_spawn_x, self.blue_x_range)?;
        check_range("red_spawn_x", self.red_spawn_x, self.red_x_range)?;
        check_range("spawn_y", self.spawn_y, y_range)?;
        check_inside("blue_spawn", self.blue_spawn, self.blue_x_range, y_range)?;
        check_inside("red_spawn", self.red_spawn, self.red_x_range, y_range)?;

        if self.layer_sizes.len() < 2 {
            return Err(invalid("layer_sizes", "needs at least an input and an output"));
        }
        if self.layer_sizes.contains(&0) {
            return Err(invalid("layer_sizes", "layers must be non-empty"));
        }
        if self.layer_sizes[0] != INPUT_SIZE {
            return Err(ParamsError::InputWidth {
                actual: self.layer_sizes[0],
            });
        }
        let output = self.layer_sizes[self.layer_sizes.len() - 1];
        if output != OUTPUT_SIZE {
            return Err(ParamsError::OutputWidth { actual: output });
        }

        if self.initial_lives <= 0 {
            return Err(invalid("initial_lives", "must be positive"));
        }
        if self.min_vision_field <= 0.0 || self.min_vision_field > self.max_vision_field {
            return Err(invalid(
                "min_vision_field/max_vision_field",
                "need 0 < min <= max",
            ));
        }
        if self.max_speed <= 0.0 || self.bullet_speed_multiplier <= 0.0 {
            return Err(invalid("max_speed/bullet_speed_multiplier", "must be positive"));
        }
        if self.shot_cooldown_secs < 0.0 {
            return Err(invalid("shot_cooldown_secs", "must not be negative"));
        }
        if self.hit_radius <= 0.0
            || self.near_miss_radius <= self.hit_radius
            || self.wide_miss_distance < self.near_miss_radius
        {
            return Err(invalid(
                "hit_radius/near_miss_radius/wide_miss_distance",
                "need 0 < hit < near miss <= wide miss",
            ));
        }
        if self.mutation_rate < 0.0 {
            return Err(invalid("mutation_rate", "must not be negative"));
        }
        if self.tick_interval_secs <= 0.0 || self.generation_secs <= 0.0 {
            return Err(invalid("tick_interval_secs/generation_secs", "must be positive"));
        }

        Ok(())
    }

    /// Saves the parameters to a pretty-printed JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
