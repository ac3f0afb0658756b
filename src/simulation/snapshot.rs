//! Boundary-facing views of the arena state.
//!
//! These types carry no behaviour. They exist so that a front end (the
//! viewer, or anything that serialises them with `serde_json`) can read the
//! arena without touching it.

use chrono::{DateTime, Utc};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::agent::Team;
use super::projectile::Projectile;
use super::world::AgentView;

/// What an agent perceives and would decide right now, plus its weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTrace {
    /// Perception vector.
    pub inputs: Array1<f32>,
    /// Decision vector produced from `inputs`.
    pub outputs: Array1<f32>,
    /// All weight matrices, input side first.
    pub weights: Vec<Array2<f32>>,
}

/// Full state of the arena for visualisation and introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current generation.
    pub generation: u32,
    /// Ticks since the round started.
    pub round_ticks: u64,
    /// When the current generation started.
    pub round_started_at: DateTime<Utc>,
    /// Blue agent.
    pub blue: AgentView,
    /// Red agent.
    pub red: AgentView,
    /// Projectiles in flight.
    pub projectiles: Vec<Projectile>,
    /// Blue agent's decision trace.
    pub blue_network: DecisionTrace,
    /// Red agent's decision trace.
    pub red_network: DecisionTrace,
}

impl Snapshot {
    /// View of the agent on `team`.
    pub fn agent(&self, team: Team) -> &AgentView {
        match team {
            Team::Blue => &self.blue,
            Team::Red => &self.red,
        }
    }

    /// Decision trace of the agent on `team`.
    pub fn network(&self, team: Team) -> &DecisionTrace {
        match team {
            Team::Blue => &self.blue_network,
            Team::Red => &self.red_network,
        }
    }
}

/// Scores as reported to the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Blue display score.
    pub blue_score: i32,
    /// Red display score.
    pub red_score: i32,
    /// Blue lives.
    pub blue_lives: i32,
    /// Red lives.
    pub red_lives: i32,
    /// Current generation.
    pub generation: u32,
}
