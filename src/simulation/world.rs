//! Per-tick snapshot of the world used for perception.
//!
//! The arena captures a [`World`] once at the start of a tick and hands the
//! same immutable copy to both agents, so neither reacts to the other's move
//! within that tick.

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, Team};
use super::locatable::Locatable;
use super::projectile::Projectile;

/// Read-only view of one agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    /// Team of the agent.
    pub team: Team,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Heading in radians.
    pub heading: f32,
    /// Full vision cone width in radians.
    pub vision_field: f32,
    /// Remaining lives.
    pub lives: i32,
    /// Raw reward-shaping score.
    pub score: i32,
    /// Whether the firing cooldown has elapsed.
    pub can_fire: bool,
    /// Whether the agent fired during the last tick.
    pub has_fired: bool,
}

impl Locatable for AgentView {
    fn pos(&self) -> Point<f32> {
        Point::new(self.x, self.y)
    }
}

/// Everything an agent can perceive during one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// All agents, in team order.
    pub agents: Vec<AgentView>,
    /// All projectiles in flight.
    pub projectiles: Vec<Projectile>,
}

impl World {
    /// Captures the current state of the given agents and projectiles.
    pub fn capture(agents: &[&Agent], projectiles: &[Projectile], now: DateTime<Utc>) -> Self {
        Self {
            agents: agents.iter().map(|agent| agent.view(now)).collect(),
            projectiles: projectiles.to_vec(),
        }
    }

    /// Nearest agent of the opposing team; the first one found wins ties.
    pub fn nearest_opponent(&self, agent: &Agent) -> Option<&AgentView> {
        self.agents
            .iter()
            .filter(|other| other.team != agent.team)
            .min_by(|a, b| agent.distance_to(*a).total_cmp(&agent.distance_to(*b)))
    }

    /// Nearest projectile fired by the opposing team; the first one found wins ties.
    pub fn nearest_hostile_projectile(&self, agent: &Agent) -> Option<&Projectile> {
        self.projectiles
            .iter()
            .filter(|projectile| projectile.team != agent.team)
            .min_by(|a, b| agent.distance_to(*a).total_cmp(&agent.distance_to(*b)))
    }
}
