//! Sense trait and the four senses every agent perceives with.
//!
//! Each sense turns one aspect of the world into a single network input.

use chrono::{DateTime, Utc};

use super::super::world::World;
use super::Agent;

/// A single perception channel feeding one input of the agent's brain.
pub trait Sense: Send + Sync {
    /// Reads the sense for `agent` in `world` at time `now`.
    fn sense(&self, agent: &Agent, world: &World, now: DateTime<Utc>) -> f32;

    /// Short label for this input.
    fn name(&self) -> &'static str;
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

/// 1.0 when the nearest opposing agent is inside the vision cone.
pub struct EnemySight;

impl Sense for EnemySight {
    fn sense(&self, agent: &Agent, world: &World, _now: DateTime<Utc>) -> f32 {
        flag(
            world
                .nearest_opponent(agent)
                .is_some_and(|enemy| agent.in_vision_field(enemy)),
        )
    }

    fn name(&self) -> &'static str {
        "Enemy"
    }
}

/// 1.0 when the nearest hostile projectile is inside the vision cone.
pub struct BulletSight;

impl Sense for BulletSight {
    fn sense(&self, agent: &Agent, world: &World, _now: DateTime<Utc>) -> f32 {
        flag(
            world
                .nearest_hostile_projectile(agent)
                .is_some_and(|bullet| agent.in_vision_field(bullet)),
        )
    }

    fn name(&self) -> &'static str {
        "Bullet"
    }
}

/// 1.0 when the firing cooldown has elapsed.
pub struct TriggerReady;

impl Sense for TriggerReady {
    fn sense(&self, agent: &Agent, _world: &World, now: DateTime<Utc>) -> f32 {
        flag(agent.can_fire(now))
    }

    fn name(&self) -> &'static str {
        "CanShoot"
    }
}

/// Vision field width as a fraction of π.
pub struct VisionWidth;

impl Sense for VisionWidth {
    fn sense(&self, agent: &Agent, _world: &World, _now: DateTime<Utc>) -> f32 {
        agent.vision_field / std::f32::consts::PI
    }

    fn name(&self) -> &'static str {
        "Vision"
    }
}
