//! Combat events produced during collision resolution.
//!
//! Collisions are detected against a frozen view of agents and projectiles,
//! queued in detection order, then applied serially. Detection only reads
//! positions, so applying in order gives the same result as scoring inline.

use tracing::debug;

use super::agent::{Agent, Team};
use super::arena::Arena;
use super::event_log::EventKind;
use super::locatable::Locatable;
use super::params::Params;
use super::projectile::Projectile;

/// Events that modify arena state.
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaEvent {
    /// A projectile came within the hit radius of an opposing agent.
    Hit {
        /// Index of the projectile in the arena's projectile list.
        projectile_idx: usize,
        /// Team that fired the projectile.
        shooter: Team,
        /// Team that was hit.
        target: Team,
    },
    /// A projectile passed within the near-miss band of an opposing agent.
    NearMiss {
        /// Team that fired the projectile.
        shooter: Team,
        /// Team that dodged.
        target: Team,
    },
    /// A projectile is farther than the wide-miss distance from an opposing agent.
    WideMiss {
        /// Team that fired the projectile.
        shooter: Team,
        /// Team that was missed.
        target: Team,
    },
}

/// Queue for collecting arena events before they are applied.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ArenaEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: ArenaEvent) {
        self.events.push(event);
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, ArenaEvent> {
        self.events.drain(..)
    }
}

/// Checks every projectile against every opposing agent.
///
/// A hit stops the checks for that projectile; near and wide misses do not,
/// so with more opponents one projectile could score against several.
pub fn detect_collisions(projectiles: &[Projectile], agents: &[&Agent], params: &Params) -> EventQueue {
    let mut queue = EventQueue::new();

    for (projectile_idx, projectile) in projectiles.iter().enumerate() {
        for agent in agents {
            if agent.team == projectile.team {
                continue;
            }

            let distance = projectile.distance_to(*agent);
            if distance < params.hit_radius {
                queue.push(ArenaEvent::Hit {
                    projectile_idx,
                    shooter: projectile.team,
                    target: agent.team,
                });
                break;
            } else if distance < params.near_miss_radius {
                queue.push(ArenaEvent::NearMiss {
                    shooter: projectile.team,
                    target: agent.team,
                });
            } else if distance > params.wide_miss_distance {
                queue.push(ArenaEvent::WideMiss {
                    shooter: projectile.team,
                    target: agent.team,
                });
            }
        }
    }

    queue
}

/// Applies all queued events to the arena state.
pub fn apply_events(arena: &mut Arena, mut queue: EventQueue) {
    let hit_reward = arena.params.hit_reward;
    let near_miss_reward = arena.params.near_miss_reward;
    let wide_miss_penalty = arena.params.wide_miss_penalty;
    let tick = arena.round_ticks;
    let mut projectiles_to_remove: Vec<usize> = Vec::new();

    for event in queue.drain() {
        match event {
            ArenaEvent::Hit {
                projectile_idx,
                shooter,
                target,
            } => {
                arena.agent_mut(target).lives -= 1;
                projectiles_to_remove.push(projectile_idx);

                let shooter_agent = arena.agent_mut(shooter);
                shooter_agent.score += hit_reward;
                shooter_agent.consecutive_hits += 1;
                let streak = shooter_agent.consecutive_hits;
                if streak > 1 {
                    shooter_agent.score += hit_reward * streak as i32;
                }
                shooter_agent.bullets_hit += 1;

                debug!(%shooter, %target, streak, "projectile hit");
                arena.event_log.record(
                    tick,
                    EventKind::Hit,
                    format!("{shooter} hit {target} (streak {streak})"),
                );
            }
            ArenaEvent::NearMiss { shooter, target } => {
                arena.agent_mut(target).score += near_miss_reward;
                arena.event_log.record(
                    tick,
                    EventKind::Dodge,
                    format!("{target} dodged a {shooter} bullet"),
                );
            }
            ArenaEvent::WideMiss { shooter, .. } => {
                let shooter_agent = arena.agent_mut(shooter);
                shooter_agent.score -= wide_miss_penalty;
                shooter_agent.consecutive_hits = 0;
            }
        }
    }

    // Remove projectiles that hit targets (in reverse order to maintain indices)
    projectiles_to_remove.sort_unstable();
    projectiles_to_remove.dedup();
    for idx in projectiles_to_remove.into_iter().rev() {
        if idx < arena.projectiles.len() {
            arena.projectiles.remove(idx);
        }
    }
}
