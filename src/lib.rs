//! # Evo Arena - Two-Bot Neuroevolution Duel
//!
//! Two bots, blue and red, face each other across an 800×600 arena split down
//! the middle. Each bot is driven by a small feed-forward neural network that
//! never learns by gradient: between rounds its weights are nudged by random
//! mutation and kept unconditionally.
//!
//! ## Features
//!
//! - Feed-forward brains (ReLU hidden layers, tanh output)
//! - Vision-cone perception of the nearest enemy and nearest hostile bullet
//! - Cooldown-gated firing with aim spread tied to vision width
//! - Dense reward shaping: hits, streaks, dodges, wide misses and activity
//! - Generation advance by unconditional mutation
//! - Serializable snapshots for visualisation
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::agent`] - Agent behavior, senses and state
//! - [`simulation::brain`] - Neural network implementation
//! - [`simulation::arena`] - Tick, collision scoring and round lifecycle
//! - [`simulation::projectile`] - Bullets
//! - [`simulation::snapshot`] - Views handed to front ends

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent state, kinematics, senses and perception.
    pub mod agent;
    /// The arena: tick, collisions, scoring and generations.
    pub mod arena;
    /// Neural network implementation for agent brains.
    pub mod brain;
    /// Injectable wall clock for the firing cooldown.
    pub mod clock;
    /// Bounded log of recent arena events.
    pub mod event_log;
    /// Combat events queued during collision resolution.
    pub mod events;
    /// Geometric utility functions for distances and angles.
    pub mod geometric_utils;
    /// Trait for entities with a position.
    ///
    /// The [`locatable::Locatable`] trait is implemented by everything that has
    /// a position in the arena (agents, agent views, projectiles).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Bullets fired by agents.
    pub mod projectile;
    /// Boundary-facing state views.
    pub mod snapshot;
    /// Per-tick world snapshot used for perception.
    pub mod world;
}
