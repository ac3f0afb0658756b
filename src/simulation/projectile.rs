//! Projectiles fired by agents.
//!
//! A projectile flies in a straight line at a constant speed. Its heading is
//! fixed at launch; it never steers towards its target.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::agent::Team;
use super::locatable::Locatable;

/// A bullet in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Direction of travel in radians.
    pub heading: f32,
    /// Team of the agent that fired it.
    pub team: Team,
}

impl Projectile {
    /// Creates a new projectile.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Launch position
    /// * `heading` - Direction of travel in radians
    /// * `team` - Team of the shooter
    pub fn new(x: f32, y: f32, heading: f32, team: Team) -> Self {
        Self { x, y, heading, team }
    }

    /// Advances the projectile by `distance` along its heading.
    pub fn advance(&mut self, distance: f32) {
        self.x += self.heading.cos() * distance;
        self.y += self.heading.sin() * distance;
    }

    /// Checks whether the projectile is inside `[0, width] × [0, height]`.
    pub fn is_within(&self, width: f32, height: f32) -> bool {
        (0.0..=width).contains(&self.x) && (0.0..=height).contains(&self.y)
    }
}

impl Locatable for Projectile {
    fn pos(&self) -> Point<f32> {
        Point::new(self.x, self.y)
    }
}
