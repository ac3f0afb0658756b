//! Trait for entities that have a position in the arena.
//!
//! Agents, projectiles and the read-only agent views handed to perception all
//! implement it, so distance and bearing queries are written once.

use geo::Point;

use super::geometric_utils::{bearing, point_distance};

/// Trait for entities with a position in 2D space.
pub trait Locatable {
    /// Returns the entity's position.
    fn pos(&self) -> Point<f32>;

    /// Euclidean distance to another entity.
    fn distance_to<L: Locatable + ?Sized>(&self, other: &L) -> f32 {
        point_distance(self.pos(), other.pos())
    }

    /// Bearing from this entity towards another one, in radians.
    fn bearing_to<L: Locatable + ?Sized>(&self, other: &L) -> f32 {
        bearing(self.pos(), other.pos())
    }
}
