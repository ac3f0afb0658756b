//! The two sides of the arena.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side an agent plays for. Fixed for the agent's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Left half of the arena.
    Blue,
    /// Right half of the arena.
    Red,
}

impl Team {
    /// Both teams in iteration order.
    pub const ALL: [Team; 2] = [Team::Blue, Team::Red];

    /// Lowercase team name.
    pub fn name(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
