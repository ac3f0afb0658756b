//! Agent module containing agent state, senses and perception.

mod agent;
mod perception;
mod sense;
mod team;

pub use agent::*;
pub use perception::Perception;
pub use sense::{BulletSight, EnemySight, Sense, TriggerReady, VisionWidth};
pub use team::Team;
