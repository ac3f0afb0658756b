//! Perception system that combines the senses into brain inputs.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use ndarray::Array1;

use super::super::world::World;
use super::Agent;
use super::sense::{BulletSight, EnemySight, Sense, TriggerReady, VisionWidth};

static STANDARD: LazyLock<Perception> = LazyLock::new(Perception::default);

/// Ordered set of senses whose readings form the brain's input vector.
pub struct Perception {
    senses: Vec<Box<dyn Sense>>,
}

impl Perception {
    /// The shared four-sense perception every agent uses.
    pub fn standard() -> &'static Perception {
        &STANDARD
    }

    /// Reads every sense and returns the readings in order.
    pub fn perceive(&self, agent: &Agent, world: &World, now: DateTime<Utc>) -> Array1<f32> {
        self.senses
            .iter()
            .map(|sense| sense.sense(agent, world, now))
            .collect()
    }

    /// Labels of the inputs, in order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.senses.iter().map(|sense| sense.name()).collect()
    }
}

impl Default for Perception {
    fn default() -> Self {
        Self {
            senses: vec![
                Box::new(EnemySight),
                Box::new(BulletSight),
                Box::new(TriggerReady),
                Box::new(VisionWidth),
            ],
        }
    }
}
