//! Bounded feed of notable arena moments, newest first.
//!
//! Shots, hits, dodges, round tallies and generation changes are recorded
//! against the round tick they happened on. Wide misses are scored but not
//! recorded. The feed is emptied whenever a round resets.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// What kind of moment an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A projectile left an agent.
    Shot,
    /// A projectile struck the opposing agent.
    Hit,
    /// A projectile passed inside the near-miss radius.
    Dodge,
    /// A round was tallied or reset.
    Round,
    /// A new generation started.
    Generation,
}

impl EventKind {
    /// Short tag shown in front of the description.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Shot => "shot",
            EventKind::Hit => "hit",
            EventKind::Dodge => "dodge",
            EventKind::Round => "round",
            EventKind::Generation => "gen",
        }
    }
}

/// One recorded moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Round tick the moment belongs to.
    pub tick: u64,
    /// Category, used for colouring.
    pub kind: EventKind,
    /// Human-readable text.
    pub description: String,
}

/// Holds at most `capacity` entries; recording past that evicts the oldest.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl EventLog {
    /// Creates an empty log.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a moment on round tick `tick`. A zero-capacity log drops it.
    pub fn record(&mut self, tick: u64, kind: EventKind, description: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LoggedEvent {
            tick,
            kind,
            description: description.into(),
        });
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.entries.iter()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
