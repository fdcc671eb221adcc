//! Event System
//!
//! The runtime reports what happened during a step through event queues
//! instead of reaching into audio or UI. The gameplay scene drains them
//! after each step (music stops on game over, log lines, and so on).

use super::components::EnemyKind;

/// A queue for events of a single type
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All gameplay events
#[derive(Debug, Default)]
pub struct Events {
    pub player_hit: EventQueue<PlayerHitEvent>,
    pub enemy_killed: EventQueue<EnemyKilledEvent>,
    pub life_gained: EventQueue<LifeGainedEvent>,
    pub score_changed: EventQueue<ScoreChangedEvent>,
    pub game_over: EventQueue<GameOverEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// The player lost a life
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerHitEvent {
    pub lives_left: u32,
    /// True when the hit came from the void proximity check
    pub in_void: bool,
}

/// A stone took out an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyKilledEvent {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeGainedEvent {
    pub lives: u32,
}

/// Distance or a kill moved the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChangedEvent {
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub score: u32,
}
