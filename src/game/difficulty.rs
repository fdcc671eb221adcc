//! Difficulty scaling
//!
//! One number drives everything: the multiplier grows by `step_bonus` for
//! every `step` points of score. Player speed, enemy speed and background
//! parallax scale with it linearly, the enemy spawn interval shrinks with
//! it, and the jump velocity scales with its square root so jump height
//! keeps up with the wider gaps a faster runner covers.

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    base_speed: f32,
    jump_velocity: f32,
    enemy_speed_ratio: f32,
    enemy_interval_ms: f64,
    step: u32,
    step_bonus: f32,
    multiplier: f32,
}

impl Difficulty {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            base_speed: config.player.base_speed,
            jump_velocity: config.player.jump_velocity,
            enemy_speed_ratio: config.enemies.speed_ratio,
            enemy_interval_ms: config.enemies.spawn_interval_ms,
            step: config.scoring.step.max(1),
            step_bonus: config.scoring.step_bonus,
            multiplier: 1.0,
        }
    }

    /// Recompute the multiplier for a new score
    pub fn update(&mut self, score: u32) {
        self.multiplier = 1.0 + (score / self.step) as f32 * self.step_bonus;
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn speed(&self) -> f32 {
        self.base_speed * self.multiplier
    }

    /// Horizontal velocity for an enemy walking on the ground (leftwards)
    pub fn enemy_velocity(&self) -> f32 {
        -self.speed() * self.enemy_speed_ratio
    }

    pub fn enemy_interval_ms(&self) -> f64 {
        self.enemy_interval_ms / self.multiplier as f64
    }

    /// Upward jump velocity (negative, y points down)
    pub fn jump_velocity(&self) -> f32 {
        -self.jump_velocity * self.multiplier.sqrt()
    }

    /// Background tile offset for a given camera scroll
    pub fn parallax(&self, scroll_x: f32) -> f32 {
        scroll_x * 0.75 * self.multiplier
    }
}
