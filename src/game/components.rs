//! Game Components
//!
//! Plain data attached to entities. Behaviour lives in `runtime` and
//! `physics`.

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

use super::tween::{Repeat, Tween};

// =============================================================================
// Physics
// =============================================================================

/// Which sides of a body touched something during the last physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Arcade physics body: an axis-aligned box around `position` (its centre)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    /// Added on top of world gravity
    pub extra_gravity: f32,
    pub allow_gravity: bool,
    /// Fraction of vertical speed kept when landing (0 = stop dead)
    pub bounce: f32,
    pub touching: Touching,
}

impl Body {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            position: center,
            size,
            velocity: Vec2::ZERO,
            extra_gravity: 0.0,
            allow_gravity: true,
            bounce: 0.0,
            touching: Touching::default(),
        }
    }

    /// Body whose top-left corner sits at `top_left`
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left + size * 0.5, size)
    }

    pub fn with_extra_gravity(mut self, gravity: f32) -> Self {
        self.extra_gravity = gravity;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn without_gravity(mut self) -> Self {
        self.allow_gravity = false;
        self
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.size.x * 0.5
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x * 0.5
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.size.y * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y * 0.5
    }

    /// Strict AABB overlap; boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

// =============================================================================
// Presentation
// =============================================================================

/// How an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: &'static str,
    /// Display size (usually the body size)
    pub size: Vec2,
    pub alpha: f32,
    pub flip_x: bool,
    /// Degrees
    pub angle: f32,
    /// Fallback fill when the texture failed to load
    pub placeholder: [u8; 3],
}

impl Sprite {
    pub fn new(texture: &'static str, size: Vec2, placeholder: [u8; 3]) -> Self {
        Self {
            texture,
            size,
            alpha: 1.0,
            flip_x: false,
            angle: 0.0,
            placeholder,
        }
    }
}

// =============================================================================
// Entity kinds
// =============================================================================

/// Marks a ground segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Platform;

/// The rogues' gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Ugur,
    Hursit,
    Muko,
    Kader,
    Zehra,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Ugur,
        EnemyKind::Hursit,
        EnemyKind::Muko,
        EnemyKind::Kader,
        EnemyKind::Zehra,
    ];

    pub fn texture(&self) -> &'static str {
        match self {
            EnemyKind::Ugur => "ugur",
            EnemyKind::Hursit => "hursit",
            EnemyKind::Muko => "muko",
            EnemyKind::Kader => "kader",
            EnemyKind::Zehra => "zehra",
        }
    }

    /// Zehra is drawn wide; everyone else uses the standard portrait box
    pub fn is_wide(&self) -> bool {
        matches!(self, EnemyKind::Zehra)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// Heart pickup; bobs up and down on top of whatever physics does
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthPickup {
    pub bob: Tween,
}

impl HealthPickup {
    pub fn new(height: f32, period_ms: f64) -> Self {
        Self {
            bob: Tween::new(0.0, -height, period_ms).yoyo().repeat(Repeat::Forever),
        }
    }

    pub fn bob_offset(&self) -> f32 {
        self.bob.value()
    }
}

/// Short-lived label that rises and fades ("+1 Life!")
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingText {
    pub text: String,
    pub x: f32,
    pub y: Tween,
    pub alpha: Tween,
    pub font_size: f32,
    pub color: [u8; 3],
}

impl FloatingText {
    pub fn rising(text: &str, x: f32, y: f32, rise: f32, duration_ms: f64) -> Self {
        Self {
            text: text.to_string(),
            x,
            y: Tween::new(y, y - rise, duration_ms),
            alpha: Tween::new(1.0, 0.0, duration_ms),
            font_size: 24.0,
            color: [0xff, 0x00, 0x00],
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.y.advance(dt_ms);
        self.alpha.advance(dt_ms);
    }

    pub fn is_finished(&self) -> bool {
        self.y.is_finished() && self.alpha.is_finished()
    }
}

/// A thrown stone. Lives in the bullet pool rather than the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub body: Body,
    /// Rotation in degrees, spinning forever
    pub spin: Tween,
    pub expires_at_ms: f64,
}

impl Bullet {
    pub fn new(body: Body, spin_ms: f64, expires_at_ms: f64) -> Self {
        Self {
            body,
            spin: Tween::new(0.0, 360.0, spin_ms).repeat(Repeat::Forever),
            expires_at_ms,
        }
    }
}
