//! Game Configuration
//!
//! Every tuning constant lives in `GameConfig`, loaded from
//! `assets/config/game.ron`. All sections use `#[serde(default)]`, so a file
//! only needs the values it wants to change and a missing file means
//! "play with the defaults".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::components::EnemyKind;

/// Where the config lives relative to the asset root
pub const CONFIG_PATH: &str = "assets/config/game.ron";

/// Config loading error
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File could not be read
    Io(String),
    /// File was read but is not valid RON for `GameConfig`
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    pub physics: PhysicsConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub platforms: PlatformConfig,
    pub enemies: EnemyConfig,
    pub pickups: PickupConfig,
    pub bullets: BulletConfig,
    pub scoring: ScoringConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    /// Parse a config from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Read a config file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Read from disk natively
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        Self::from_path(std::path::Path::new(path))
    }

    /// Fetch through macroquad's file API on WASM
    #[cfg(target_arch = "wasm32")]
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        let text = macroquad::file::load_string(path)
            .await
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&text)
    }

    /// Load the config, falling back to defaults on any error
    pub async fn load_or_default() -> Self {
        match Self::load(CONFIG_PATH).await {
            Ok(config) => {
                macroquad::logging::info!("Loaded config from {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                macroquad::logging::warn!("Using default config ({}: {})", CONFIG_PATH, e);
                Self::default()
            }
        }
    }
}

/// Virtual canvas the whole game is laid out on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Castle Runner".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// World gravity (px/s², positive is down)
    pub gravity: f32,
    /// Simulation rate; per-step chances are tuned for 60
    pub fixed_step_hz: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: 500.0, fixed_step_hz: 60.0 }
    }
}

impl PhysicsConfig {
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.fixed_step_hz.max(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Top of the ground platforms
    pub ground_y: f32,
    /// Anything whose centre is below this is in the void
    pub void_y: f32,
    /// Where void-dwellers are pinned
    pub void_floor_y: f32,
    /// Enemies and pickups this far behind the player are removed
    pub despawn_behind: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100_000.0,
            height: 1000.0,
            ground_y: 500.0,
            void_y: 500.0,
            void_floor_y: 550.0,
            despawn_behind: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn: (f32, f32),
    pub size: (f32, f32),
    pub extra_gravity: f32,
    pub base_speed: f32,
    pub jump_velocity: f32,
    pub start_lives: u32,
    pub max_lives: u32,
    pub invulnerable_ms: f64,
    pub flash_interval_ms: f64,
    pub flash_repeats: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: (100.0, 350.0),
            size: (105.0, 150.0),
            extra_gravity: 500.0,
            base_speed: 250.0,
            jump_velocity: 562.0,
            start_lives: 3,
            max_lives: 5,
            invulnerable_ms: 1600.0,
            flash_interval_ms: 160.0,
            flash_repeats: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub segment: (f32, f32),
    pub initial_extent: f32,
    pub safe_start: f32,
    pub max_jump_gap: f32,
    pub gap_chance: f64,
    pub chunk: f32,
    /// Stream a new chunk when the player is this close to the last segment
    pub lookahead: f32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            segment: (128.0, 150.0),
            initial_extent: 2000.0,
            safe_start: 400.0,
            max_jump_gap: 250.0,
            gap_chance: 0.3,
            chunk: 1000.0,
            lookahead: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub spawn_interval_ms: f64,
    pub spawn_ahead: f32,
    pub spawn_y: f32,
    pub size: (f32, f32),
    pub wide_size: (f32, f32),
    pub extra_gravity: f32,
    /// Enemy walking speed as a fraction of the player's speed
    pub speed_ratio: f32,
    pub void_wander_chance: f64,
    pub void_wander_speed: f32,
    pub void_hit_distance: f32,
    /// Spawn table; duplicates weight the draw
    pub kinds: Vec<EnemyKind>,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 5000.0,
            spawn_ahead: 800.0,
            spawn_y: 340.0,
            size: (70.0, 100.0),
            wide_size: (150.0, 100.0),
            extra_gravity: 500.0,
            speed_ratio: 0.75,
            void_wander_chance: 0.02,
            void_wander_speed: 200.0,
            void_hit_distance: 50.0,
            kinds: vec![
                EnemyKind::Ugur,
                EnemyKind::Hursit,
                EnemyKind::Muko,
                EnemyKind::Kader,
                EnemyKind::Kader,
                EnemyKind::Kader,
                EnemyKind::Zehra,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub spawn_interval_ms: f64,
    pub ahead_min: f32,
    pub ahead_max: f32,
    pub spawn_y: f32,
    pub size: f32,
    pub bounce: f32,
    pub drift_speed: f32,
    pub extra_gravity: f32,
    pub bob_height: f32,
    pub bob_ms: f64,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 15_000.0,
            ahead_min: 400.0,
            ahead_max: 800.0,
            spawn_y: 200.0,
            size: 40.0,
            bounce: 0.8,
            drift_speed: -50.0,
            extra_gravity: 300.0,
            bob_height: 20.0,
            bob_ms: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub pool_size: usize,
    pub cooldown_ms: f64,
    pub speed: f32,
    pub size: f32,
    pub lifetime_ms: f64,
    /// One full turn takes this long
    pub spin_ms: f64,
    pub muzzle_offset: f32,
    pub affected_by_gravity: bool,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            pool_size: 10,
            cooldown_ms: 250.0,
            speed: 900.0,
            size: 30.0,
            lifetime_ms: 1500.0,
            spin_ms: 500.0,
            muzzle_offset: 20.0,
            affected_by_gravity: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// World pixels per distance point
    pub distance_unit: f32,
    pub kill_bonus: u32,
    /// Every `step` points raises the multiplier by `step_bonus`
    pub step: u32,
    pub step_bonus: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            distance_unit: 100.0,
            kill_bonus: 10,
            step: 25,
            step_bonus: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub music_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { music_volume: 0.5 }
    }
}
