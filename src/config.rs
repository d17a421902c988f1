// src/config.rs
//! RON-loadable game tunables, validated once at startup.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::platforms::layout::LayoutConfig;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O while reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("min_scale ({min}) must not exceed max_scale ({max})")]
    ScaleOrder { min: f32, max: f32 },
    #[error("projectile capacity must be at least 1")]
    ZeroCapacity,
}

/// Window / play-area size, read once at startup. No resize handling.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: 1024.0, height: 768.0 }
    }
}

impl ScreenConfig {
    /// Maps top-left-origin screen coordinates (y down) onto Bevy's
    /// centered world space (y up).
    pub fn to_world(&self, p: Vec2, z: f32) -> Vec3 {
        Vec3::new(p.x - self.width / 2.0, self.height / 2.0 - p.y, z)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ProjectileConfig {
    /// Fixed pool size; exhausted pools drop shots.
    pub capacity: usize,
    /// Muzzle speed in pixels per second.
    pub speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self { capacity: 10, speed: 400.0 }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    /// Minimum delay between shots (caller-side throttle).
    pub fire_cooldown_secs: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { move_speed: 160.0, jump_speed: 330.0, gravity: 600.0, fire_cooldown_secs: 0.2 }
    }
}

#[derive(Resource, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub projectile: ProjectileConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl GameConfig {
    pub const DEFAULT_PATH: &'static str = "assets/config/game.ron";

    /// Reads and validates a RON config file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig =
            ron::de::from_str(&text).map_err(|e| ConfigError::Ron(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects tunables the generators cannot work with. A failure
    /// here is a fatal setup error; nothing re-validates at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen.width", self.screen.width)?;
        positive("screen.height", self.screen.height)?;

        positive("layout.max_platforms", self.layout.max_platforms as f32)?;
        positive("layout.min_horizontal_gap", self.layout.min_horizontal_gap)?;
        positive("layout.min_vertical_gap", self.layout.min_vertical_gap)?;
        positive("layout.platform_width", self.layout.platform_width)?;
        positive("layout.platform_height", self.layout.platform_height)?;
        positive("layout.base_height_offset", self.layout.base_height_offset)?;
        positive("layout.min_scale", self.layout.min_scale)?;
        positive("layout.max_scale", self.layout.max_scale)?;
        if self.layout.min_scale > self.layout.max_scale {
            return Err(ConfigError::ScaleOrder {
                min: self.layout.min_scale,
                max: self.layout.max_scale,
            });
        }

        if self.projectile.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        positive("projectile.speed", self.projectile.speed)?;

        positive("player.move_speed", self.player.move_speed)?;
        positive("player.jump_speed", self.player.jump_speed)?;
        positive("player.gravity", self.player.gravity)?;
        positive("player.fire_cooldown_secs", self.player.fire_cooldown_secs)?;

        Ok(())
    }
}
