//! Simulation configuration.
//!
//! Every field has a default taken from `sharpshooter_core::constants`, so a
//! host can deserialize a partial JSON document and get a complete config.

use serde::{Deserialize, Serialize};

use sharpshooter_core::constants::*;
use sharpshooter_core::types::Vector2;

/// Why a configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("tick rate must be non-zero")]
    ZeroTickRate,

    #[error("field of view {0} is outside (0, 180) degrees")]
    FovOutOfRange(f64),

    #[error("scoped field of view ({scoped}) must be narrower than the default ({default})")]
    ScopedFovNotNarrower { scoped: f64, default: f64 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Lateral patrol parameters for the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    /// Distance per tick.
    pub speed: f64,
    /// Maximum displacement from the spawn point before reversing.
    pub bound: f64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            speed: TARGET_PATROL_SPEED,
            bound: TARGET_PATROL_BOUND,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Ticks per second; countdowns advance by `1 / tick_rate` each tick.
    pub tick_rate: u32,
    /// Projectile travel per tick.
    pub projectile_speed: f64,
    /// Half-extent of the play volume on x and z.
    pub play_bounds: f64,
    pub target_hit_radius: f64,
    /// `None` keeps the target stationary.
    pub target_patrol: Option<PatrolConfig>,
    pub default_fov_deg: f64,
    pub scoped_fov_deg: f64,
    /// Overlay offset applied on each scoped shot (pixels).
    pub overlay_recoil_kick: Vector2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            projectile_speed: PROJECTILE_SPEED,
            play_bounds: PLAY_BOUNDS,
            target_hit_radius: TARGET_HIT_RADIUS,
            target_patrol: None,
            default_fov_deg: DEFAULT_FOV_DEG,
            scoped_fov_deg: SCOPED_FOV_DEG,
            overlay_recoil_kick: OVERLAY_RECOIL_KICK,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        positive("projectile_speed", self.projectile_speed)?;
        positive("play_bounds", self.play_bounds)?;
        positive("target_hit_radius", self.target_hit_radius)?;
        if let Some(patrol) = &self.target_patrol {
            positive("target_patrol.speed", patrol.speed)?;
            positive("target_patrol.bound", patrol.bound)?;
        }
        for fov in [self.default_fov_deg, self.scoped_fov_deg] {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(ConfigError::FovOutOfRange(fov));
            }
        }
        if self.scoped_fov_deg >= self.default_fov_deg {
            return Err(ConfigError::ScopedFovNotNarrower {
                scoped: self.scoped_fov_deg,
                default: self.default_fov_deg,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // Written so NaN is rejected too.
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
