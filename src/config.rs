//! Gameplay configuration
//!
//! Every tunable the simulation reads lives in [`GameConfig`]. The struct is
//! built once (defaults from [`crate::consts`], optionally overridden from JSON)
//! and handed to the wave and controller by value; nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::AsteroidSize;

/// Radius and travel speed of one asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidClass {
    pub radius: f32,
    pub speed: f32,
}

/// Radius/speed table for all three size classes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTable {
    pub large: AsteroidClass,
    pub medium: AsteroidClass,
    pub small: AsteroidClass,
}

impl Default for AsteroidTable {
    fn default() -> Self {
        Self {
            large: AsteroidClass {
                radius: LARGE_RADIUS,
                speed: LARGE_SPEED,
            },
            medium: AsteroidClass {
                radius: MEDIUM_RADIUS,
                speed: MEDIUM_SPEED,
            },
            small: AsteroidClass {
                radius: SMALL_RADIUS,
                speed: SMALL_SPEED,
            },
        }
    }
}

impl AsteroidTable {
    pub fn class(&self, size: AsteroidSize) -> AsteroidClass {
        match size {
            AsteroidSize::Large => self.large,
            AsteroidSize::Medium => self.medium,
            AsteroidSize::Small => self.small,
        }
    }
}

/// Immutable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Wrap margin beyond each playfield edge
    pub dead_zone: f32,

    // === Ship ===
    pub ship_radius: f32,
    /// Degrees per frame while a turn key is held
    pub ship_turn_rate: f32,
    pub ship_impulse: f32,
    pub ship_max_speed: f32,
    pub starting_lives: u32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Minimum frames between shots
    pub fire_cooldown_frames: u32,
    /// Remove bullets this far outside the wrap zone (None = bullets live forever)
    pub bullet_despawn_margin: Option<f32>,

    // === Asteroids ===
    pub asteroids: AsteroidTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            dead_zone: DEAD_ZONE,

            ship_radius: SHIP_RADIUS,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_impulse: SHIP_IMPULSE,
            ship_max_speed: SHIP_MAX_SPEED,
            starting_lives: SHIP_LIVES,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            fire_cooldown_frames: BULLET_RATE,
            bullet_despawn_margin: None,

            asteroids: AsteroidTable::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (partial) JSON override on top of the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ship_radius", self.ship_radius),
            ("ship_max_speed", self.ship_max_speed),
            ("bullet_radius", self.bullet_radius),
            ("bullet_speed", self.bullet_speed),
            ("asteroids.large.radius", self.asteroids.large.radius),
            ("asteroids.medium.radius", self.asteroids.medium.radius),
            ("asteroids.small.radius", self.asteroids.small.radius),
            ("asteroids.large.speed", self.asteroids.large.speed),
            ("asteroids.medium.speed", self.asteroids.medium.speed),
            ("asteroids.small.speed", self.asteroids.small.speed),
            ("fire_cooldown_frames", self.fire_cooldown_frames as f32),
        ];
        for (name, value) in positive {
            // `!(value > 0.0)` also catches NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(self.dead_zone >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "dead_zone",
                value: self.dead_zone,
            });
        }
        Ok(())
    }

    /// Horizontal distance an entity jumps when it wraps
    pub fn wrap_span_x(&self) -> f32 {
        self.width + 2.0 * self.dead_zone
    }

    /// Vertical distance an entity jumps when it wraps
    pub fn wrap_span_y(&self) -> f32 {
        self.height + 2.0 * self.dead_zone
    }
}
