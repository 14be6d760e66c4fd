//! Level descriptors
//!
//! A [`LevelDescriptor`] mirrors the level JSON one-to-one. It is turned into a
//! [`Level`] by validation, which normalizes asteroid directions and rejects
//! anything that would put an entity into an inconsistent state. Waves are only
//! ever built from a `Level`.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::sim::{AsteroidSize, Vector2};

/// Ship spawn point as written in the level file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSpawn {
    pub position: [f32; 2],
    /// Facing in degrees
    pub angle: f32,
}

/// Asteroid spawn as written in the level file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSpawn {
    pub size: AsteroidSize,
    pub position: [f32; 2],
    /// Travel direction, any nonzero length
    pub direction: [f32; 2],
}

/// Raw level data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub ship: ShipSpawn,
    #[serde(default)]
    pub asteroids: Vec<AsteroidSpawn>,
}

impl LevelDescriptor {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A validated asteroid spawn with a unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSeed {
    pub size: AsteroidSize,
    pub position: Vector2,
    pub direction: Vector2,
}

/// A validated level, retained by the wave so the ship can be respawned
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    ship_position: Vector2,
    ship_angle: f32,
    asteroids: Vec<AsteroidSeed>,
}

impl Level {
    /// Parse and validate level JSON in one step
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        LevelDescriptor::from_json(json)?.try_into()
    }

    pub fn ship_position(&self) -> Vector2 {
        self.ship_position
    }

    pub fn ship_angle(&self) -> f32 {
        self.ship_angle
    }

    pub fn asteroids(&self) -> &[AsteroidSeed] {
        &self.asteroids
    }
}

fn finite_vec(raw: [f32; 2], field: impl FnOnce() -> String) -> Result<Vector2, LevelError> {
    let v = Vector2::from_array(raw);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LevelError::NonFiniteValue { field: field() })
    }
}

impl TryFrom<LevelDescriptor> for Level {
    type Error = LevelError;

    fn try_from(desc: LevelDescriptor) -> Result<Self, Self::Error> {
        let ship_position = finite_vec(desc.ship.position, || "ship.position".to_string())?;
        if !desc.ship.angle.is_finite() {
            return Err(LevelError::NonFiniteValue {
                field: "ship.angle".to_string(),
            });
        }

        let asteroids = desc
            .asteroids
            .iter()
            .enumerate()
            .map(|(index, spawn)| -> Result<AsteroidSeed, LevelError> {
                let position =
                    finite_vec(spawn.position, || format!("asteroids[{index}].position"))?;
                let raw_dir =
                    finite_vec(spawn.direction, || format!("asteroids[{index}].direction"))?;
                let direction = raw_dir
                    .try_normalize()
                    .ok_or(LevelError::ZeroDirection { index })?;
                Ok(AsteroidSeed {
                    size: spawn.size,
                    position,
                    direction,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            ship_position,
            ship_angle: desc.ship.angle,
            asteroids,
        })
    }
}
