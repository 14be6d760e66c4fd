//! Entity types for a wave
//!
//! Ships, bullets and asteroids are plain data plus their own movement rules.
//! Collisions, wrapping and splitting are handled by the wave, not here.

use serde::{Deserialize, Serialize};

use super::vector::{Vector2, facing_from_degrees, normalize_degrees};
use crate::config::{AsteroidTable, GameConfig};

/// Asteroid size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    /// Size class of the fragments this asteroid breaks into (None = no split)
    pub fn fragment(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AsteroidSize::Large => "large",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Small => "small",
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vector2,
    pub vel: Vector2,
    /// Facing angle in degrees, kept in [0, 360)
    angle: f32,
    /// Unit vector matching `angle`
    facing: Vector2,
    pub radius: f32,
}

impl Ship {
    /// Ship at rest at `pos`, facing `angle` degrees
    pub fn new(pos: Vector2, angle: f32, radius: f32) -> Self {
        let angle = normalize_degrees(angle);
        Self {
            pos,
            vel: Vector2::ZERO,
            angle,
            facing: facing_from_degrees(angle),
            radius,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn facing(&self) -> Vector2 {
        self.facing
    }

    /// Turn counter-clockwise by `rate` degrees
    pub fn turn_left(&mut self, rate: f32) {
        self.set_angle(self.angle + rate);
    }

    /// Turn clockwise by `rate` degrees
    pub fn turn_right(&mut self, rate: f32) {
        self.set_angle(self.angle - rate);
    }

    fn set_angle(&mut self, degrees: f32) {
        self.angle = normalize_degrees(degrees);
        self.facing = facing_from_degrees(self.angle);
    }

    /// Accelerate along the facing direction, clamping to `max_speed`
    pub fn apply_thrust(&mut self, impulse: f32, max_speed: f32) {
        self.vel += self.facing * impulse;
        if self.vel.length() >= max_speed {
            self.vel = self.vel.normalize() * max_speed;
        }
    }

    /// Convenience wrapper reading impulse and max speed from the config
    pub fn thrust(&mut self, config: &GameConfig) {
        self.apply_thrust(config.ship_impulse, config.ship_max_speed);
    }

    /// One frame of motion
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Direction asteroids split along when this ship hits them:
    /// the direction of travel, or the facing when at rest
    pub fn split_direction(&self) -> Vector2 {
        if self.vel == Vector2::ZERO {
            self.facing
        } else {
            self.vel.normalize()
        }
    }
}

/// A bullet fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vector2,
    vel: Vector2,
    pub radius: f32,
    /// Set by the collision pass, cleared out at end of frame
    pub destroyed: bool,
}

impl Bullet {
    pub fn new(pos: Vector2, vel: Vector2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            destroyed: false,
        }
    }

    pub fn vel(&self) -> Vector2 {
        self.vel
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// An asteroid drifting in a straight line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vector2,
    vel: Vector2,
    size: AsteroidSize,
    pub radius: f32,
    /// Set by the collision pass, cleared out at end of frame
    pub destroyed: bool,
}

impl Asteroid {
    /// Asteroid of class `size` moving along the unit vector `direction`
    pub fn new(size: AsteroidSize, pos: Vector2, direction: Vector2, table: &AsteroidTable) -> Self {
        let class = table.class(size);
        Self {
            pos,
            vel: direction * class.speed,
            size,
            radius: class.radius,
            destroyed: false,
        }
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    pub fn vel(&self) -> Vector2 {
        self.vel
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ship_turning_keeps_facing_consistent() {
        let mut ship = Ship::new(Vector2::ZERO, 0.0, 30.0);
        ship.turn_left(90.0);
        assert_eq!(ship.angle(), 90.0);
        assert!(ship.facing().abs_diff_eq(Vector2::Y, 1e-6));

        ship.turn_right(180.0);
        assert_eq!(ship.angle(), 270.0);
        assert!(ship.facing().abs_diff_eq(-Vector2::Y, 1e-6));
    }

    #[test]
    fn test_thrust_converges_to_max_speed() {
        let mut ship = Ship::new(Vector2::ZERO, 30.0, 30.0);
        for _ in 0..200 {
            ship.apply_thrust(0.25, 10.0);
        }
        assert!((ship.vel.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_advance_is_one_velocity_step() {
        let mut ship = Ship::new(Vector2::new(10.0, 10.0), 0.0, 30.0);
        ship.apply_thrust(2.0, 10.0);
        ship.advance();
        assert!(ship.pos.abs_diff_eq(Vector2::new(12.0, 10.0), 1e-6));

        let mut bullet = Bullet::new(Vector2::ZERO, Vector2::new(1.0, -2.0), 5.0);
        bullet.advance();
        bullet.advance();
        assert_eq!(bullet.pos, Vector2::new(2.0, -4.0));
    }

    #[test]
    fn test_split_direction_prefers_velocity() {
        let mut ship = Ship::new(Vector2::ZERO, 90.0, 30.0);
        assert!(ship.split_direction().abs_diff_eq(Vector2::Y, 1e-6));

        ship.vel = Vector2::new(3.0, 0.0);
        assert_eq!(ship.split_direction(), Vector2::X);
    }

    #[test]
    fn test_asteroid_speed_from_size_class() {
        let table = AsteroidTable::default();
        let asteroid = Asteroid::new(AsteroidSize::Medium, Vector2::ZERO, Vector2::Y, &table);
        assert_eq!(asteroid.vel().length(), table.medium.speed);
        assert_eq!(asteroid.radius, table.medium.radius);
    }

    #[test]
    fn test_fragment_sizes() {
        assert_eq!(AsteroidSize::Large.fragment(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.fragment(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.fragment(), None);
    }

    proptest! {
        #[test]
        fn thrust_never_exceeds_max_speed(
            angle in 0.0f32..360.0,
            turns in proptest::collection::vec(-1i8..=1, 1..120),
        ) {
            let mut ship = Ship::new(Vector2::ZERO, angle, 30.0);
            for turn in turns {
                match turn {
                    -1 => ship.turn_right(5.0),
                    1 => ship.turn_left(5.0),
                    _ => {}
                }
                ship.apply_thrust(0.25, 10.0);
                prop_assert!(ship.vel.length() <= 10.0 + 1e-4);
                prop_assert!((ship.facing().length() - 1.0).abs() < 1e-5);
            }
        }
    }
}
