//! Per-frame wave update
//!
//! Motion is frame-stepped: every entity moves by exactly its velocity once per
//! call, regardless of the elapsed time passed in.
//!
//! Frame order:
//! 1. Ship steering, movement, wrap, firing and collisions (only while alive)
//! 2. Asteroid movement and wrap
//! 3. Bullet movement (no wrap)
//! 4. Removal of everything flagged destroyed
//! 5. Life lost if the ship was destroyed during this frame

use super::collision::{circles_overlap, outside_wrap_zone, spawn_fragments, wrap_position};
use super::state::Bullet;
use super::vector::Vector2;
use super::wave::Wave;

/// Named keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
    Start,
}

/// Anything that can answer "is this key held right now"
pub trait KeySource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Held-key snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub start: bool,
}

impl FrameInput {
    /// Snapshot every key from an input backend
    pub fn sample<S: KeySource + ?Sized>(source: &S) -> Self {
        Self {
            turn_left: source.is_key_down(Key::TurnLeft),
            turn_right: source.is_key_down(Key::TurnRight),
            thrust: source.is_key_down(Key::Thrust),
            fire: source.is_key_down(Key::Fire),
            start: source.is_key_down(Key::Start),
        }
    }

    /// Input with exactly `keys` held
    pub fn with_keys(keys: &[Key]) -> Self {
        let mut input = Self::default();
        for key in keys {
            match key {
                Key::TurnLeft => input.turn_left = true,
                Key::TurnRight => input.turn_right = true,
                Key::Thrust => input.thrust = true,
                Key::Fire => input.fire = true,
                Key::Start => input.start = true,
            }
        }
        input
    }
}

impl KeySource for FrameInput {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::TurnLeft => self.turn_left,
            Key::TurnRight => self.turn_right,
            Key::Thrust => self.thrust,
            Key::Fire => self.fire,
            Key::Start => self.start,
        }
    }
}

impl Wave {
    /// Advance the wave by one frame
    ///
    /// `_dt` is accepted for API symmetry with the frame loop; displacement is
    /// a fixed step per call.
    pub fn update(&mut self, input: &FrameInput, _dt: f32) {
        let mut ship_destroyed = false;
        if self.ship.is_some() {
            self.steer_ship(input);
            self.try_fire(input);
            ship_destroyed = self.collide_ship();
            self.collide_bullets();
        }

        for asteroid in &mut self.asteroids {
            asteroid.advance();
            asteroid.pos = wrap_position(asteroid.pos, &self.config);
        }

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        if let Some(margin) = self.config.bullet_despawn_margin {
            for bullet in &mut self.bullets {
                if outside_wrap_zone(bullet.pos, &self.config, margin) {
                    bullet.destroyed = true;
                }
            }
        }

        self.compact();

        if ship_destroyed {
            self.lives = self.lives.saturating_sub(1);
            log::debug!("Ship lost, {} lives remaining", self.lives);
        }
    }

    fn steer_ship(&mut self, input: &FrameInput) {
        let Some(ship) = self.ship.as_mut() else {
            return;
        };
        if input.turn_left {
            ship.turn_left(self.config.ship_turn_rate);
        }
        if input.turn_right {
            ship.turn_right(self.config.ship_turn_rate);
        }
        if input.thrust {
            ship.thrust(&self.config);
        }
        ship.advance();
        ship.pos = wrap_position(ship.pos, &self.config);
    }

    /// Spawn a bullet from the ship's nose if fire is held and the cooldown elapsed
    fn try_fire(&mut self, input: &FrameInput) {
        let Some(ship) = &self.ship else {
            return;
        };
        self.fire_cooldown = self.fire_cooldown.saturating_add(1);
        if !input.fire || self.fire_cooldown < self.config.fire_cooldown_frames {
            return;
        }

        let facing = ship.facing();
        self.bullets.push(Bullet::new(
            ship.pos + facing * ship.radius,
            facing * self.config.bullet_speed,
            self.config.bullet_radius,
        ));
        self.fire_cooldown = 0;
        log::debug!("Bullet fired ({} live)", self.bullets.len());
    }

    /// Ship against every asteroid alive at the start of the pass
    ///
    /// The ship is destroyed by the first overlapping asteroid; once it is gone
    /// the remaining asteroids are not tested. Returns true if the ship died.
    fn collide_ship(&mut self) -> bool {
        let count = self.asteroids.len();
        for i in 0..count {
            let Some(ship) = &self.ship else {
                break;
            };
            let asteroid = &self.asteroids[i];
            if !circles_overlap(ship.pos, ship.radius, asteroid.pos, asteroid.radius) {
                continue;
            }
            let base = ship.split_direction();
            self.break_asteroid(i, base);
            self.ship = None;
            log::debug!("Ship destroyed by asteroid {i}");
            return true;
        }
        false
    }

    /// Bullets against asteroids; each pair is tested only while both are intact
    ///
    /// Fragments spawned in this pass are not tested until the next frame.
    fn collide_bullets(&mut self) {
        let asteroid_count = self.asteroids.len();
        let bullet_count = self.bullets.len();
        for i in 0..asteroid_count {
            for j in 0..bullet_count {
                if self.asteroids[i].destroyed {
                    break;
                }
                let bullet = &self.bullets[j];
                let asteroid = &self.asteroids[i];
                if bullet.destroyed
                    || !circles_overlap(bullet.pos, bullet.radius, asteroid.pos, asteroid.radius)
                {
                    continue;
                }
                // Validated configs keep bullet speed positive; +x only guards hand-built bullets
                let base = bullet.vel().try_normalize().unwrap_or(Vector2::X);
                self.bullets[j].destroyed = true;
                self.break_asteroid(i, base);
            }
        }
    }

    /// Flag asteroid `index` destroyed and append its fragments
    fn break_asteroid(&mut self, index: usize, base: Vector2) {
        let asteroid = &mut self.asteroids[index];
        asteroid.destroyed = true;
        let fragments = spawn_fragments(asteroid.size(), asteroid.pos, base, &self.config.asteroids);
        log::debug!(
            "{} asteroid destroyed, {} fragments",
            asteroid.size().as_str(),
            fragments.len()
        );
        self.asteroids.extend(fragments);
    }

    /// Drop everything flagged destroyed this frame
    fn compact(&mut self) {
        self.asteroids.retain(|a| !a.destroyed);
        self.bullets.retain(|b| !b.destroyed);
    }
}
