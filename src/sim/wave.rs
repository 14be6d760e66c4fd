//! A single wave (level) of play
//!
//! The wave owns the ship, the asteroids and the bullets currently alive, plus
//! the lives counter and fire cooldown. Per-frame stepping lives in `tick.rs`.

use super::state::{Asteroid, Bullet, Ship};
use crate::config::GameConfig;
use crate::level::Level;
use crate::render::{Renderer, Sprite, Visual};

/// Live state of one level
#[derive(Debug, Clone)]
pub struct Wave {
    pub(super) config: GameConfig,
    /// Retained verbatim so the ship can respawn where the level put it
    pub(super) level: Level,
    /// None after the ship was destroyed, until it respawns
    pub(super) ship: Option<Ship>,
    pub(super) asteroids: Vec<Asteroid>,
    pub(super) bullets: Vec<Bullet>,
    pub(super) lives: u32,
    /// Frames since the last shot
    pub(super) fire_cooldown: u32,
}

impl Wave {
    /// Build a wave from a validated level
    pub fn new(config: GameConfig, level: Level) -> Self {
        let asteroids: Vec<Asteroid> = level
            .asteroids()
            .iter()
            .map(|seed| Asteroid::new(seed.size, seed.position, seed.direction, &config.asteroids))
            .collect();

        log::info!(
            "Wave loaded: {} asteroids, {} lives",
            asteroids.len(),
            config.starting_lives
        );

        let mut wave = Self {
            lives: config.starting_lives,
            config,
            level,
            ship: None,
            asteroids,
            bullets: Vec::new(),
            fire_cooldown: 0,
        };
        wave.respawn_ship();
        wave
    }

    /// Recreate the ship at the level's spawn point and facing
    ///
    /// Asteroids and bullets are left exactly as they are.
    pub fn respawn_ship(&mut self) {
        self.ship = Some(Ship::new(
            self.level.ship_position(),
            self.level.ship_angle(),
            self.config.ship_radius,
        ));
    }

    /// All asteroids destroyed
    pub fn is_won(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// No lives left
    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Everything a renderer needs: ship first, then asteroids, then bullets
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        let ship = self.ship.iter().map(|ship| Sprite {
            visual: Visual::Ship,
            pos: ship.pos,
            radius: ship.radius,
            angle: ship.angle(),
        });
        let asteroids = self.asteroids.iter().map(|a| Sprite {
            visual: Visual::Asteroid(a.size()),
            pos: a.pos,
            radius: a.radius,
            angle: 0.0,
        });
        let bullets = self.bullets.iter().map(|b| Sprite {
            visual: Visual::Bullet,
            pos: b.pos,
            radius: b.radius,
            angle: 0.0,
        });
        ship.chain(asteroids).chain(bullets)
    }

    /// Read-only draw pass
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for sprite in self.sprites() {
            renderer.draw_sprite(&sprite);
        }
    }
}
