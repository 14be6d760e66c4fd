//! Rendering surface
//!
//! The simulation never draws. It hands out [`Sprite`]s and [`Label`]s, and an
//! adapter implementing [`Renderer`] maps them onto whatever graphics backend
//! the host uses.

use crate::sim::{AsteroidSize, Vector2};

/// What kind of thing a sprite shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    Ship,
    Bullet,
    Asteroid(AsteroidSize),
}

impl Visual {
    /// Image asset for this visual (None = draw a filled circle)
    pub fn image_key(self) -> Option<&'static str> {
        match self {
            Visual::Ship => Some("ship.png"),
            Visual::Bullet => None,
            Visual::Asteroid(AsteroidSize::Large) => Some("asteroid1.png"),
            Visual::Asteroid(AsteroidSize::Medium) => Some("asteroid2.png"),
            Visual::Asteroid(AsteroidSize::Small) => Some("asteroid3.png"),
        }
    }
}

/// One entity to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub visual: Visual,
    /// Center in playfield coordinates
    pub pos: Vector2,
    pub radius: f32,
    /// Rotation in degrees (ship only, 0 otherwise)
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Title,
    Message,
}

/// On-screen text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub kind: LabelKind,
    pub text: &'a str,
}

/// Backend adapter; called during the read-only draw pass
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: &Sprite);
    fn draw_label(&mut self, label: &Label<'_>);
}

/// Renderer that just records what it was asked to draw
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct SpriteRecorder {
    pub sprites: Vec<Sprite>,
    pub labels: Vec<(LabelKind, String)>,
}

#[cfg(test)]
impl SpriteRecorder {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.labels.clear();
    }
}

#[cfg(test)]
impl Renderer for SpriteRecorder {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.sprites.push(*sprite);
    }

    fn draw_label(&mut self, label: &Label<'_>) {
        self.labels.push((label.kind, label.text.to_string()));
    }
}
