//! 2D vector helpers
//!
//! The vector type itself is `glam::Vec2` (add, scale, length, normalize and
//! exact `==` come with it). This module adds the angle conversions and the
//! three-way split used when an asteroid breaks apart.

use std::f32::consts::TAU;

pub use glam::Vec2 as Vector2;

/// One third of a turn (120 degrees)
pub const THIRD_TURN: f32 = TAU / 3.0;

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Unit vector pointing along `degrees` (counter-clockwise from +x)
#[inline]
pub fn facing_from_degrees(degrees: f32) -> Vector2 {
    let radians = degrees.to_radians();
    Vector2::new(radians.cos(), radians.sin())
}

/// Rotate `v` counter-clockwise by `radians`
#[inline]
pub fn rotate(v: Vector2, radians: f32) -> Vector2 {
    Vector2::from_angle(radians).rotate(v)
}

/// Three unit directions 120 degrees apart, starting with `base`
///
/// `base` must already be unit length. The second direction is `base` turned
/// by 240 degrees and the third by 120 degrees.
pub fn split_directions(base: Vector2) -> [Vector2; 3] {
    [
        base,
        rotate(base, 2.0 * THIRD_TURN).normalize(),
        rotate(base, THIRD_TURN).normalize(),
    ]
}
