//! Collision, wrap-around and splitting helpers
//!
//! Everything here is a pure function over positions and config values; the
//! wave decides when to call them and what to flag.

use super::state::{Asteroid, AsteroidSize};
use super::vector::{Vector2, split_directions};
use crate::config::{AsteroidTable, GameConfig};

/// True if two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vector2, a_radius: f32, b: Vector2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Wrap one coordinate through the dead zone around `[0, extent]`
///
/// Anything left of `-dead_zone` reappears on the far side and anything at or
/// beyond `extent + dead_zone` reappears on the near side.
#[inline]
pub fn wrap_axis(value: f32, extent: f32, dead_zone: f32) -> f32 {
    let span = extent + 2.0 * dead_zone;
    if value < -dead_zone {
        value + span
    } else if value >= extent + dead_zone {
        value - span
    } else {
        value
    }
}

/// Apply horizontal then vertical wrap to a position
#[inline]
pub fn wrap_position(pos: Vector2, config: &GameConfig) -> Vector2 {
    Vector2::new(
        wrap_axis(pos.x, config.width, config.dead_zone),
        wrap_axis(pos.y, config.height, config.dead_zone),
    )
}

/// True if `pos` is more than `margin` outside the wrap zone
pub fn outside_wrap_zone(pos: Vector2, config: &GameConfig, margin: f32) -> bool {
    let limit = config.dead_zone + margin;
    pos.x < -limit
        || pos.y < -limit
        || pos.x > config.width + limit
        || pos.y > config.height + limit
}

/// Fragments produced by breaking an asteroid of `size` at `center`
///
/// `base` is the unit direction of whatever hit it. Large asteroids yield three
/// medium ones and medium asteroids three small ones, each placed one fragment
/// radius out along its split direction. Small asteroids yield nothing.
pub fn spawn_fragments(
    size: AsteroidSize,
    center: Vector2,
    base: Vector2,
    table: &AsteroidTable,
) -> Vec<Asteroid> {
    let Some(fragment) = size.fragment() else {
        return Vec::new();
    };
    let radius = table.class(fragment).radius;

    split_directions(base)
        .into_iter()
        .map(|dir| Asteroid::new(fragment, center + dir * radius, dir, table))
        .collect()
}
