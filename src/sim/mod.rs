//! Wave simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame, no dt scaling
//! - Stable iteration order (insertion order of the live lists)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod vector;
pub mod wave;

pub use collision::{circles_overlap, spawn_fragments, wrap_axis, wrap_position};
pub use state::{Asteroid, AsteroidSize, Bullet, Ship};
pub use tick::{FrameInput, Key, KeySource};
pub use vector::{Vector2, facing_from_degrees, split_directions};
pub use wave::Wave;
