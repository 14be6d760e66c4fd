//! Planetoids - a wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped wave simulation (ship, asteroids, bullets, collisions)
//! - `controller`: Game phase state machine driving the wave
//! - `level`: Level descriptor decoding and validation
//! - `config`: Immutable gameplay configuration
//! - `render` / `audio`: Narrow adapter surfaces for drawing and sound

pub mod audio;
pub mod config;
pub mod controller;
pub mod error;
pub mod level;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use controller::{Game, GameEvent, GamePhase};
pub use error::{ConfigError, LevelError};
pub use level::{Level, LevelDescriptor};

/// Default gameplay constants (used by `GameConfig::default()`)
pub mod consts {
    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;
    /// Margin beyond the playfield where wrapped entities stay alive
    pub const DEAD_ZONE: f32 = 64.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 30.0;
    pub const SHIP_TURN_RATE: f32 = 5.0; // degrees per frame
    pub const SHIP_IMPULSE: f32 = 0.25;
    pub const SHIP_MAX_SPEED: f32 = 10.0;
    pub const SHIP_LIVES: u32 = 3;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Minimum frames between two shots
    pub const BULLET_RATE: u32 = 10;

    /// Asteroid radii per size class
    pub const LARGE_RADIUS: f32 = 50.0;
    pub const MEDIUM_RADIUS: f32 = 30.0;
    pub const SMALL_RADIUS: f32 = 20.0;
    /// Asteroid speeds per size class (pixels per frame)
    pub const LARGE_SPEED: f32 = 2.0;
    pub const MEDIUM_SPEED: f32 = 3.0;
    pub const SMALL_SPEED: f32 = 4.0;

    /// Display text
    pub const TITLE_TEXT: &str = "Planetoids";
    pub const START_MESSAGE: &str = "Press 's' to Start";
    pub const CONTINUE_MESSAGE: &str = "Press 's' to Continue";
    pub const RESTART_MESSAGE: &str = "Press 's' to Restart";
    pub const GAME_OVER_TEXT: &str = "Game Over";
    pub const WIN_TEXT: &str = "You Win!";
}
