//! Error types for level and configuration loading
//!
//! The simulation itself never fails: destroyed ships and exhausted lives are
//! phase transitions. Errors only arise when untrusted data is turned into a
//! [`crate::Level`] or a [`crate::GameConfig`].

use thiserror::Error;

/// A level descriptor that cannot produce a consistent wave
#[derive(Debug, Error)]
pub enum LevelError {
    /// Asteroid direction has zero length and cannot be normalized
    #[error("asteroid {index} has a zero-length direction vector")]
    ZeroDirection { index: usize },

    /// A coordinate, angle or direction component is NaN or infinite
    #[error("non-finite value in {field}")]
    NonFiniteValue { field: String },

    #[error("failed to parse level descriptor: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A configuration value outside its usable range
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Dimension, radius, speed or rate that must be strictly positive
    #[error("config value '{name}' = {value} must be positive")]
    NonPositive { name: &'static str, value: f32 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
