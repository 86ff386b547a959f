//! Error types for application configuration.

use thiserror::Error;

use crate::params::Channel;

/// Errors produced while validating startup configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// An initial channel value was NaN or infinite.
    #[error("{channel} must be a finite number")]
    NotFinite { channel: Channel },

    /// An initial channel value was outside its range.
    #[error("{channel} {value} is outside {min}..={max}")]
    OutOfRange {
        channel: Channel,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The window would have no area.
    #[error("invalid window size {width}x{height}: both sides must be positive")]
    InvalidWindowSize { width: f64, height: f64 },
}

impl ConfigError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        12
    }
}
