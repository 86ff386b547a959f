//! Command-line configuration.
//!
//! `Cli` is the raw clap surface; [`AppConfig`] is the validated form the
//! application starts from.

use clap::Parser;

use crate::error::ConfigError;
use crate::params::{Channel, ColorParameters};

#[derive(Debug, Parser)]
#[command(name = "hct-palette", about = "Explore HCT colors with three sliders")]
pub struct Cli {
    /// Initial hue (0–360).
    #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
    pub hue: f64,

    /// Initial chroma (0–16).
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    pub chroma: f64,

    /// Initial tone (0–100).
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub tone: f64,

    /// Window width in logical pixels.
    #[arg(short = 'W', long, default_value_t = 360.0)]
    pub width: f64,

    /// Window height in logical pixels.
    #[arg(short = 'H', long, default_value_t = 720.0)]
    pub height: f64,
}

/// Validated startup configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub initial: ColorParameters,
    pub window_size: (f64, f64),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial: ColorParameters::default(),
            window_size: (360.0, 720.0),
        }
    }
}

fn check_channel(channel: Channel, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { channel });
    }
    if !channel.range().contains(&value) {
        return Err(ConfigError::OutOfRange {
            channel,
            value,
            min: channel.min(),
            max: channel.max(),
        });
    }
    Ok(value)
}

impl TryFrom<Cli> for AppConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let hue = check_channel(Channel::Hue, cli.hue)?;
        let chroma = check_channel(Channel::Chroma, cli.chroma)?;
        let tone = check_channel(Channel::Tone, cli.tone)?;

        let sized = |v: f64| v.is_finite() && v > 0.0;
        if !sized(cli.width) || !sized(cli.height) {
            return Err(ConfigError::InvalidWindowSize {
                width: cli.width,
                height: cli.height,
            });
        }

        Ok(Self {
            initial: ColorParameters::new(hue, chroma, tone),
            window_size: (cli.width, cli.height),
        })
    }
}
