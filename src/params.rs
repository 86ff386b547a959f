//! Hue, chroma and tone parameters.
//!
//! [`ColorParameters`] is the plain value triple. [`ParameterState`] wraps one
//! reactive signal per channel so views and effects can subscribe to changes.

use std::fmt;
use std::ops::RangeInclusive;

use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

/// One of the three HCT parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Chroma,
    Tone,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Chroma, Channel::Tone];

    /// Display label used by the readouts.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "Hue",
            Channel::Chroma => "Chroma",
            Channel::Tone => "Tone",
        }
    }

    pub fn min(self) -> f64 {
        0.0
    }

    pub fn max(self) -> f64 {
        match self {
            Channel::Hue => 360.0,
            Channel::Chroma => 16.0,
            Channel::Tone => 100.0,
        }
    }

    pub fn range(self) -> RangeInclusive<f64> {
        self.min()..=self.max()
    }

    /// Initial slider position.
    pub fn default_value(self) -> f64 {
        match self {
            Channel::Hue => 180.0,
            Channel::Chroma => 8.0,
            Channel::Tone => 50.0,
        }
    }

    /// Clamp `value` into this channel's range.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn clamp(self, value: f64) -> Option<f64> {
        value
            .is_finite()
            .then(|| value.clamp(self.min(), self.max()))
    }

    /// Readout text, e.g. `Hue: 180.0`.
    pub fn readout(self, value: f64) -> String {
        format!("{}: {:.1}", self.label(), value)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hue/chroma/tone triple, each field kept inside its channel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorParameters {
    hue: f64,
    chroma: f64,
    tone: f64,
}

impl Default for ColorParameters {
    fn default() -> Self {
        Self {
            hue: Channel::Hue.default_value(),
            chroma: Channel::Chroma.default_value(),
            tone: Channel::Tone.default_value(),
        }
    }
}

impl ColorParameters {
    /// Build a triple, clamping each value. Non-finite values fall back to the
    /// channel default.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        let mut params = Self::default();
        params.set_hue(hue);
        params.set_chroma(chroma);
        params.set_tone(tone);
        params
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    pub fn tone(&self) -> f64 {
        self.tone
    }

    pub fn set_hue(&mut self, value: f64) {
        self.set(Channel::Hue, value);
    }

    pub fn set_chroma(&mut self, value: f64) {
        self.set(Channel::Chroma, value);
    }

    pub fn set_tone(&mut self, value: f64) {
        self.set(Channel::Tone, value);
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Chroma => self.chroma,
            Channel::Tone => self.tone,
        }
    }

    /// Set one channel. Out-of-range values are clamped; NaN and infinities
    /// leave the field unchanged.
    pub fn set(&mut self, channel: Channel, value: f64) {
        let Some(value) = channel.clamp(value) else {
            log::warn!("ignoring non-finite {channel} value {value}");
            return;
        };
        let field = match channel {
            Channel::Hue => &mut self.hue,
            Channel::Chroma => &mut self.chroma,
            Channel::Tone => &mut self.tone,
        };
        *field = value;
    }

    /// Copy of `self` with one channel replaced.
    pub fn with(mut self, channel: Channel, value: f64) -> Self {
        self.set(channel, value);
        self
    }
}

/// Reactive parameter state: one signal per channel.
///
/// `Copy` like the signals it holds, so it can be moved into any number of
/// view closures.
#[derive(Clone, Copy)]
pub struct ParameterState {
    hue: RwSignal<f64>,
    chroma: RwSignal<f64>,
    tone: RwSignal<f64>,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self::new(ColorParameters::default())
    }
}

impl ParameterState {
    pub fn new(initial: ColorParameters) -> Self {
        Self {
            hue: RwSignal::new(initial.hue()),
            chroma: RwSignal::new(initial.chroma()),
            tone: RwSignal::new(initial.tone()),
        }
    }

    /// The underlying signal for `channel`.
    ///
    /// Writing to it directly bypasses clamping; prefer [`ParameterState::set`].
    pub fn signal(&self, channel: Channel) -> RwSignal<f64> {
        match channel {
            Channel::Hue => self.hue,
            Channel::Chroma => self.chroma,
            Channel::Tone => self.tone,
        }
    }

    /// Tracked read.
    pub fn get(&self, channel: Channel) -> f64 {
        self.signal(channel).get()
    }

    /// Clamp and store `value`. Subscribers are only notified when the stored
    /// value actually changes.
    pub fn set(&self, channel: Channel, value: f64) {
        let Some(value) = channel.clamp(value) else {
            log::warn!("ignoring non-finite {channel} value {value}");
            return;
        };
        let signal = self.signal(channel);
        if signal.get_untracked() != value {
            log::debug!("{channel} -> {value:.3}");
            signal.set(value);
        }
    }

    /// Tracked read of all three channels.
    pub fn snapshot(&self) -> ColorParameters {
        ColorParameters {
            hue: self.hue.get(),
            chroma: self.chroma.get(),
            tone: self.tone.get(),
        }
    }

    /// Untracked read of all three channels.
    pub fn snapshot_untracked(&self) -> ColorParameters {
        ColorParameters {
            hue: self.hue.get_untracked(),
            chroma: self.chroma.get_untracked(),
            tone: self.tone.get_untracked(),
        }
    }
}
