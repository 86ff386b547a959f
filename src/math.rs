//! Slider geometry: mapping between pointer positions and channel values.

use crate::params::Channel;

/// Fraction (0.0–1.0) of the track covered by `value`.
pub(crate) fn fraction_of(channel: Channel, value: f64) -> f64 {
    let span = channel.max() - channel.min();
    ((value - channel.min()) / span).clamp(0.0, 1.0)
}

/// Channel value at `fraction` (0.0–1.0) along the track.
pub(crate) fn value_at(channel: Channel, fraction: f64) -> f64 {
    channel.min() + fraction.clamp(0.0, 1.0) * (channel.max() - channel.min())
}

/// Track fraction under pointer `x`, given the track width and the thumb
/// radius inset at both ends. `None` when the track is too narrow to use.
pub(crate) fn pointer_fraction(x: f64, width: f64, inset: f64) -> Option<f64> {
    let usable = width - 2.0 * inset;
    (usable > 0.0).then(|| ((x - inset) / usable).clamp(0.0, 1.0))
}

/// Thumb center for `fraction` along a track of `width`.
pub(crate) fn thumb_x(fraction: f64, width: f64, inset: f64) -> f64 {
    inset + fraction * (width - 2.0 * inset)
}
