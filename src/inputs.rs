//! Readouts and numeric inputs for the HCT channels.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::text::Weight;

use crate::constants;
use crate::params::{Channel, ParameterState};

/// Text shown in a channel's input field.
fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

/// Parse user text for `channel`. Returns the clamped value, or `None` if the
/// text is not a finite number.
pub(crate) fn parse_input(channel: Channel, raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|num| channel.clamp(num))
}

/// Bold `Hue: 180.0` style label tracking the channel's value.
pub(crate) fn channel_readout(state: ParameterState, channel: Channel) -> impl IntoView {
    label(move || channel.readout(state.get(channel))).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .font_weight(Weight::BOLD)
    })
}

/// An editable numeric field for one channel, in display units.
///
/// Committed on Enter or focus loss; the value is clamped to the channel's
/// range and invalid text resets to the current value.
pub(crate) fn number_input(state: ParameterState, channel: Channel) -> impl IntoView {
    let text = RwSignal::new(format_value(state.signal(channel).get_untracked()));

    // Signal → text (slider drags)
    create_effect(move |_| {
        let expected = format_value(state.get(channel));
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match parse_input(channel, &raw) {
            Some(value) => state.set(channel, value),
            None => log::debug!("rejected {channel} input {raw:?}"),
        }
        let formatted = format_value(state.signal(channel).get_untracked());
        if raw != formatted {
            text.set(formatted);
        }
    };
    let on_commit_clone = on_commit;

    text_input(text)
        .style(|s| {
            s.width(constants::INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(constants::INPUT_BORDER)
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e
                && ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
            {
                on_commit_clone();
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

/// A pill-shaped "Copy" button with a clipboard glyph. On release it copies
/// the result of `get_text`.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    h_stack((
        label(|| lucide_icons::Icon::Copy.unicode().to_string())
            .style(|s| s.font_size(constants::INPUT_FONT).font_family("lucide".to_string())),
        label(|| "Copy").style(|s| s.font_size(constants::INPUT_FONT)),
    ))
    .style(move |s| {
        let background = if pressed.get() {
            constants::BUTTON_PRESSED
        } else {
            constants::BAR_BACKGROUND
        };
        s.items_center()
            .gap(4.0)
            .padding_horiz(10.0)
            .padding_vert(4.0)
            .border_radius(constants::SLIDER_HEIGHT / 2.0)
            .background(background)
            .color(constants::MUTED_TEXT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match result {
        Ok(()) => log::debug!("copied {text:?} to clipboard"),
        Err(e) => log::warn!("clipboard unavailable: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_and_clamps() {
        assert_eq!(parse_input(Channel::Hue, "90"), Some(90.0));
        assert_eq!(parse_input(Channel::Hue, " 12.5 "), Some(12.5));
        assert_eq!(parse_input(Channel::Chroma, "40"), Some(16.0));
        assert_eq!(parse_input(Channel::Tone, "-3"), Some(0.0));
    }

    #[test]
    fn parse_rejects_garbage_and_non_finite() {
        assert_eq!(parse_input(Channel::Hue, "abc"), None);
        assert_eq!(parse_input(Channel::Hue, ""), None);
        assert_eq!(parse_input(Channel::Tone, "NaN"), None);
        assert_eq!(parse_input(Channel::Tone, "inf"), None);
    }

    #[test]
    fn values_format_with_one_decimal() {
        assert_eq!(format_value(180.0), "180.0");
        assert_eq!(format_value(7.26), "7.3");
        assert_eq!(format_value(0.06), "0.1");
    }
}
