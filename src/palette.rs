//! Top-level palette view: one readout/slider row per channel, the preview
//! panel, and the bottom title bar.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::text::Weight;

use crate::constants;
use crate::inputs::{channel_readout, number_input};
use crate::params::{Channel, ParameterState};
use crate::preview::{color_preview, hex_readout};
use crate::resolver::{ColorModel, ColorResolver, ResolvedColor};
use crate::slider::channel_slider;

/// Label above, slider and numeric field below.
fn channel_row(
    state: ParameterState,
    channel: Channel,
    model: Rc<dyn ColorModel>,
) -> impl IntoView {
    v_stack((
        channel_readout(state, channel),
        h_stack((
            channel_slider(state, channel, model).style(|s| s.flex_grow(1.0)),
            number_input(state, channel),
        ))
        .style(|s| s.width_full().items_center().gap(constants::ROW_GAP * 2.0)),
    ))
    .style(|s| s.width_full().items_center().gap(constants::ROW_GAP))
}

fn bottom_bar() -> impl IntoView {
    container(label(|| "HCT Color Palette").style(|s| {
        s.font_size(constants::TITLE_FONT)
            .font_weight(Weight::BOLD)
    }))
    .style(|s| {
        s.width_full()
            .height(constants::BAR_HEIGHT)
            .items_center()
            .justify_center()
            .background(constants::BAR_BACKGROUND)
    })
}

/// Signal holding the color `state` resolves to, kept current by an effect
/// that re-resolves on every parameter change.
pub(crate) fn resolved_color<M: ColorModel + 'static>(
    state: ParameterState,
    resolver: ColorResolver<M>,
) -> RwSignal<ResolvedColor> {
    let resolved = RwSignal::new(resolver.resolve(&state.snapshot_untracked()));

    create_effect(move |_| {
        let params = state.snapshot();
        let color = resolver.resolve(&params);
        log::debug!(
            "hct({:.1}, {:.1}, {:.1}) -> #{}",
            params.hue(),
            params.chroma(),
            params.tone(),
            color.to_hex()
        );
        if resolved.get_untracked() != color {
            resolved.set(color);
        }
    });

    resolved
}

/// Builds the palette view over `state`, resolving colors through `model`.
pub(crate) fn palette_view(state: ParameterState, model: Rc<dyn ColorModel>) -> impl IntoView {
    let resolved = resolved_color(state, ColorResolver::new(model.clone()));

    let controls = v_stack((
        channel_row(state, Channel::Hue, model.clone()),
        channel_row(state, Channel::Chroma, model.clone()),
        channel_row(state, Channel::Tone, model),
        color_preview(resolved),
        hex_readout(resolved),
    ))
    .style(|s| {
        s.width_full()
            .flex_grow(1.0)
            .items_center()
            .gap(constants::GAP)
            .padding(constants::PADDING)
    });

    v_stack((controls, bottom_bar())).style(|s| {
        s.size_full()
            .background(constants::BACKGROUND)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::params::ColorParameters;

    /// Records every triple it is asked for and packs the tone into blue.
    #[derive(Default)]
    struct RecordingModel {
        calls: RefCell<Vec<(f64, f64, f64)>>,
    }

    impl ColorModel for RecordingModel {
        fn argb(&self, hue: f64, chroma: f64, tone: f64) -> u32 {
            self.calls.borrow_mut().push((hue, chroma, tone));
            0xFF00_0000 | (tone.round() as u32 & 0xFF)
        }
    }

    #[test]
    fn parameter_change_re_resolves_color() {
        let model = Rc::new(RecordingModel::default());
        let state = ParameterState::default();
        let resolved = resolved_color(state, ColorResolver::new(model.clone()));
        assert_eq!(resolved.get_untracked().to_rgb8(), (0, 0, 50));

        model.calls.borrow_mut().clear();
        state.set(Channel::Tone, 75.0);

        assert_eq!(*model.calls.borrow(), vec![(180.0, 8.0, 75.0)]);
        assert_eq!(resolved.get_untracked().to_rgb8(), (0, 0, 75));
    }

    #[test]
    fn every_channel_feeds_the_resolver() {
        let model = Rc::new(RecordingModel::default());
        let state = ParameterState::new(ColorParameters::new(10.0, 2.0, 30.0));
        let _resolved = resolved_color(state, ColorResolver::new(model.clone()));

        state.set(Channel::Hue, 200.0);
        state.set(Channel::Chroma, 12.0);
        state.set(Channel::Tone, 60.0);

        let calls = model.calls.borrow();
        assert_eq!(
            calls.last().copied(),
            Some((200.0, 12.0, 60.0)),
            "calls: {calls:?}"
        );
    }

    #[test]
    fn unchanged_parameters_do_not_re_resolve() {
        let model = Rc::new(RecordingModel::default());
        let state = ParameterState::default();
        let _resolved = resolved_color(state, ColorResolver::new(model.clone()));
        let before = model.calls.borrow().len();

        state.set(Channel::Hue, 180.0);

        assert_eq!(model.calls.borrow().len(), before);
    }
}
