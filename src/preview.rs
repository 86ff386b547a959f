//! Preview panel and hex readout for the resolved color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};
use floem::text::Weight;

use crate::constants;
use crate::inputs::copy_button;
use crate::resolver::ResolvedColor;

/// Full-width rectangle filled with `color`, captioned "Preview Color".
pub(crate) fn color_preview(color: RwSignal<ResolvedColor>) -> impl IntoView {
    container(label(|| "Preview Color").style(|s| {
        s.color(Color::WHITE)
            .font_size(constants::LABEL_FONT)
            .font_weight(Weight::BOLD)
    }))
    .style(move |s| {
        s.width_full()
            .height(constants::PREVIEW_HEIGHT)
            .items_center()
            .justify_center()
            .background(Color::from(color.get()))
    })
}

/// Text shown in the hex readout and placed on the clipboard.
pub(crate) fn hex_text(color: ResolvedColor) -> String {
    format!("#{}", color.to_hex())
}

/// `#RRGGBB` label with a copy button.
pub(crate) fn hex_readout(color: RwSignal<ResolvedColor>) -> impl IntoView {
    h_stack((
        label(move || hex_text(color.get())).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(constants::MUTED_TEXT)
        }),
        copy_button(move || hex_text(color.get_untracked())),
    ))
    .style(|s| s.items_center().gap(constants::ROW_GAP * 2.0))
}
