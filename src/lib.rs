//! # floem-hct
//!
//! An HCT color palette explorer for [Floem](https://github.com/lapce/floem).
//!
//! Three sliders drive hue (0–360), chroma (0–16) and tone (0–100); a preview
//! panel shows the color those parameters resolve to through the HCT
//! perceptual color space.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_hct::{hct_palette, ColorParameters, ParameterState};
//!
//! let state = ParameterState::new(ColorParameters::new(180.0, 8.0, 50.0));
//! // Use `hct_palette(state)` in your Floem view tree.
//! ```

pub mod config;
mod constants;
pub mod error;
mod inputs;
mod math;
mod palette;
pub mod params;
mod preview;
pub mod resolver;
mod slider;

pub use config::{AppConfig, Cli};
pub use error::ConfigError;
pub use params::{Channel, ColorParameters, ParameterState};
pub use resolver::{ColorModel, ColorResolver, MaterialHct, ResolvedColor};

use std::rc::Rc;
use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the palette view using Material's HCT implementation.
///
/// The view reads from and writes to `state`. External changes to the state
/// are reflected in the sliders, readouts and preview.
pub fn hct_palette(state: ParameterState) -> impl IntoView {
    hct_palette_with(state, Rc::new(MaterialHct))
}

/// Creates the palette view resolving colors through a custom `model`.
pub fn hct_palette_with(state: ParameterState, model: Rc<dyn ColorModel>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    palette::palette_view(state, model)
}
