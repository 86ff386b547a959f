//! Sizing, color, and styling constants for the palette view.

use floem::peniko::Color;

/// Slider track height
pub const SLIDER_HEIGHT: f32 = 24.0;

/// Thumb radius on sliders
pub const THUMB_RADIUS: f64 = 10.0;

/// Vertical gap between control rows
pub const GAP: f32 = 24.0;

/// Gap between a readout and its slider
pub const ROW_GAP: f32 = 6.0;

/// Padding around the whole view
pub const PADDING: f32 = 16.0;

/// Preview panel height
pub const PREVIEW_HEIGHT: f32 = 200.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 52.0;

/// Input font size
pub const INPUT_FONT: f32 = 12.0;

/// Readout label font size
pub const LABEL_FONT: f32 = 14.0;

/// Bottom bar title font size
pub const TITLE_FONT: f32 = 20.0;

/// Bottom bar height
pub const BAR_HEIGHT: f32 = 64.0;

/// Number of samples used to rasterize a slider track
pub const TRACK_SAMPLES: u32 = 128;

pub const BACKGROUND: Color = Color::rgb8(250, 248, 252);
pub const BAR_BACKGROUND: Color = Color::rgb8(236, 230, 240);
pub const BUTTON_PRESSED: Color = Color::rgb8(216, 206, 224);
pub const MUTED_TEXT: Color = Color::rgb8(120, 120, 120);
pub const INPUT_BORDER: Color = Color::rgb8(200, 200, 200);
