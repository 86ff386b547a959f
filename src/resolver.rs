//! HCT → display color resolution.
//!
//! The perceptual conversion itself lives behind [`ColorModel`]; this module
//! only unpacks the 32-bit ARGB it returns into normalized channels.

use std::rc::Rc;

use floem::peniko::Color;
use material_colors::color::Argb;
use material_colors::hct::Hct;

use crate::params::ColorParameters;

/// A perceptual color model mapping hue/chroma/tone to packed `0xAARRGGBB`.
pub trait ColorModel {
    fn argb(&self, hue: f64, chroma: f64, tone: f64) -> u32;
}

/// HCT as implemented by Material Color Utilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialHct;

impl ColorModel for MaterialHct {
    fn argb(&self, hue: f64, chroma: f64, tone: f64) -> u32 {
        let argb = Argb::from(Hct::from(hue, chroma, tone));
        u32::from_be_bytes([argb.alpha, argb.red, argb.green, argb.blue])
    }
}

impl<M: ColorModel + ?Sized> ColorModel for Rc<M> {
    fn argb(&self, hue: f64, chroma: f64, tone: f64) -> u32 {
        (**self).argb(hue, chroma, tone)
    }
}

/// Opaque RGB color with channels in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl ResolvedColor {
    /// Unpack `0xAARRGGBB`. The alpha byte is discarded; the result is always
    /// fully opaque.
    pub fn from_argb(argb: u32) -> Self {
        let red = (argb >> 16) & 0xFF;
        let green = (argb >> 8) & 0xFF;
        let blue = argb & 0xFF;
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Format as uppercase `RRGGBB` (no `#` prefix).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Rec. 709 luma of the encoded channels.
    #[cfg(test)]
    pub(crate) fn luma(&self) -> f32 {
        0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue
    }
}

impl From<ResolvedColor> for Color {
    fn from(c: ResolvedColor) -> Self {
        let (r, g, b) = c.to_rgb8();
        Color::rgb8(r, g, b)
    }
}

/// Resolves parameter triples through a [`ColorModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorResolver<M = MaterialHct> {
    model: M,
}

impl<M: ColorModel> ColorResolver<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn resolve(&self, params: &ColorParameters) -> ResolvedColor {
        self.resolve_hct(params.hue(), params.chroma(), params.tone())
    }

    pub fn resolve_hct(&self, hue: f64, chroma: f64, tone: f64) -> ResolvedColor {
        ResolvedColor::from_argb(self.model.argb(hue, chroma, tone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit(v: f32) -> bool {
        (0.0..=1.0).contains(&v)
    }

    #[test]
    fn unpacks_channels_from_bit_layout() {
        let c = ResolvedColor::from_argb(0x12FF_8000);
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 128.0 / 255.0);
        assert_eq!(c.blue, 0.0);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn alpha_byte_is_ignored() {
        let transparent = ResolvedColor::from_argb(0x0033_6699);
        let opaque = ResolvedColor::from_argb(0xFF33_6699);
        assert_eq!(transparent, opaque);
        assert_eq!(transparent.alpha, 1.0);
    }

    /// Blue below hue 180, red above.
    struct SplitModel;

    impl ColorModel for SplitModel {
        fn argb(&self, hue: f64, _chroma: f64, _tone: f64) -> u32 {
            if hue < 180.0 { 0xFF00_00FF } else { 0xFFFF_0000 }
        }
    }

    #[test]
    fn stub_model_is_injected() {
        let resolver = ColorResolver::new(SplitModel);
        assert_eq!(resolver.resolve_hct(10.0, 0.0, 0.0).to_hex(), "0000FF");
        assert_eq!(resolver.resolve_hct(200.0, 0.0, 0.0).to_hex(), "FF0000");
    }

    #[test]
    fn shared_model_delegates() {
        let shared: Rc<dyn ColorModel> = Rc::new(SplitModel);
        let resolver = ColorResolver::new(shared);
        assert_eq!(resolver.resolve_hct(300.0, 4.0, 40.0).to_hex(), "FF0000");
    }

    #[test]
    fn hex_is_uppercase_rrggbb() {
        assert_eq!(ResolvedColor::from_argb(0xFFAB_CDEF).to_hex(), "ABCDEF");
        assert_eq!(ResolvedColor::from_argb(0xFF00_0000).to_hex(), "000000");
    }

    #[test]
    fn scenario_channels_match_packed_value() {
        let model = MaterialHct;
        let v = model.argb(180.0, 8.0, 50.0);
        let c = ColorResolver::new(model).resolve(&ColorParameters::new(180.0, 8.0, 50.0));
        assert_eq!(c.red, ((v >> 16) & 0xFF) as f32 / 255.0);
        assert_eq!(c.green, ((v >> 8) & 0xFF) as f32 / 255.0);
        assert_eq!(c.blue, (v & 0xFF) as f32 / 255.0);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let resolver = ColorResolver::<MaterialHct>::default();
        let p = ColorParameters::new(42.0, 11.0, 63.0);
        assert_eq!(resolver.resolve(&p), resolver.resolve(&p));
    }

    #[test]
    fn hue_boundaries_resolve() {
        let resolver = ColorResolver::<MaterialHct>::default();
        for hue in [0.0, 360.0] {
            let c = resolver.resolve_hct(hue, 16.0, 50.0);
            assert!(in_unit(c.red) && in_unit(c.green) && in_unit(c.blue));
            assert_eq!(c.alpha, 1.0);
        }
    }

    #[test]
    fn zero_chroma_is_neutral_gray() {
        let resolver = ColorResolver::<MaterialHct>::default();
        for tone in [10.0, 35.0, 50.0, 80.0] {
            let c = resolver.resolve_hct(120.0, 0.0, tone);
            assert_eq!(c.red, c.green, "tone {tone}: {c:?}");
            assert_eq!(c.green, c.blue, "tone {tone}: {c:?}");
        }
    }

    #[test]
    fn tone_sweep_goes_dark_to_light() {
        let resolver = ColorResolver::<MaterialHct>::default();
        let lumas: Vec<f32> = (0..=10)
            .map(|i| resolver.resolve_hct(180.0, 8.0, i as f64 * 10.0).luma())
            .collect();
        assert!(lumas[0] < 0.05, "tone 0 should be near black: {}", lumas[0]);
        assert!(lumas[10] > 0.95, "tone 100 should be near white: {}", lumas[10]);
        for pair in lumas.windows(2) {
            assert!(pair[0] < pair[1], "luma not increasing: {lumas:?}");
        }
    }

    #[test]
    fn into_peniko_color_keeps_channels() {
        let c = ResolvedColor::from_argb(0xFF10_2030);
        assert_eq!(Color::from(c), Color::rgb8(0x10, 0x20, 0x30));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn channels_in_unit_range_and_opaque(
                hue in 0.0_f64..=360.0,
                chroma in 0.0_f64..=16.0,
                tone in 0.0_f64..=100.0,
            ) {
                let c = ColorResolver::<MaterialHct>::default().resolve_hct(hue, chroma, tone);
                prop_assert!(in_unit(c.red), "red {}", c.red);
                prop_assert!(in_unit(c.green), "green {}", c.green);
                prop_assert!(in_unit(c.blue), "blue {}", c.blue);
                prop_assert_eq!(c.alpha, 1.0);
            }

            #[test]
            fn any_packed_value_unpacks_opaque(argb in any::<u32>()) {
                let c = ResolvedColor::from_argb(argb);
                prop_assert!(in_unit(c.red) && in_unit(c.green) && in_unit(c.blue));
                prop_assert_eq!(c.alpha, 1.0);
                prop_assert_eq!(c.to_rgb8(), ((argb >> 16) as u8, (argb >> 8) as u8, argb as u8));
            }
        }
    }
}
