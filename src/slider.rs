//! Horizontal channel slider.
//!
//! The track is painted with the HCT sweep of its channel while the other two
//! channels stay at their current values, so the slider previews where it
//! leads. The sweep is rasterized to an RGBA8 image and cached until the
//! size or the fixed channels change.

use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::params::{Channel, ColorParameters, ParameterState};
use crate::resolver::{ColorModel, ColorResolver, ResolvedColor};

/// Sample `samples` colors evenly across `channel`'s range, holding the
/// other channels of `base` fixed.
pub(crate) fn sample_sweep<M: ColorModel>(
    resolver: &ColorResolver<M>,
    channel: Channel,
    base: ColorParameters,
    samples: u32,
) -> Vec<ResolvedColor> {
    let last = samples.saturating_sub(1).max(1) as f64;
    (0..samples)
        .map(|i| {
            let value = math::value_at(channel, i as f64 / last);
            resolver.resolve(&base.with(channel, value))
        })
        .collect()
}

/// Rasterize sampled colors left to right into a `width` × `height` buffer.
fn rasterize_sweep(width: u32, height: u32, sweep: &[ResolvedColor]) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    if sweep.is_empty() {
        return buf;
    }
    let last = (sweep.len() - 1) as f64;
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b) = sweep[(t * last).round() as usize].to_rgb8();
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

enum SliderUpdate {
    Value(f64),
    Params(ColorParameters),
}

pub struct ChannelSlider {
    id: ViewId,
    held: bool,
    channel: Channel,
    value: f64,
    params: ColorParameters,
    resolver: ColorResolver<Rc<dyn ColorModel>>,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    /// Cached sweep image.
    track_img: Option<peniko::Image>,
    track_hash: Vec<u8>,
    cached_base: Option<ColorParameters>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal slider for `channel`, reading and writing `state`.
pub fn channel_slider(
    state: ParameterState,
    channel: Channel,
    model: Rc<dyn ColorModel>,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = state.get(channel);
        id.update_state(SliderUpdate::Value(v));
    });

    create_effect(move |_| {
        let params = state.snapshot();
        id.update_state(SliderUpdate::Params(params));
    });

    let params = state.snapshot_untracked();

    ChannelSlider {
        id,
        held: false,
        channel,
        value: params.get(channel),
        params,
        resolver: ColorResolver::new(model),
        size: Default::default(),
        on_change: Some(Box::new(move |val| {
            state.set(channel, val);
        })),
        track_img: None,
        track_hash: Vec::new(),
        cached_base: None,
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .min_width(40.0)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        if let Some(fraction) = math::pointer_fraction(x, w, constants::THUMB_RADIUS) {
            self.value = math::value_at(self.channel, fraction);
        }
    }

    fn emit(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.value);
        }
    }

    /// Parameters with this slider's channel zeroed; the track only depends on
    /// the other two.
    fn track_base(&self) -> ColorParameters {
        self.params.with(self.channel, self.channel.min())
    }

    fn ensure_track_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let base = self.track_base();
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_base == Some(base) {
            return;
        }

        let sweep = sample_sweep(&self.resolver, self.channel, base, constants::TRACK_SAMPLES);
        let pixels = rasterize_sweep(pw, ph, &sweep);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.track_hash = blob.id().to_le_bytes().to_vec();
        self.track_img = Some(img);
        self.cached_base = Some(base);
        self.cached_dims = dims;
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(val) => self.value = val,
                SliderUpdate::Params(params) => self.params = params,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.emit();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.emit();
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_track_image(scale);
        if let Some(ref img) = self.track_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.track_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        // Thumb: filled with the current color, ringed white on dark
        let radius = constants::THUMB_RADIUS;
        let fraction = math::fraction_of(self.channel, self.value);
        let center = (math::thumb_x(fraction, w, radius), h / 2.0);
        let current: Color = self.resolver.resolve(&self.params).into();
        cx.fill(&Circle::new(center, radius - 1.5), current, 0.0);
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &Stroke::new(2.0),
        );
    }
}
