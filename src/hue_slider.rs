//! Hue slider (0° left → 360° right).
//!
//! Renders the hue ramp at full saturation and value as a rasterized image,
//! avoiding vger's broken linear gradient coordinate handling.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;

/// Rasterize the horizontal hue ramp: 0° on the left, 360° on the right.
fn rasterize_hue_ramp(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b) = math::hsv_to_rgb(t * 360.0, 1.0, 1.0);
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = r as u8;
            buf[offset + 1] = g as u8;
            buf[offset + 2] = b as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub struct HueSlider {
    id: ViewId,
    held: bool,
    /// Normalized hue, 0.0–1.0.
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    /// Cached ramp image; content is static, only the size can change.
    ramp_img: Option<peniko::Image>,
    ramp_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal hue slider.
///
/// - `hue`: 0.0 (0°, left) to 1.0 (360°, right).
pub fn hue_slider(hue: RwSignal<f64>) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = hue.get();
        id.update_state(h);
    });

    HueSlider {
        id,
        held: false,
        hue: hue.get_untracked(),
        size: Default::default(),
        on_change: Some(Box::new(move |val| {
            hue.set(val);
        })),
        ramp_img: None,
        ramp_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            self.hue = ((x - r) / usable).clamp(0.0, 1.0);
        }
    }

    fn ensure_ramp_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let dims = (pw, ph);
        if self.cached_dims == dims {
            return;
        }

        let pixels = rasterize_hue_ramp(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        let id = blob.id();
        self.ramp_hash = id.to_le_bytes().to_vec();
        self.ramp_img = Some(img);
        self.cached_dims = dims;
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(val) = state.downcast::<f64>() {
            self.hue = *val;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                if let Some(cb) = &self.on_change {
                    cb(self.hue);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    if let Some(cb) = &self.on_change {
                        cb(self.hue);
                    }
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
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

        // Clip to rounded rect for rounded ends
        cx.save();
        cx.clip(&rrect);

        let scale = cx.scale();
        self.ensure_ramp_image(scale);
        if let Some(ref img) = self.ramp_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.ramp_hash,
                },
                rect,
            );
        }

        cx.restore();

        // Slider outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb (circular ring; left = 0°, right = 360°)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + self.hue * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::rasterize_hue_ramp;

    #[test]
    fn ramp_ends_are_red() {
        let buf = rasterize_hue_ramp(32, 1);
        // Hue 0° and hue 360° are both pure red.
        assert_eq!(&buf[0..3], &[255, 0, 0]);
        let last = (31 * 4) as usize;
        assert_eq!(&buf[last..last + 3], &[255, 0, 0]);
    }

    #[test]
    fn ramp_midpoint_is_cyan() {
        let buf = rasterize_hue_ramp(3, 1);
        // Middle pixel is hue 180°.
        assert_eq!(&buf[4..7], &[0, 255, 255]);
    }
}
