//! 2D saturation/value field.
//!
//! Renders the saturation×value plane for the current hue: x maps to
//! saturation (left → right), y maps to value (top → bottom, full value at
//! the top). The plane is rasterized to an RGBA8 pixel buffer at a fixed
//! resolution and scaled to widget size rather than redrawn per frame.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
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

/// Rasterize the saturation/value plane for `hue` (degrees) to an RGBA8
/// buffer. `width`/`height` are raster pixels.
fn rasterize_sv_plane(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];

    for py in 0..height {
        let v = 1.0 - py as f64 / (height - 1).max(1) as f64;
        let row_offset = (py * width * 4) as usize;

        for px in 0..width {
            let s = px as f64 / (width - 1).max(1) as f64;
            let (r, g, b) = math::hsv_to_rgb(hue, s, v);

            let offset = row_offset + (px * 4) as usize;
            buf[offset] = r as u8;
            buf[offset + 1] = g as u8;
            buf[offset + 2] = b as u8;
            buf[offset + 3] = 255;
        }
    }

    buf
}

enum SvUpdate {
    SatVal(f64, f64),
    Hue(f64),
}

pub(crate) struct SvArea {
    id: ViewId,
    held: bool,
    saturation: f64,
    value: f64,
    /// Hue in degrees, used as the raster base color.
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64, f64)>>,
    /// Cached plane image for the current hue.
    plane_img: Option<peniko::Image>,
    plane_hash: Vec<u8>,
    cached_hue_key: Option<u16>,
}

/// Creates the 2D saturation/value area.
///
/// - `hue`: 0.0–1.0, read-only; the plane is re-rasterized when it changes.
/// - `saturation`: 0.0 (left) to 1.0 (right)
/// - `value`: 0.0 (bottom) to 1.0 (top)
pub(crate) fn sv_area(
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    value: RwSignal<f64>,
) -> SvArea {
    let id = ViewId::new();

    create_effect(move |_| {
        let s = saturation.get();
        let v = value.get();
        id.update_state(SvUpdate::SatVal(s, v));
    });

    create_effect(move |_| {
        let h = hue.get();
        id.update_state(SvUpdate::Hue(h * 360.0));
    });

    SvArea {
        id,
        held: false,
        saturation: saturation.get_untracked(),
        value: value.get_untracked(),
        hue: hue.get_untracked() * 360.0,
        size: Default::default(),
        on_change: Some(Box::new(move |s, v| {
            saturation.set(s);
            value.set(v);
        })),
        plane_img: None,
        plane_hash: Vec::new(),
        cached_hue_key: None,
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(100.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SvArea {
    fn update_from_pointer(&mut self, pos: Point) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        self.saturation = (pos.x / w).clamp(0.0, 1.0);
        self.value = (1.0 - pos.y / h).clamp(0.0, 1.0);
    }

    fn cursor_position(&self) -> (f64, f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        (self.saturation * w, (1.0 - self.value) * h)
    }

    /// Rasterize at a fixed resolution for the current hue, then let the
    /// renderer scale the image to widget size.
    fn ensure_plane_image(&mut self) {
        // Quantized so pointer jitter on the hue slider does not thrash the cache.
        let hue_key = (self.hue * 10.0).round() as u16;
        if self.plane_img.is_some() && self.cached_hue_key == Some(hue_key) {
            return;
        }

        let size = constants::SV_RASTER_SIZE;
        let pixels = rasterize_sv_plane(size, size, self.hue);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, size, size);

        self.plane_hash = blob.id().to_le_bytes().to_vec();
        self.plane_img = Some(img);
        self.cached_hue_key = Some(hue_key);
    }
}

impl View for SvArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SvUpdate>() {
            match *update {
                SvUpdate::SatVal(s, v) => {
                    self.saturation = s;
                    self.value = v;
                }
                SvUpdate::Hue(h) => {
                    self.hue = h;
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                if let Some(cb) = &self.on_change {
                    cb(self.saturation, self.value);
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos);
                    if let Some(cb) = &self.on_change {
                        cb(self.saturation, self.value);
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
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_plane_image();
        if let Some(ref img) = self.plane_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.plane_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Area outline
        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Ring cursor at the current saturation/value position
        let (cur_x, cur_y) = self.cursor_position();
        let cur_pt = Point::new(cur_x, cur_y);
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let cursor = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new(cur_pt, constants::CURSOR_RADIUS - 1.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::rasterize_sv_plane;

    #[test]
    fn plane_corners_match_hsv_conversion() {
        let size = 16u32;
        let buf = rasterize_sv_plane(size, size, 0.0);

        // Top-left: s=0, v=1 → white
        assert_eq!(&buf[0..4], &[255, 255, 255, 255]);

        // Top-right: s=1, v=1 → pure hue (red)
        let tr = ((size - 1) * 4) as usize;
        assert_eq!(&buf[tr..tr + 4], &[255, 0, 0, 255]);

        // Bottom row: v=0 → black regardless of saturation
        let bl = ((size - 1) * size * 4) as usize;
        assert_eq!(&buf[bl..bl + 4], &[0, 0, 0, 255]);
    }
}
