//! Color preview tile.
//!
//! Shows the model's current color; translucent colors are drawn over a
//! checkerboard. Suitable as the trigger face of a picker dropdown.

use floem::kurbo::Rect;
use floem::peniko::Color;
use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

#[cfg(feature = "alpha")]
use crate::checkerboard;
use crate::color::ChromaColor;
use crate::constants;

pub struct ColorSwatch {
    id: ViewId,
    color: ChromaColor,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a rounded swatch that tracks `color`.
pub fn color_swatch(color: RwSignal<ChromaColor>) -> ColorSwatch {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(c);
    });

    ColorSwatch {
        id,
        color: color.get_untracked(),
        size: Default::default(),
    }
    .style(|s| s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE))
}

impl View for ColorSwatch {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(c) = state.downcast::<ChromaColor>() {
            self.color = *c;
            self.id.request_layout();
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
        #[cfg(feature = "alpha")]
        if self.color.a() < 1.0 {
            checkerboard::paint_checkerboard(cx, rect);
        }
        let (r, g, b, a) = self.color.rgba();
        cx.fill(
            &rrect,
            Color::rgba(r / 255.0, g / 255.0, b / 255.0, a),
            0.0,
        );
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgb8(180, 180, 180),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
