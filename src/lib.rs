//! # floem-chroma
//!
//! Color editing widgets for [Floem](https://github.com/lapce/floem), built
//! around [`ChromaColor`] — a color model that holds RGB, HSV, and HSL
//! simultaneously and keeps them consistent across writes.
//!
//! Provides an inline editor with a 2D saturation/value area, hue and alpha
//! sliders, numeric channel inputs, and hex editing, plus standalone numeric
//! and regex-gated input widgets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_chroma::{chroma_picker, ChromaColor};
//!
//! let color = RwSignal::new(ChromaColor::from_hex("3b82f6").unwrap());
//! // Use `chroma_picker(color)` in your Floem view tree.
//! ```

mod color;
mod math;

#[cfg(feature = "alpha")]
mod alpha_slider;
#[cfg(feature = "alpha")]
mod checkerboard;
mod color_editor;
mod constants;
mod hue_slider;
mod inputs;
mod sv_area;
mod swatch;

pub use color::{ChromaColor, ColorUpdate, HslUpdate, HsvUpdate, InvalidHexColor, RgbUpdate};
pub use inputs::{number_input, regex_input, stepper_input};
pub use swatch::color_swatch;

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level color editor view.
///
/// The editor reads from and writes to `color`. Any external changes to the
/// signal are reflected in the UI, and user edits update the signal.
pub fn chroma_picker(color: RwSignal<ChromaColor>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_editor::color_editor(color)
}
