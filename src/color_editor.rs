//! Color editor: consolidated panel with the saturation/value area, hue
//! slider, alpha slider, hex input, HSV/HSL/RGB input rows, and swatch.
//!
//! All state lives in one `RwSignal<ChromaColor>`. The per-channel display
//! signals the individual widgets bind to are synced against the model in
//! both directions; because the model already keeps every representation
//! consistent, each sync is a plain value comparison — there is no
//! cross-space reconciliation here.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

#[cfg(feature = "alpha")]
use crate::alpha_slider::alpha_slider;
use crate::color::{ChromaColor, ColorUpdate, HslUpdate, HsvUpdate, RgbUpdate};
use crate::constants;
use crate::hue_slider::hue_slider;
#[cfg(feature = "alpha")]
use crate::inputs::alpha_input;
use crate::inputs::{copy_button, hex_input, number_input};
use crate::sv_area::sv_area;
use crate::swatch::color_swatch;

/// Tolerance for the bidirectional signal syncs. Large enough to swallow
/// float noise from the normalize/denormalize round trips, far below the
/// smallest meaningful change (1/255 ≈ 0.004).
const EPS: f64 = 1e-4;

fn sync_f64(signal: RwSignal<f64>, target: f64) {
    if (signal.get_untracked() - target).abs() > EPS {
        signal.set(target);
    }
}

/// Hex digits (no `#`, lowercase) the hex input displays for `color`:
/// 6 for opaque colors, 8 otherwise.
fn display_hex(color: &ChromaColor) -> String {
    let hex = if color.a() < 1.0 {
        color.hex_rgba()
    } else {
        color.hex_rgb()
    };
    hex.trim_start_matches('#').to_string()
}

/// Creates a consolidated color editor bound to `color`.
pub(crate) fn color_editor(color: RwSignal<ChromaColor>) -> impl IntoView {
    let init = color.get_untracked();

    // Normalized 0.0–1.0 display signals for the widgets.
    let hue = RwSignal::new(init.h() / 360.0);
    let sat = RwSignal::new(init.s_hsv());
    let val = RwSignal::new(init.v());
    let s_hsl = RwSignal::new(init.s_hsl());
    let light = RwSignal::new(init.l());
    let red = RwSignal::new(init.r() / 255.0);
    let green = RwSignal::new(init.g() / 255.0);
    let blue = RwSignal::new(init.b() / 255.0);
    let alpha = RwSignal::new(init.a());
    let hex = RwSignal::new(display_hex(&init));

    // ── Model → display signals ────────────────────────────────────────
    create_effect(move |_| {
        let c = color.get();
        sync_f64(hue, c.h() / 360.0);
        sync_f64(sat, c.s_hsv());
        sync_f64(val, c.v());
        sync_f64(s_hsl, c.s_hsl());
        sync_f64(light, c.l());
        sync_f64(red, c.r() / 255.0);
        sync_f64(green, c.g() / 255.0);
        sync_f64(blue, c.b() / 255.0);
        sync_f64(alpha, c.a());
        let display = display_hex(&c);
        if hex.get_untracked() != display {
            hex.set(display);
        }
    });

    // ── HSV group → model ──────────────────────────────────────────────
    create_effect(move |_| {
        let hv = hue.get();
        let sv = sat.get();
        let vv = val.get();
        let mut c = color.get_untracked();
        if (c.h() / 360.0 - hv).abs() > EPS
            || (c.s_hsv() - sv).abs() > EPS
            || (c.v() - vv).abs() > EPS
        {
            let update = ColorUpdate::Hsv(HsvUpdate {
                h: Some(hv * 360.0),
                s: Some(sv),
                v: Some(vv),
                a: None,
            });
            if c.set(update).is_ok() {
                color.set(c);
            }
        }
    });

    // ── HSL group → model (hue edits flow through the HSV group) ───────
    create_effect(move |_| {
        let sv = s_hsl.get();
        let lv = light.get();
        let mut c = color.get_untracked();
        if (c.s_hsl() - sv).abs() > EPS || (c.l() - lv).abs() > EPS {
            let update = ColorUpdate::Hsl(HslUpdate {
                h: None,
                s: Some(sv),
                l: Some(lv),
                a: None,
            });
            if c.set(update).is_ok() {
                color.set(c);
            }
        }
    });

    // ── RGB group → model ──────────────────────────────────────────────
    create_effect(move |_| {
        let rv = (red.get() * 255.0).round();
        let gv = (green.get() * 255.0).round();
        let bv = (blue.get() * 255.0).round();
        let mut c = color.get_untracked();
        if (c.r() - rv).abs() > EPS || (c.g() - gv).abs() > EPS || (c.b() - bv).abs() > EPS {
            let update = ColorUpdate::Rgb(RgbUpdate {
                r: Some(rv),
                g: Some(gv),
                b: Some(bv),
                a: None,
            });
            if c.set(update).is_ok() {
                color.set(c);
            }
        }
    });

    // ── Alpha → model ──────────────────────────────────────────────────
    create_effect(move |_| {
        let av = alpha.get();
        let mut c = color.get_untracked();
        if (c.a() - av).abs() > EPS {
            if c.set(ColorUpdate::Alpha(av)).is_ok() {
                color.set(c);
            }
        }
    });

    // ── Hex → model ────────────────────────────────────────────────────
    create_effect(move |_| {
        let hx = hex.get();
        let mut c = color.get_untracked();
        if display_hex(&c) != hx {
            match c.set(ColorUpdate::Hex(hx)) {
                Ok(()) => color.set(c),
                // The hex input only propagates well-formed digits, but an
                // external writer can hand the signal anything.
                Err(err) => log::debug!("{err}"),
            }
        }
    });

    // Build layout
    v_stack((
        // Saturation/value area
        sv_area(hue, sat, val).style(|s| s.margin_top(12.0)),
        // Swatch row
        h_stack((
            empty().style(|s| s.flex_grow(1.0)),
            color_swatch(color),
        ))
        .style(|st| st.items_center().margin_horiz(8.0)),
        // Hue slider
        hue_slider(hue).style(|s| s.margin_horiz(8.0)),
        // Alpha slider + percentage (feature-gated)
        #[cfg(feature = "alpha")]
        h_stack((
            alpha_slider(alpha, color).style(|s| s.flex_grow(1.0)),
            alpha_input(alpha),
        ))
        .style(|s| s.margin_horiz(8.0).gap(4.0)),
        // Hex + copy row
        h_stack((
            hex_input(hex),
            copy_button(move || format!("#{}", hex.get())),
        ))
        .style(|st| st.gap(constants::GAP).items_center().justify_center()),
        // HSV inputs row
        h_stack((
            number_input("H", hue, 360.0),
            number_input("S", sat, 100.0),
            number_input("V", val, 100.0),
            copy_button(move || {
                format!(
                    "{}, {}, {}",
                    (hue.get() * 360.0).round() as i64,
                    (sat.get() * 100.0).round() as i64,
                    (val.get() * 100.0).round() as i64,
                )
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
        // HSL inputs row
        h_stack((
            number_input("H", hue, 360.0),
            number_input("S", s_hsl, 100.0),
            number_input("L", light, 100.0),
            copy_button(move || {
                format!(
                    "{}, {}, {}",
                    (hue.get() * 360.0).round() as i64,
                    (s_hsl.get() * 100.0).round() as i64,
                    (light.get() * 100.0).round() as i64,
                )
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
        // RGB inputs row
        h_stack((
            number_input("R", red, 255.0),
            number_input("G", green, 255.0),
            number_input("B", blue, 255.0),
            copy_button(move || {
                format!(
                    "{}, {}, {}",
                    (red.get() * 255.0).round() as i64,
                    (green.get() * 255.0).round() as i64,
                    (blue.get() * 255.0).round() as i64,
                )
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}

#[cfg(test)]
mod tests {
    use super::display_hex;
    use crate::color::{ChromaColor, ColorUpdate};

    #[test]
    fn display_hex_collapses_opaque_colors() {
        let color = ChromaColor::from_hex("#3b82f6").unwrap();
        assert_eq!(display_hex(&color), "3b82f6");

        let mut translucent = color;
        translucent.set(ColorUpdate::Alpha(0.5)).unwrap();
        assert_eq!(display_hex(&translucent), "3b82f680");
    }
}
