//! Color space conversions — direct math without external dependencies.
//!
//! All functions work in the model's units: hue in degrees (0–360),
//! saturation/value/lightness in 0.0–1.0, RGB channels in 0–255.

/// HSV → RGB via the six-sector chroma construction. Returns 0–255 channels
/// rounded to whole values.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let x = c * (1.0 - (((h / 60.0) % 2.0) - 1.0).abs());
    let m = v - c;
    let (rr, gg, bb) = sector(h, c, x);
    (
        ((rr + m) * 255.0).round(),
        ((gg + m) * 255.0).round(),
        ((bb + m) * 255.0).round(),
    )
}

/// HSL → RGB via the six-sector chroma construction. Returns 0–255 channels
/// rounded to whole values.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (((h / 60.0) % 2.0) - 1.0).abs());
    let m = l - c / 2.0;
    let (rr, gg, bb) = sector(h, c, x);
    (
        ((rr + m) * 255.0).round(),
        ((gg + m) * 255.0).round(),
        ((bb + m) * 255.0).round(),
    )
}

/// Pre-shift RGB for the 60°-wide hue sector containing `h`.
fn sector(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

/// RGB → HSV. Returns (hue 0–360, saturation 0–1, value 0–1).
///
/// Achromatic input yields hue 0 and saturation 0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (rr, gg, bb) = (r / 255.0, g / 255.0, b / 255.0);
    let max = rr.max(gg).max(bb);
    let min = rr.min(gg).min(bb);
    let delta = max - min;

    let h = hue_of(rr, gg, bb, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

/// RGB → HSL. Returns (hue 0–360, saturation 0–1, lightness 0–1).
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (rr, gg, bb) = (r / 255.0, g / 255.0, b / 255.0);
    let max = rr.max(gg).max(bb);
    let min = rr.min(gg).min(bb);
    let delta = max - min;

    let h = hue_of(rr, gg, bb, max, delta);
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    (h, s, l)
}

/// Hue in degrees from normalized channels, picked from whichever channel is
/// the maximum. `delta == 0` maps to 0.
fn hue_of(rr: f64, gg: f64, bb: f64, max: f64, delta: f64) -> f64 {
    let mut h = if delta == 0.0 {
        0.0
    } else if max == rr {
        60.0 * (((gg - bb) / delta) % 6.0)
    } else if max == gg {
        60.0 * ((bb - rr) / delta + 2.0)
    } else {
        60.0 * ((rr - gg) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn primaries_to_hsv() {
        assert_eq!(rgb_to_hsv(255.0, 0.0, 0.0), (0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(0.0, 255.0, 0.0), (120.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(0.0, 0.0, 255.0), (240.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(255.0, 255.0, 0.0), (60.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(0.0, 255.0, 255.0), (180.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(255.0, 0.0, 255.0), (300.0, 1.0, 1.0));
    }

    #[test]
    fn hsv_to_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 255.0, 0.0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 255.0));
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), (255.0, 255.0, 0.0));
    }

    #[test]
    fn hsl_halfway_lightness_is_pure_hue() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0.0, 0.0, 255.0));
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let (h, s, v) = rgb_to_hsv(128.0, 128.0, 128.0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_abs_diff_eq!(v, 128.0 / 255.0);

        let (h, s, l) = rgb_to_hsl(255.0, 255.0, 255.0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(l, 1.0);
    }

    #[test]
    fn black_does_not_divide_by_zero() {
        let (h, s, v) = rgb_to_hsv(0.0, 0.0, 0.0);
        assert_eq!((h, s, v), (0.0, 0.0, 0.0));
        let (h, s, l) = rgb_to_hsl(0.0, 0.0, 0.0);
        assert_eq!((h, s, l), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hsv_round_trip_within_rounding() {
        for &(r, g, b) in &[
            (12.0, 200.0, 57.0),
            (255.0, 128.0, 0.0),
            (1.0, 2.0, 3.0),
            (240.0, 240.0, 239.0),
        ] {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let (r2, g2, b2) = hsv_to_rgb(h, s, v);
            assert!((r - r2).abs() <= 1.0, "r: {r} vs {r2}");
            assert!((g - g2).abs() <= 1.0, "g: {g} vs {g2}");
            assert!((b - b2).abs() <= 1.0, "b: {b} vs {b2}");
        }
    }

    #[test]
    fn hsl_round_trip_within_rounding() {
        for &(r, g, b) in &[(12.0, 200.0, 57.0), (90.0, 90.0, 200.0), (7.0, 0.0, 7.0)] {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (r2, g2, b2) = hsl_to_rgb(h, s, l);
            assert!((r - r2).abs() <= 1.0);
            assert!((g - g2).abs() <= 1.0);
            assert!((b - b2).abs() <= 1.0);
        }
    }
}
