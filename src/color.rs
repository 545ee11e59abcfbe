//! ChromaColor — the color model behind the picker widgets.
//!
//! Stores one color in three representations at once (RGB 0–255, HSV and HSL
//! with hue in degrees) plus alpha, and keeps them consistent by recomputing
//! the other spaces after every write.

use thiserror::Error;

use crate::math;

/// Error returned when a hex color string fails validation.
///
/// Carries the offending input. This is the only failure mode of the model;
/// every other write is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0}")]
pub struct InvalidHexColor(pub String);

/// Partial RGB write. `None` channels keep their previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RgbUpdate {
    /// Red, 0–255.
    pub r: Option<f64>,
    /// Green, 0–255.
    pub g: Option<f64>,
    /// Blue, 0–255.
    pub b: Option<f64>,
    /// Alpha, clamped to 0–1.
    pub a: Option<f64>,
}

/// Partial HSV write. `None` fields keep their previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HsvUpdate {
    /// Hue in degrees, 0–360.
    pub h: Option<f64>,
    /// HSV saturation, 0–1.
    pub s: Option<f64>,
    /// Value, 0–1.
    pub v: Option<f64>,
    /// Alpha, clamped to 0–1.
    pub a: Option<f64>,
}

/// Partial HSL write. `None` fields keep their previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HslUpdate {
    /// Hue in degrees, 0–360.
    pub h: Option<f64>,
    /// HSL saturation, 0–1.
    pub s: Option<f64>,
    /// Lightness, 0–1.
    pub l: Option<f64>,
    /// Alpha, clamped to 0–1.
    pub a: Option<f64>,
}

/// One write to a [`ChromaColor`], tagged by the color space it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorUpdate {
    /// 6-digit (`rrggbb`) or 8-digit (`rrggbbaa`) hex string, with an
    /// optional leading `#`. The only variant that can fail.
    Hex(String),
    /// Partial RGB write; HSV and HSL are recomputed afterwards.
    Rgb(RgbUpdate),
    /// Partial HSV write; RGB and then HSL are recomputed afterwards.
    Hsv(HsvUpdate),
    /// Partial HSL write; RGB and then HSV are recomputed afterwards.
    Hsl(HslUpdate),
    /// Alpha-only write, clamped to 0–1.
    Alpha(f64),
}

impl From<RgbUpdate> for ColorUpdate {
    fn from(update: RgbUpdate) -> Self {
        ColorUpdate::Rgb(update)
    }
}

impl From<HsvUpdate> for ColorUpdate {
    fn from(update: HsvUpdate) -> Self {
        ColorUpdate::Hsv(update)
    }
}

impl From<HslUpdate> for ColorUpdate {
    fn from(update: HslUpdate) -> Self {
        ColorUpdate::Hsl(update)
    }
}

/// A color held in RGB, HSV, and HSL simultaneously.
///
/// The three representations always describe the same color: every write
/// through [`set`](Self::set) re-derives the other two spaces. RGB channels
/// are kept as integer-valued floats in 0–255, hue in degrees, every other
/// component in 0–1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaColor {
    h: f64,
    s_hsv: f64,
    v: f64,
    s_hsl: f64,
    l: f64,
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for ChromaColor {
    /// Opaque black.
    fn default() -> Self {
        Self {
            h: 0.0,
            s_hsv: 0.0,
            v: 0.0,
            s_hsl: 0.0,
            l: 0.0,
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl ChromaColor {
    /// Parse a 6- or 8-digit hex string (optional leading `#`).
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHexColor> {
        let mut color = Self::default();
        color.set(ColorUpdate::Hex(hex.to_string()))?;
        Ok(color)
    }

    /// Hue in degrees, 0–360.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// HSV saturation, 0–1.
    pub fn s_hsv(&self) -> f64 {
        self.s_hsv
    }

    /// Value, 0–1.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// HSL saturation, 0–1.
    pub fn s_hsl(&self) -> f64 {
        self.s_hsl
    }

    /// Lightness, 0–1.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Red, 0–255.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green, 0–255.
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue, 0–255.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Alpha, 0–1.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// (r, g, b) in 0–255.
    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// (r, g, b, a) — channels in 0–255, alpha in 0–1.
    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }

    /// (hue 0–360, saturation 0–1, value 0–1).
    pub fn hsv(&self) -> (f64, f64, f64) {
        (self.h, self.s_hsv, self.v)
    }

    /// (hue 0–360, saturation 0–1, lightness 0–1).
    pub fn hsl(&self) -> (f64, f64, f64) {
        (self.h, self.s_hsl, self.l)
    }

    /// Lowercase `#rrggbb`, alpha omitted.
    pub fn hex_rgb(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8
        )
    }

    /// Lowercase `#rrggbbaa`, alpha rendered as `round(a * 255)`.
    pub fn hex_rgba(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.a * 255.0).round() as u8
        )
    }

    /// Apply one write and reconcile the other representations.
    ///
    /// Partial updates only touch the fields that are `Some`; the rest keep
    /// their previous value. Alpha is clamped to 0–1 on every path. Other
    /// channels are taken as-is — out-of-range values are the caller's
    /// responsibility and fold into the next recompute.
    ///
    /// Only `ColorUpdate::Hex` can fail; on a malformed string the model is
    /// left untouched.
    pub fn set(&mut self, update: ColorUpdate) -> Result<(), InvalidHexColor> {
        match update {
            ColorUpdate::Hex(hex) => {
                let (r, g, b, a) = parse_hex(&hex)?;
                self.r = r;
                self.g = g;
                self.b = b;
                self.sync_hsv_from_rgb();
                self.sync_hsl_from_rgb();
                self.a = a;
            }
            ColorUpdate::Rgb(RgbUpdate { r, g, b, a }) => {
                self.apply_alpha(a);
                self.r = r.unwrap_or(self.r);
                self.g = g.unwrap_or(self.g);
                self.b = b.unwrap_or(self.b);
                self.sync_hsv_from_rgb();
                self.sync_hsl_from_rgb();
            }
            ColorUpdate::Hsv(HsvUpdate { h, s, v, a }) => {
                self.apply_alpha(a);
                self.h = h.unwrap_or(self.h);
                self.s_hsv = s.unwrap_or(self.s_hsv);
                self.v = v.unwrap_or(self.v);
                let (r, g, b) = math::hsv_to_rgb(self.h, self.s_hsv, self.v);
                self.r = r;
                self.g = g;
                self.b = b;
                // HSL only; the hue written above is kept verbatim.
                self.sync_hsl_from_rgb();
            }
            ColorUpdate::Hsl(HslUpdate { h, s, l, a }) => {
                self.apply_alpha(a);
                self.h = h.unwrap_or(self.h);
                self.s_hsl = s.unwrap_or(self.s_hsl);
                self.l = l.unwrap_or(self.l);
                let (r, g, b) = math::hsl_to_rgb(self.h, self.s_hsl, self.l);
                self.r = r;
                self.g = g;
                self.b = b;
                // Full HSV resync, hue included.
                self.sync_hsv_from_rgb();
            }
            ColorUpdate::Alpha(a) => {
                self.a = a.clamp(0.0, 1.0);
            }
        }
        Ok(())
    }

    fn apply_alpha(&mut self, a: Option<f64>) {
        if let Some(a) = a {
            self.a = a.clamp(0.0, 1.0);
        }
    }

    fn sync_hsv_from_rgb(&mut self) {
        let (h, s, v) = math::rgb_to_hsv(self.r, self.g, self.b);
        self.h = h;
        self.s_hsv = s;
        self.v = v;
    }

    fn sync_hsl_from_rgb(&mut self) {
        let (_, s, l) = math::rgb_to_hsl(self.r, self.g, self.b);
        self.s_hsl = s;
        self.l = l;
    }
}

fn parse_hex(hex: &str) -> Result<(f64, f64, f64, f64), InvalidHexColor> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(InvalidHexColor(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(f64::from)
            .map_err(|_| InvalidHexColor(hex.to_string()))
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 {
        channel(6)? / 255.0
    } else {
        1.0
    };

    Ok((r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rgb(r: f64, g: f64, b: f64) -> ColorUpdate {
        ColorUpdate::Rgb(RgbUpdate {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: None,
        })
    }

    #[test]
    fn rgb_write_reads_back_unchanged() {
        let mut color = ChromaColor::default();
        for &(r, g, b) in &[
            (0.0, 0.0, 0.0),
            (255.0, 255.0, 255.0),
            (12.0, 200.0, 57.0),
            (255.0, 128.0, 0.0),
        ] {
            color.set(rgb(r, g, b)).unwrap();
            assert_eq!(color.rgb(), (r, g, b));
        }
    }

    #[test]
    fn hsv_round_trip_through_setter() {
        for &(r, g, b) in &[(12.0, 200.0, 57.0), (1.0, 2.0, 3.0), (250.0, 10.0, 10.0)] {
            let mut color = ChromaColor::default();
            color.set(rgb(r, g, b)).unwrap();
            let (h, s, v) = color.hsv();

            let mut back = ChromaColor::default();
            back.set(ColorUpdate::Hsv(HsvUpdate {
                h: Some(h),
                s: Some(s),
                v: Some(v),
                a: None,
            }))
            .unwrap();

            assert!((back.r() - r).abs() <= 1.0);
            assert!((back.g() - g).abs() <= 1.0);
            assert!((back.b() - b).abs() <= 1.0);
        }
    }

    #[test]
    fn hex_round_trips() {
        for hex in ["#000000", "#FFFFFF", "#FF0000"] {
            let mut color = ChromaColor::default();
            color.set(ColorUpdate::Hex(hex.to_string())).unwrap();
            assert!(color.hex_rgb().eq_ignore_ascii_case(hex));
            assert_eq!(color.a(), 1.0);
        }

        let mut color = ChromaColor::default();
        color.set(ColorUpdate::Hex("#00FF0080".to_string())).unwrap();
        assert!(color.hex_rgba().eq_ignore_ascii_case("#00FF0080"));
        assert_abs_diff_eq!(color.a(), 128.0 / 255.0);
    }

    #[test]
    fn hex_prefix_is_optional() {
        let color = ChromaColor::from_hex("ff8800").unwrap();
        assert_eq!(color.rgb(), (255.0, 136.0, 0.0));
    }

    #[test]
    fn invalid_hex_is_rejected_and_state_kept() {
        let mut color = ChromaColor::from_hex("#123456").unwrap();
        let before = color;

        for bad in ["#12345", "zzzzzz", "", "#1234567", "#ggff00"] {
            let err = color.set(ColorUpdate::Hex(bad.to_string())).unwrap_err();
            assert_eq!(err, InvalidHexColor(bad.to_string()));
            assert_eq!(color, before);
        }
    }

    #[test]
    fn alpha_is_clamped_on_every_path() {
        let mut color = ChromaColor::default();

        color.set(ColorUpdate::Alpha(5.0)).unwrap();
        assert_eq!(color.a(), 1.0);

        color.set(ColorUpdate::Alpha(-3.0)).unwrap();
        assert_eq!(color.a(), 0.0);

        color
            .set(ColorUpdate::Rgb(RgbUpdate {
                a: Some(2.5),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(color.a(), 1.0);
    }

    #[test]
    fn achromatic_rgb_yields_zero_hue_and_saturation() {
        let mut color = ChromaColor::default();
        color.set(rgb(128.0, 128.0, 128.0)).unwrap();
        assert_eq!(color.s_hsv(), 0.0);
        assert_eq!(color.s_hsl(), 0.0);
        assert_eq!(color.h(), 0.0);
        assert!(!color.l().is_nan());
    }

    #[test]
    fn partial_hsv_write_keeps_stored_hue() {
        let mut color = ChromaColor::default();
        color
            .set(ColorUpdate::Hsv(HsvUpdate {
                h: Some(120.0),
                s: Some(1.0),
                v: Some(1.0),
                a: None,
            }))
            .unwrap();

        color
            .set(ColorUpdate::Hsv(HsvUpdate {
                s: Some(0.5),
                ..Default::default()
            }))
            .unwrap();

        assert_eq!(color.h(), 120.0);
        assert_eq!(color.v(), 1.0);
        assert_eq!(color.s_hsv(), 0.5);
    }

    #[test]
    fn hsl_write_re_derives_hue_from_rgb() {
        // An achromatic HSL write collapses the hue, matching the RGB-driven
        // paths: hue is re-derived, not preserved, on this branch.
        let mut color = ChromaColor::default();
        color
            .set(ColorUpdate::Hsl(HslUpdate {
                h: Some(120.0),
                s: Some(0.0),
                l: Some(0.5),
                a: None,
            }))
            .unwrap();
        assert_eq!(color.h(), 0.0);
        assert_eq!(color.rgb(), (128.0, 128.0, 128.0));
    }

    #[test]
    fn partial_rgb_write_keeps_other_channels() {
        let mut color = ChromaColor::default();
        color.set(rgb(10.0, 20.0, 30.0)).unwrap();
        color
            .set(ColorUpdate::Rgb(RgbUpdate {
                g: Some(200.0),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(color.rgb(), (10.0, 200.0, 30.0));
    }

    #[test]
    fn representations_stay_consistent_after_mixed_writes() {
        let mut color = ChromaColor::from_hex("#3b82f6").unwrap();

        color
            .set(ColorUpdate::Hsl(HslUpdate {
                l: Some(0.25),
                ..Default::default()
            }))
            .unwrap();

        let (h, s, l) = color.hsl();
        let (er, eg, eb) = crate::math::hsl_to_rgb(h, s, l);
        assert!((color.r() - er).abs() <= 1.0);
        assert!((color.g() - eg).abs() <= 1.0);
        assert!((color.b() - eb).abs() <= 1.0);

        let (h, s, v) = color.hsv();
        let (er, eg, eb) = crate::math::hsv_to_rgb(h, s, v);
        assert!((color.r() - er).abs() <= 1.0);
        assert!((color.g() - eg).abs() <= 1.0);
        assert!((color.b() - eb).abs() <= 1.0);
    }

    #[test]
    fn default_is_opaque_black() {
        let color = ChromaColor::default();
        assert_eq!(color.rgba(), (0.0, 0.0, 0.0, 1.0));
        assert_eq!(color.hex_rgb(), "#000000");
        assert_eq!(color.hex_rgba(), "#000000ff");
    }
}
