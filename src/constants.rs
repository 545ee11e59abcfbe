//! Sizing, color, and styling constants shared across the widgets.

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor ring radius on the 2D saturation/value area
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for slider tracks and the swatch
pub const RADIUS: f32 = 4.0;

/// Gap between editor elements
pub const GAP: f32 = 8.0;

/// Padding around the whole editor
pub const PADDING: f32 = 8.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 28.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Side length of the preview swatch
pub const SWATCH_SIZE: f32 = 32.0;

/// Raster width used for the saturation/value area image
pub const SV_RASTER_SIZE: u32 = 256;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
