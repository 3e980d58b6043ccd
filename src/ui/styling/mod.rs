//! Styling for the chart widgets
//!
//! - [`colors`] - Color constants, hex conversion and gradient helpers

pub mod colors;

pub use colors::{
    COLOR_AREA_BOTTOM, COLOR_AREA_TOP, COLOR_BACKGROUND, COLOR_TOOLTIP_BOTTOM, COLOR_TOOLTIP_TOP,
    WHITE, gradient_colors, lerp_color, rgb565_from_hex,
};
