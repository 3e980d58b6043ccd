//! Color definitions and blending helpers
//!
//! All colors are RGB565, the native format of the displays this crate
//! targets. Web-style `0xRRGGBB` values are converted with [`rgb565_from_hex`].
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

// ============================================================================
// Chart Colors
// ============================================================================

/// Default widget background - near black with a violet tint
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(0x13 >> 3, 0x11 >> 2, 0x1a >> 3);

/// Top stop of the area gradient - bright blue (#3370f5)
pub const COLOR_AREA_TOP: Rgb565 = Rgb565::new(0x33 >> 3, 0x70 >> 2, 0xf5 >> 3);

/// Bottom stop of the area gradient - pink (#ee5aa2)
pub const COLOR_AREA_BOTTOM: Rgb565 = Rgb565::new(0xee >> 3, 0x5a >> 2, 0xa2 >> 3);

/// Top stop of the tooltip bubble fill (#514379)
pub const COLOR_TOOLTIP_TOP: Rgb565 = Rgb565::new(0x51 >> 3, 0x43 >> 2, 0x79 >> 3);

/// Bottom stop of the tooltip bubble fill (#13111a)
pub const COLOR_TOOLTIP_BOTTOM: Rgb565 = Rgb565::new(0x13 >> 3, 0x11 >> 2, 0x1a >> 3);

// ============================================================================
// Stroke and Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

// ============================================================================
// Conversions
// ============================================================================

/// Convert a `0xRRGGBB` value to RGB565.
pub const fn rgb565_from_hex(hex: u32) -> Rgb565 {
    let r = ((hex >> 16) & 0xff) as u8;
    let g = ((hex >> 8) & 0xff) as u8;
    let b = (hex & 0xff) as u8;
    rgb888_to_rgb565(r, g, b)
}

/// Expand an RGB565 color back to 8 bits per channel.
pub fn rgb565_to_rgb888(color: Rgb565) -> (u8, u8, u8) {
    let raw = color.into_storage();
    let r5 = ((raw >> 11) & 0x1f) as u8;
    let g6 = ((raw >> 5) & 0x3f) as u8;
    let b5 = (raw & 0x1f) as u8;

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8, g8, b8)
}

/// Pack 8-bit channels into RGB565.
pub const fn rgb888_to_rgb565(r8: u8, g8: u8, b8: u8) -> Rgb565 {
    Rgb565::new(r8 >> 3, g8 >> 2, b8 >> 3)
}

/// Linear interpolation between two colors, `t` clamped to 0.0..=1.0
pub fn lerp_color(start: Rgb565, end: Rgb565, t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    let (r0, g0, b0) = rgb565_to_rgb888(start);
    let (r1, g1, b1) = rgb565_to_rgb888(end);

    let r = r0 as f32 + (r1 as f32 - r0 as f32) * t;
    let g = g0 as f32 + (g1 as f32 - g0 as f32) * t;
    let b = b0 as f32 + (b1 as f32 - b0 as f32) * t;

    rgb888_to_rgb565(r as u8, g as u8, b as u8)
}

/// Build `bands` evenly spaced colors from `start` to `end`.
///
/// A single band yields `end`, matching how a one-step gradient collapses.
pub fn gradient_colors(start: Rgb565, end: Rgb565, bands: u8) -> alloc::vec::Vec<Rgb565> {
    let bands = bands.max(1) as usize;
    (0..bands)
        .map(|i| {
            let t = if bands > 1 {
                i as f32 / (bands - 1) as f32
            } else {
                1.0
            };
            lerp_color(start, end, t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion_matches_manual_shift() {
        assert_eq!(rgb565_from_hex(0x3370f5), COLOR_AREA_TOP);
        assert_eq!(rgb565_from_hex(0xffffff), WHITE);
        assert_eq!(rgb565_from_hex(0x000000), Rgb565::BLACK);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp_color(Rgb565::BLACK, WHITE, 0.0), Rgb565::BLACK);
        assert_eq!(lerp_color(Rgb565::BLACK, WHITE, 1.0), WHITE);
        assert_eq!(lerp_color(Rgb565::BLACK, WHITE, 7.0), WHITE);
    }

    #[test]
    fn gradient_has_requested_band_count() {
        let colors = gradient_colors(COLOR_AREA_TOP, COLOR_AREA_BOTTOM, 4);
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0], COLOR_AREA_TOP);
        assert_eq!(colors[3], COLOR_AREA_BOTTOM);

        assert_eq!(gradient_colors(WHITE, Rgb565::BLACK, 0), [Rgb565::BLACK]);
    }
}
