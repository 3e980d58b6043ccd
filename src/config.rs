//! Widget configuration
//!
//! [`GraphConfig`] is plain data so a host can ship it alongside its assets
//! and decode it at startup with postcard. Colors are stored as web-style
//! `0xRRGGBB` values and converted to RGB565 on use.

extern crate alloc;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ui::components::area_graph::constants::{DEFAULT_FILL_BANDS, DEFAULT_STROKE_WIDTH_PX};
use crate::ui::components::area_graph::{
    AreaStyle, GraphError, GraphResult, ValueFormat, ValueFormatter,
};
use crate::ui::styling::rgb565_from_hex;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// How tooltip values are rendered
    pub value_format: ValueFormat,
    /// Widget background, `0xRRGGBB`
    pub background: u32,
    /// Area gradient color at the top, `0xRRGGBB`
    pub fill_top: u32,
    /// Area gradient color at the bottom, `0xRRGGBB`
    pub fill_bottom: u32,
    /// Number of gradient bands
    pub fill_bands: u8,
    /// Curve color, `0xRRGGBB`
    pub stroke_color: u32,
    /// Curve width in pixels
    pub stroke_width: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            value_format: ValueFormat::default(),
            background: 0x13111a,
            fill_top: 0x3370f5,
            fill_bottom: 0xee5aa2,
            fill_bands: DEFAULT_FILL_BANDS,
            stroke_color: 0xffffff,
            stroke_width: DEFAULT_STROKE_WIDTH_PX,
        }
    }
}

impl GraphConfig {
    /// Decode a postcard-encoded configuration
    pub fn from_bytes(bytes: &[u8]) -> GraphResult<Self> {
        postcard::from_bytes(bytes).map_err(|e| {
            debug!("Graph config decode failed: {:?}", e);
            GraphError::ConfigDecode
        })
    }

    /// Encode this configuration with postcard
    pub fn to_bytes(&self) -> GraphResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(|_| GraphError::ConfigEncode)
    }

    /// Formatter for tooltip values
    pub fn formatter(&self) -> ValueFormatter {
        self.value_format.into()
    }

    /// Background as RGB565
    pub fn background_color(&self) -> Rgb565 {
        rgb565_from_hex(self.background)
    }

    /// Curve and area colors as RGB565
    pub fn area_style(&self) -> AreaStyle {
        AreaStyle {
            fill_top: rgb565_from_hex(self.fill_top),
            fill_bottom: rgb565_from_hex(self.fill_bottom),
            fill_bands: self.fill_bands,
            stroke_color: rgb565_from_hex(self.stroke_color),
            stroke_width: self.stroke_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::area_graph::{Currency, Locale};
    use crate::ui::styling::{COLOR_BACKGROUND, WHITE};

    #[test]
    fn defaults_match_builtin_style() {
        let config = GraphConfig::default();

        assert_eq!(config.area_style(), AreaStyle::default());
        assert_eq!(config.background_color(), COLOR_BACKGROUND);
        assert_eq!(config.formatter().format(20.0), "$20.00");
    }

    #[test]
    fn survives_postcard_encoding() {
        let config = GraphConfig {
            value_format: ValueFormat::Currency {
                locale: Locale::EnUs,
                currency: Currency::Usd,
            },
            stroke_width: 3,
            fill_bands: 4,
            ..GraphConfig::default()
        };

        let bytes = config.to_bytes().unwrap();
        let decoded = GraphConfig::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, config);
        assert_eq!(decoded.area_style().stroke_color, WHITE);
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let bytes = GraphConfig::default().to_bytes().unwrap();
        assert_eq!(
            GraphConfig::from_bytes(&bytes[..2]),
            Err(GraphError::ConfigDecode)
        );
        assert_eq!(GraphConfig::from_bytes(&[]), Err(GraphError::ConfigDecode));
    }
}
