//! Constants for area graph rendering
//!
//! All magic numbers are defined here with descriptive names and units.

/// Fraction of the largest value subtracted from the smallest one to get the
/// lower bound of the value range, so the curve never rests on the floor.
pub const LOWER_BOUND_PADDING_FACTOR: f64 = 0.2;

/// Number of synthetic anchor points added around the data (one per edge)
pub const ANCHOR_POINT_COUNT: usize = 2;

/// Default stroke width of the curve in pixels
pub const DEFAULT_STROKE_WIDTH_PX: u32 = 2;

/// Default number of color bands in the area gradient
pub const DEFAULT_FILL_BANDS: u8 = 16;

/// Tooltip bubble width in pixels
pub const TOOLTIP_WIDTH_PX: u32 = 143;

/// Tooltip bubble height in pixels, tail included
pub const TOOLTIP_HEIGHT_PX: u32 = 68;

/// Height of the rounded body of the bubble, tail excluded
pub const TOOLTIP_BODY_HEIGHT_PX: u32 = 49;

/// Corner radius of the bubble body
pub const TOOLTIP_CORNER_RADIUS_PX: u32 = 10;

/// Left x of the tail where it joins the body
pub const TOOLTIP_TAIL_LEFT_PX: i32 = 53;

/// Right x of the tail where it joins the body
pub const TOOLTIP_TAIL_RIGHT_PX: i32 = 90;

/// X of the tail tip, relative to the bubble's left edge
pub const TOOLTIP_TAIL_TIP_X_PX: i32 = 71;

/// Horizontal space kept clear between the text and each side of the bubble
pub const TOOLTIP_TEXT_PADDING_PX: u32 = 4;

/// Glyph advance of the tooltip font (`FONT_6X10`)
pub const TOOLTIP_CHAR_WIDTH_PX: u32 = 6;

/// Line height of the tooltip font (`FONT_6X10`)
pub const TOOLTIP_LINE_HEIGHT_PX: u32 = 10;

/// Characters that fit on one tooltip line
pub const TOOLTIP_LINE_CHARS: usize =
    ((TOOLTIP_WIDTH_PX - 2 * TOOLTIP_TEXT_PADDING_PX) / TOOLTIP_CHAR_WIDTH_PX) as usize;

/// Lines of text the bubble body holds
pub const TOOLTIP_MAX_LINES: usize = 3;

const _: () = assert!(TOOLTIP_MAX_LINES as u32 * TOOLTIP_LINE_HEIGHT_PX < TOOLTIP_BODY_HEIGHT_PX);

/// Opacity of the bubble fill (0-255), 0.4 of full
pub const TOOLTIP_FILL_OPACITY: u8 = 102;

/// Maximum length of a formatted value (characters)
pub const MAX_VALUE_LABEL_LENGTH: usize = 24;

/// Most digits a currency format prints after the decimal separator
pub const MAX_FRACTION_DIGITS: u8 = 9;

/// Maximum length of the full tooltip text (characters)
pub const MAX_TOOLTIP_TEXT_LENGTH: usize = 48;
