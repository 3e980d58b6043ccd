//! Hover state and the speech-bubble tooltip
//!
//! The bubble is a rounded body with a tail pointing down at the hovered
//! point. It is rasterised row by row so the fill can carry a vertical
//! gradient.

use core::fmt::Write;

use embedded_graphics::Pixel;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::{String, Vec};

use crate::ui::styling::{COLOR_TOOLTIP_BOTTOM, COLOR_TOOLTIP_TOP, WHITE, lerp_color};

use super::constants::{
    MAX_TOOLTIP_TEXT_LENGTH, TOOLTIP_BODY_HEIGHT_PX, TOOLTIP_CORNER_RADIUS_PX,
    TOOLTIP_FILL_OPACITY, TOOLTIP_HEIGHT_PX, TOOLTIP_LINE_CHARS, TOOLTIP_LINE_HEIGHT_PX,
    TOOLTIP_MAX_LINES, TOOLTIP_TAIL_LEFT_PX, TOOLTIP_TAIL_RIGHT_PX, TOOLTIP_TAIL_TIP_X_PX,
    TOOLTIP_WIDTH_PX,
};
use super::format::ValueFormatter;
use super::layout::{RenderPoint, round_px};
use super::series::DataPoint;

/// Tooltip text buffer
pub type TooltipText = String<MAX_TOOLTIP_TEXT_LENGTH>;

/// Tooltip anchor in container-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverCoordinate {
    /// Horizontal offset from the container's left edge
    pub x: f32,
    /// Vertical offset from the container's top edge
    pub y: f32,
}

impl From<RenderPoint> for HoverCoordinate {
    fn from(point: RenderPoint) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// The data point currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    /// Index into the series; 0 is the first data point
    pub index: usize,
    /// Where the tooltip points to
    pub coordinate: HoverCoordinate,
}

/// Build `"<value> / <name>"`, truncating the name if it doesn't fit
pub(super) fn tooltip_text(formatter: &ValueFormatter, point: &DataPoint) -> TooltipText {
    let mut s = String::new();
    let _ = write!(s, "{} / ", formatter.format(point.value));
    for ch in point.name.chars() {
        if s.push(ch).is_err() {
            break;
        }
    }
    s
}

/// Break `text` into lines that fit across the bubble
///
/// Lines break at the last space that fits, or mid-word when a word is wider
/// than a line. The last line takes whatever still fits and drops the rest.
pub(super) fn wrap_lines(text: &str) -> Vec<&str, TOOLTIP_MAX_LINES> {
    let mut lines = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let last = lines.len() + 1 == TOOLTIP_MAX_LINES;
        let (line, next) = split_line(rest, TOOLTIP_LINE_CHARS, !last);
        if lines.push(line).is_err() || last {
            break;
        }
        rest = next.trim_start();
    }

    lines
}

fn split_line(text: &str, max_chars: usize, at_space: bool) -> (&str, &str) {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return (text, "");
    };

    if at_space {
        if text[cut..].starts_with(' ') {
            return (&text[..cut], &text[cut..]);
        }
        if let Some(space) = text[..cut].rfind(' ') {
            let line = text[..space].trim_end();
            if !line.is_empty() {
                return (line, &text[space..]);
            }
        }
    }

    (&text[..cut], &text[cut..])
}

/// Top-left corner of the bubble so its tail tip lands on `anchor`
///
/// The bubble is kept inside `bounds` on each axis where it fits.
pub(super) fn bubble_origin(anchor: Point, bounds: &Rectangle) -> Point {
    let x = anchor.x - TOOLTIP_TAIL_TIP_X_PX;
    let y = anchor.y - (TOOLTIP_HEIGHT_PX as i32 - 1);

    Point::new(
        clamp_axis(x, bounds.top_left.x, bounds.size.width, TOOLTIP_WIDTH_PX),
        clamp_axis(y, bounds.top_left.y, bounds.size.height, TOOLTIP_HEIGHT_PX),
    )
}

fn clamp_axis(value: i32, start: i32, available: u32, needed: u32) -> i32 {
    if available < needed {
        return value;
    }
    value.clamp(start, start + (available - needed) as i32)
}

/// Horizontal extent (inclusive, bubble-local) of the bubble on `row`
pub(super) fn bubble_row_span(row: i32) -> Option<(i32, i32)> {
    let width = TOOLTIP_WIDTH_PX as i32;
    let body = TOOLTIP_BODY_HEIGHT_PX as i32;
    let last_row = TOOLTIP_HEIGHT_PX as i32 - 1;

    if row < 0 || row > last_row {
        return None;
    }

    if row < body {
        let inset = corner_inset(row, body);
        return Some((inset, width - 1 - inset));
    }

    // Tail narrows linearly from the body down to the tip
    let t = (row - body) as f32 / (last_row - body).max(1) as f32;
    let tip = TOOLTIP_TAIL_TIP_X_PX as f32;
    let left = TOOLTIP_TAIL_LEFT_PX as f32 + (tip - TOOLTIP_TAIL_LEFT_PX as f32) * t;
    let right = TOOLTIP_TAIL_RIGHT_PX as f32 - (TOOLTIP_TAIL_RIGHT_PX as f32 - tip) * t;
    Some((round_px(left), round_px(right)))
}

/// How far a rounded corner pulls the body's edge in on `row`
fn corner_inset(row: i32, body_height: i32) -> i32 {
    let radius = TOOLTIP_CORNER_RADIUS_PX as f32;
    let center_y = row as f32 + 0.5;

    let dy = if center_y < radius {
        radius - center_y
    } else if center_y > body_height as f32 - radius {
        center_y - (body_height as f32 - radius)
    } else {
        return 0;
    };

    let mut inset = 0;
    while inset < TOOLTIP_CORNER_RADIUS_PX as i32 {
        let dx = radius - (inset as f32 + 0.5);
        if dx * dx + dy * dy <= radius * radius {
            break;
        }
        inset += 1;
    }
    inset
}

/// Draw the bubble with `text` so its tail points at `anchor`
pub(super) fn draw_tooltip<D: DrawTarget<Color = Rgb565>>(
    text: &str,
    anchor: Point,
    bounds: &Rectangle,
    background: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let origin = bubble_origin(anchor, bounds);
    let alpha = TOOLTIP_FILL_OPACITY as f32 / 255.0;
    let fill_top = lerp_color(background, COLOR_TOOLTIP_TOP, alpha);
    let fill_bottom = lerp_color(background, COLOR_TOOLTIP_BOTTOM, alpha);
    let last_row = TOOLTIP_HEIGHT_PX as i32 - 1;
    let body_bottom = TOOLTIP_BODY_HEIGHT_PX as i32 - 1;

    for row in 0..=last_row {
        let Some((left, right)) = bubble_row_span(row) else {
            continue;
        };
        let t = row as f32 / last_row as f32;
        let y = origin.y + row;

        Line::new(Point::new(origin.x + left, y), Point::new(origin.x + right, y))
            .into_styled(PrimitiveStyle::with_stroke(lerp_color(fill_top, fill_bottom, t), 1))
            .draw(display)?;

        // Outline fades from white to the background towards the tip
        let stroke = lerp_color(WHITE, background, t);
        if row == 0 {
            Line::new(Point::new(origin.x + left, y), Point::new(origin.x + right, y))
                .into_styled(PrimitiveStyle::with_stroke(stroke, 1))
                .draw(display)?;
        } else if row == body_bottom {
            let style = PrimitiveStyle::with_stroke(stroke, 1);
            Line::new(
                Point::new(origin.x + left, y),
                Point::new(origin.x + TOOLTIP_TAIL_LEFT_PX, y),
            )
            .into_styled(style)
            .draw(display)?;
            Line::new(
                Point::new(origin.x + TOOLTIP_TAIL_RIGHT_PX, y),
                Point::new(origin.x + right, y),
            )
            .into_styled(style)
            .draw(display)?;
        } else {
            Pixel(Point::new(origin.x + left, y), stroke).draw(display)?;
            Pixel(Point::new(origin.x + right, y), stroke).draw(display)?;
        }
    }

    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    let character_style = MonoTextStyle::new(&FONT_6X10, WHITE);
    let lines = wrap_lines(text);
    let line_height = TOOLTIP_LINE_HEIGHT_PX as i32;
    let center_x = origin.x + TOOLTIP_WIDTH_PX as i32 / 2;
    let first_y = origin.y + TOOLTIP_BODY_HEIGHT_PX as i32 / 2
        - (lines.len() as i32 - 1) * line_height / 2;

    for (i, line) in lines.iter().enumerate() {
        let position = Point::new(center_x, first_y + i as i32 * line_height);
        Text::with_text_style(line, position, character_style, text_style).draw(display)?;
    }

    Ok(())
}
