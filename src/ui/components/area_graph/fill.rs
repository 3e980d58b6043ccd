//! Area fill and curve rendering
//!
//! Points are joined with straight Line primitives. The fill is a vertical
//! gradient spanning from the highest point of the curve down to the bottom
//! of the widget, drawn column by column beneath the curve.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

extern crate alloc;
use alloc::vec::Vec;

use crate::ui::styling::{COLOR_AREA_BOTTOM, COLOR_AREA_TOP, WHITE, gradient_colors};

use super::constants::{DEFAULT_FILL_BANDS, DEFAULT_STROKE_WIDTH_PX};
use super::layout::Layout;

/// Colors and widths for the curve and the area beneath it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaStyle {
    /// Gradient color at the top of the area
    pub fill_top: Rgb565,
    /// Gradient color at the bottom of the widget
    pub fill_bottom: Rgb565,
    /// Number of gradient bands to render
    pub fill_bands: u8,
    /// Curve color
    pub stroke_color: Rgb565,
    /// Curve width in pixels
    pub stroke_width: u32,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            fill_top: COLOR_AREA_TOP,
            fill_bottom: COLOR_AREA_BOTTOM,
            fill_bands: DEFAULT_FILL_BANDS,
            stroke_color: WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH_PX,
        }
    }
}

/// Convert a layout to screen points inside `area`
pub(super) fn screen_points(layout: &Layout, area: &Rectangle) -> Vec<Point> {
    layout
        .points()
        .iter()
        .map(|point| point.to_screen(area.top_left))
        .collect()
}

/// Draw the curve with straight segments between consecutive points
pub(super) fn draw_linear_stroke<D: DrawTarget<Color = Rgb565>>(
    points: &[Point],
    style: &AreaStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    if points.len() < 2 || style.stroke_width == 0 {
        return Ok(());
    }

    let line_style = PrimitiveStyle::with_stroke(style.stroke_color, style.stroke_width);
    for pair in points.windows(2) {
        Line::new(pair[0], pair[1])
            .into_styled(line_style)
            .draw(display)?;
    }

    Ok(())
}

/// Draw the gradient area between the curve and the bottom of `area`
pub(super) fn draw_area_fill<D: DrawTarget<Color = Rgb565>>(
    points: &[Point],
    area: &Rectangle,
    style: &AreaStyle,
    display: &mut D,
) -> Result<(), D::Error> {
    if points.len() < 2 || area.size.width == 0 || area.size.height == 0 {
        return Ok(());
    }

    let left = area.top_left.x;
    let right = left + area.size.width as i32 - 1;
    let bottom = area.top_left.y + area.size.height as i32 - 1;
    let top = points
        .iter()
        .map(|p| p.y)
        .min()
        .unwrap_or(bottom)
        .max(area.top_left.y);

    let bands = GradientBands::new(
        gradient_colors(style.fill_top, style.fill_bottom, style.fill_bands),
        top,
        bottom,
    );

    let mut last_x: Option<i32> = None;
    for pair in points.windows(2) {
        let (mut p0, mut p1) = (pair[0], pair[1]);
        if p0.x > p1.x {
            core::mem::swap(&mut p0, &mut p1);
        }

        let dx = (p1.x - p0.x).max(1) as f32;
        for x in p0.x..=p1.x {
            // Shared endpoints belong to the previous segment
            if last_x.is_some_and(|last| x <= last) || x < left || x > right {
                continue;
            }

            let t = (x - p0.x) as f32 / dx;
            let y_line = p0.y + ((p1.y - p0.y) as f32 * t) as i32;
            bands.draw_column(x, y_line.max(area.top_left.y), bottom, display)?;
            last_x = Some(x);
        }
    }

    Ok(())
}

/// Gradient colors laid out over fixed rows
struct GradientBands {
    colors: Vec<Rgb565>,
    top: i32,
    band_height: f32,
}

impl GradientBands {
    fn new(colors: Vec<Rgb565>, top: i32, bottom: i32) -> Self {
        let height = (bottom - top + 1).max(1) as f32;
        let band_height = (height / colors.len().max(1) as f32).max(1.0);
        Self {
            colors,
            top,
            band_height,
        }
    }

    /// Draw one column from `y_line` down to `bottom`, both inclusive
    fn draw_column<D: DrawTarget<Color = Rgb565>>(
        &self,
        x: i32,
        y_line: i32,
        bottom: i32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if y_line > bottom {
            return Ok(());
        }

        for (index, color) in self.colors.iter().enumerate() {
            let band_start = self.top + (self.band_height * index as f32) as i32;
            let band_end = if index == self.colors.len() - 1 {
                bottom
            } else {
                self.top + (self.band_height * (index as f32 + 1.0)) as i32 - 1
            };

            let start = band_start.max(y_line);
            let end = band_end.min(bottom);
            if end >= start {
                Line::new(Point::new(x, start), Point::new(x, end))
                    .into_styled(PrimitiveStyle::with_stroke(*color, 1))
                    .draw(display)?;
            }
        }

        Ok(())
    }
}
