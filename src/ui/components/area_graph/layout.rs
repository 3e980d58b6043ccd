//! Layout and coordinate transformation
//!
//! Maps a [`Series`] onto container-local pixel coordinates. Everything here
//! is a pure function of the series and the container size: the widget calls
//! [`Layout::compute`] again whenever either changes.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::prelude::*;

use super::constants::{ANCHOR_POINT_COUNT, LOWER_BOUND_PADDING_FACTOR};
use super::series::Series;

/// Padded value range used for vertical mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Smallest value in the series
    pub smallest: f64,
    /// Biggest value in the series
    pub biggest: f64,
    /// Lower bound of the mapped range: `smallest - biggest * 0.2`
    pub floor: f64,
}

impl ValueRange {
    /// Scan a series once for its extremes and derive the padded floor
    pub fn from_series(series: &Series) -> Self {
        let points = series.points();
        let mut smallest = points[0].value;
        let mut biggest = points[0].value;

        for point in points.iter().skip(1) {
            smallest = smallest.min(point.value);
            biggest = biggest.max(point.value);
        }

        Self {
            smallest,
            biggest,
            floor: smallest - biggest * LOWER_BOUND_PADDING_FACTOR,
        }
    }

    /// Distance between the floor and the biggest value
    ///
    /// Infinite when the extremes are near `f64::MAX` apart; [`value_to_y`]
    /// does not depend on it.
    ///
    /// [`value_to_y`]: ValueRange::value_to_y
    pub fn span(&self) -> f64 {
        self.biggest - self.floor
    }

    /// Map a value to a y offset in a container of the given height
    ///
    /// `biggest` maps to 0 and `floor` maps to `height` (screen y grows
    /// downward). A non-positive span has no usable scale, so every value
    /// lands on the vertical midline.
    pub fn value_to_y(&self, value: f64, height: f32) -> f32 {
        // Work in units of the largest magnitude so extremes near
        // `f64::MAX` don't overflow the span
        let scale = magnitude(self.smallest).max(magnitude(self.biggest));
        if scale == 0.0 {
            return height / 2.0;
        }

        let biggest = self.biggest / scale;
        let floor = self.smallest / scale - biggest * LOWER_BOUND_PADDING_FACTOR;
        let span = biggest - floor;
        if span <= 0.0 {
            return height / 2.0;
        }

        ((biggest - value / scale) / span * height as f64) as f32
    }
}

fn magnitude(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}

/// A position in container-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderPoint {
    /// Horizontal offset from the container's left edge
    pub x: f32,
    /// Vertical offset from the container's top edge
    pub y: f32,
}

impl RenderPoint {
    /// Create a new render point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to a screen pixel, offset by the container origin
    pub fn to_screen(self, origin: Point) -> Point {
        Point::new(origin.x + round_px(self.x), origin.y + round_px(self.y))
    }
}

/// Round half away from zero; `f32::round` is not available in `core`
pub(super) fn round_px(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

/// Computed pixel positions for a series inside a container
///
/// Holds `len(series) + 2` points: a synthetic anchor at the left edge,
/// one point per data point, and a synthetic anchor at the right edge. The
/// anchors copy the y of their neighbouring data point so the area fill
/// reaches both edges without bending the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    points: Vec<RenderPoint>,
    range: ValueRange,
    size: Size,
}

impl Layout {
    /// Compute the layout of `series` in a container of `size`
    ///
    /// A container with zero width or height has not been measured yet; every
    /// coordinate is then zero and [`Layout::is_measured`] is `false`.
    pub fn compute(series: &Series, size: Size) -> Self {
        let range = ValueRange::from_series(series);
        let count = series.len();

        if size.width == 0 || size.height == 0 {
            return Self {
                points: vec![RenderPoint::default(); count + ANCHOR_POINT_COUNT],
                range,
                size,
            };
        }

        let width = size.width as f32;
        let height = size.height as f32;
        let slots = (count + 1) as f32;

        let mut points = Vec::with_capacity(count + ANCHOR_POINT_COUNT);
        points.push(RenderPoint::default());

        for (i, point) in series.points().iter().enumerate() {
            let x = (i + 1) as f32 * width / slots;
            let y = range.value_to_y(point.value, height);
            points.push(RenderPoint::new(x, y));
        }

        // Anchors take the y of the first and last data points
        points[0].y = points[1].y;
        let last_y = points[count].y;
        points.push(RenderPoint::new(width, last_y));

        Self {
            points,
            range,
            size,
        }
    }

    /// All render points, anchors included
    pub fn points(&self) -> &[RenderPoint] {
        &self.points
    }

    /// Render points of the real data, anchors excluded
    pub fn data_points(&self) -> &[RenderPoint] {
        &self.points[1..self.points.len() - 1]
    }

    /// Render point of the data point at `index`
    pub fn data_point(&self, index: usize) -> Option<RenderPoint> {
        self.data_points().get(index).copied()
    }

    /// Index of the data point horizontally closest to `x`
    ///
    /// Ties go to the lower index. Returns `None` while the layout is unmeasured.
    pub fn nearest_data_index(&self, x: f32) -> Option<usize> {
        if !self.is_measured() {
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.data_points().iter().enumerate() {
            let delta = point.x - x;
            let distance = if delta < 0.0 { -delta } else { delta };
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((index, distance)),
            }
        }

        best.map(|(index, _)| index)
    }

    /// Whether the container had a usable size when this layout was computed
    pub fn is_measured(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }

    /// The padded value range
    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    /// The container size this layout was computed for
    pub fn size(&self) -> Size {
        self.size
    }
}
