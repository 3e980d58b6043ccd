//! Test helpers

use alloc::collections::BTreeMap;
use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Draw target that remembers the last color written to each pixel
///
/// Accepts any coordinate, including negative ones, so tests can assert that
/// nothing was drawn outside an area.
pub(crate) struct RecordingDisplay {
    pixels: BTreeMap<(i32, i32), Rgb565>,
}

impl RecordingDisplay {
    pub(crate) fn new() -> Self {
        Self {
            pixels: BTreeMap::new(),
        }
    }

    pub(crate) fn get(&self, point: Point) -> Option<Rgb565> {
        self.pixels.get(&(point.x, point.y)).copied()
    }

    pub(crate) fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.pixels.keys().map(|(x, y)| Point::new(*x, *y))
    }

    pub(crate) fn colors(&self) -> impl Iterator<Item = Rgb565> + '_ {
        self.pixels.values().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.pixels.len()
    }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.pixels.insert((point.x, point.y), color);
        }
        Ok(())
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size {
        Size::new(1024, 1024)
    }
}
