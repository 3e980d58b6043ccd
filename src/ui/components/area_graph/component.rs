//! Area graph widget with Drawable and PointerTarget implementations
//!
//! The widget owns a validated series, the layout derived from it and the
//! current hover. Every input change recomputes the layout eagerly.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

extern crate alloc;
use alloc::vec::Vec;

use log::{debug, warn};

use crate::config::GraphConfig;
use crate::ui::core::{Drawable, EventResult, PointerEvent, PointerTarget};
use crate::ui::styling::COLOR_BACKGROUND;

use super::GraphResult;
use super::fill::{AreaStyle, draw_area_fill, draw_linear_stroke, screen_points};
use super::format::ValueFormatter;
use super::layout::{Layout, RenderPoint};
use super::series::{DataPoint, Series};
use super::tooltip::{Hover, HoverCoordinate, TooltipText, draw_tooltip, tooltip_text};

/// Area graph with a hover tooltip
///
/// Without a valid series (after a rejected [`AreaGraph::set_data`]) the
/// widget draws only its background.
pub struct AreaGraph {
    /// Bounding rectangle, doubles as the measured container size
    bounds: Rectangle,
    /// Validated input, `None` after invalid data was rejected
    series: Option<Series>,
    /// Pixel layout of `series` inside `bounds`
    layout: Option<Layout>,
    /// Data point under the pointer
    hover: Option<Hover>,
    /// Tooltip value formatting
    formatter: ValueFormatter,
    /// Curve and fill colors
    style: AreaStyle,
    /// Background color
    background_color: Rgb565,
    /// Dirty flag for rendering optimization
    dirty: bool,
}

impl AreaGraph {
    /// Create a graph from raw points
    ///
    /// Fails if the points are empty or contain a non-finite value; no widget
    /// is created in that case.
    pub fn new(bounds: Rectangle, data: impl Into<Vec<DataPoint>>) -> GraphResult<Self> {
        let series = Series::new(data)?;
        Ok(Self::from_series(bounds, series))
    }

    /// Create a graph from an already validated series
    pub fn from_series(bounds: Rectangle, series: Series) -> Self {
        let layout = Layout::compute(&series, bounds.size);
        if !layout.is_measured() {
            debug!("Area graph created before layout ({:?})", bounds.size);
        }

        Self {
            bounds,
            series: Some(series),
            layout: Some(layout),
            hover: None,
            formatter: ValueFormatter::default(),
            style: AreaStyle::default(),
            background_color: COLOR_BACKGROUND,
            dirty: true,
        }
    }

    /// Apply colors and value format from a configuration
    pub fn with_config(mut self, config: &GraphConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set tooltip value formatter
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set curve and fill style
    pub fn with_style(mut self, style: AreaStyle) -> Self {
        self.style = style;
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = color;
        self
    }

    /// Update colors and value format from a configuration
    pub fn set_config(&mut self, config: &GraphConfig) {
        self.formatter = config.formatter();
        self.style = config.area_style();
        self.background_color = config.background_color();
        self.dirty = true;
    }

    /// Update tooltip value formatter
    pub fn set_formatter(&mut self, formatter: ValueFormatter) {
        self.formatter = formatter;
        self.dirty = true;
    }

    /// Replace the data
    ///
    /// Invalid data is rejected and leaves the widget showing only its
    /// background until valid data arrives. The hover is cleared either way.
    pub fn set_data(&mut self, data: impl Into<Vec<DataPoint>>) -> GraphResult<()> {
        self.hover = None;
        self.dirty = true;

        match Series::new(data) {
            Ok(series) => {
                debug!("Area graph data replaced ({} points)", series.len());
                self.layout = Some(Layout::compute(&series, self.bounds.size));
                self.series = Some(series);
                Ok(())
            }
            Err(e) => {
                warn!("Area graph rejected data: {}", e);
                self.series = None;
                self.layout = None;
                Err(e)
            }
        }
    }

    /// Move or resize the widget
    ///
    /// The layout is recomputed for the new size. A hovered point stays
    /// hovered and its tooltip follows the point.
    pub fn resize(&mut self, bounds: Rectangle) {
        if bounds == self.bounds {
            return;
        }

        self.bounds = bounds;
        self.dirty = true;

        let Some(series) = &self.series else {
            return;
        };

        let layout = Layout::compute(series, bounds.size);
        debug!(
            "Area graph resized to {}x{} (measured: {})",
            bounds.size.width,
            bounds.size.height,
            layout.is_measured()
        );

        self.hover = self.hover.and_then(|hover| {
            if !layout.is_measured() {
                return None;
            }
            layout.data_point(hover.index).map(|point| Hover {
                index: hover.index,
                coordinate: point.into(),
            })
        });
        self.layout = Some(layout);
    }

    /// Current layout, `None` without valid data
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Current series, `None` without valid data
    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    /// Current hover, if any
    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }

    /// Current tooltip anchor, if any
    pub fn hover_coordinate(&self) -> Option<HoverCoordinate> {
        self.hover.map(|hover| hover.coordinate)
    }

    /// Text the tooltip shows for the current hover
    pub fn tooltip_text(&self) -> Option<TooltipText> {
        let hover = self.hover?;
        let point = self.series.as_ref()?.get(hover.index)?;
        Some(tooltip_text(&self.formatter, point))
    }

    /// Drop the hover; returns whether there was one
    pub fn clear_hover(&mut self) -> bool {
        if self.hover.take().is_some() {
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Data index under `point`, if any
    fn hit_test(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }
        let layout = self.layout.as_ref()?;
        layout.nearest_data_index((point.x - self.bounds.top_left.x) as f32)
    }

    /// Draw background
    fn draw_background<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.background_color))
            .draw(display)
    }

    /// Draw the gradient area and the curve
    fn draw_area<D: DrawTarget<Color = Rgb565>>(
        &self,
        layout: &Layout,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let points = screen_points(layout, &self.bounds);
        draw_area_fill(&points, &self.bounds, &self.style, display)?;
        draw_linear_stroke(&points, &self.style, display)
    }

    /// Draw the tooltip for the current hover
    fn draw_hover<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let (Some(hover), Some(text)) = (self.hover, self.tooltip_text()) else {
            return Ok(());
        };

        let anchor = RenderPoint::new(hover.coordinate.x, hover.coordinate.y)
            .to_screen(self.bounds.top_left);
        draw_tooltip(
            text.as_str(),
            anchor,
            &self.bounds,
            self.background_color,
            display,
        )
    }
}

impl Drawable for AreaGraph {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Layered rendering: background → area → curve → tooltip
        self.draw_background(display)?;

        let Some(layout) = self.layout.as_ref().filter(|layout| layout.is_measured()) else {
            return Ok(());
        };

        let mut clipped = display.clipped(&self.bounds);
        self.draw_area(layout, &mut clipped)?;
        self.draw_hover(&mut clipped)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl PointerTarget for AreaGraph {
    fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult {
        let next = match event {
            PointerEvent::Move(point) => self.hit_test(point).and_then(|index| {
                let layout = self.layout.as_ref()?;
                layout.data_point(index).map(|point| Hover {
                    index,
                    coordinate: point.into(),
                })
            }),
            PointerEvent::Leave => None,
        };

        if next == self.hover {
            return EventResult::Unchanged;
        }

        self.hover = next;
        self.dirty = true;
        EventResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDisplay;
    use crate::ui::components::area_graph::GraphError;
    use crate::ui::styling::WHITE;
    use alloc::vec;

    fn months() -> Vec<DataPoint> {
        vec![
            DataPoint::new("Jan", 10.0),
            DataPoint::new("Feb", 20.0),
            DataPoint::new("Mar", 15.0),
        ]
    }

    fn graph_at(x: i32, y: i32, width: u32, height: u32) -> AreaGraph {
        AreaGraph::new(
            Rectangle::new(Point::new(x, y), Size::new(width, height)),
            months(),
        )
        .unwrap()
    }

    #[test]
    fn builds_layout_on_construction() {
        let graph = graph_at(0, 0, 300, 100);
        let layout = graph.layout().unwrap();

        assert_eq!(layout.points().len(), 5);
        assert_eq!(layout.range().floor, 6.0);
        assert!(graph.hover().is_none());
        assert!(graph.is_dirty());
    }

    #[test]
    fn empty_data_fails_construction() {
        let bounds = Rectangle::new(Point::zero(), Size::new(300, 100));
        assert_eq!(
            AreaGraph::new(bounds, Vec::<DataPoint>::new()).err(),
            Some(GraphError::EmptySeries)
        );
        assert_eq!(
            AreaGraph::new(bounds, vec![DataPoint::new("x", f64::NAN)]).err(),
            Some(GraphError::NonFiniteValue { index: 0 })
        );
    }

    #[test]
    fn hovering_first_point_is_not_ignored() {
        let mut graph = graph_at(0, 0, 300, 100);

        let result = graph.handle_pointer(PointerEvent::Move(Point::new(70, 50)));

        assert_eq!(result, EventResult::Handled);
        let hover = graph.hover().unwrap();
        assert_eq!(hover.index, 0);
        assert_eq!(hover.coordinate.x, 75.0);
        assert_eq!(
            hover.coordinate,
            HoverCoordinate::from(graph.layout().unwrap().data_point(0).unwrap())
        );
    }

    #[test]
    fn moving_within_same_point_is_unchanged() {
        let mut graph = graph_at(0, 0, 300, 100);
        graph.handle_pointer(PointerEvent::Move(Point::new(150, 10)));
        graph.mark_clean();

        let result = graph.handle_pointer(PointerEvent::Move(Point::new(160, 90)));

        assert_eq!(result, EventResult::Unchanged);
        assert!(!graph.is_dirty());
        assert_eq!(graph.hover().unwrap().index, 1);
    }

    #[test]
    fn leave_always_clears() {
        let mut graph = graph_at(0, 0, 300, 100);
        graph.handle_pointer(PointerEvent::Move(Point::new(220, 10)));
        assert!(graph.hover().is_some());

        assert_eq!(graph.handle_pointer(PointerEvent::Leave), EventResult::Handled);
        assert!(graph.hover_coordinate().is_none());

        assert_eq!(graph.handle_pointer(PointerEvent::Leave), EventResult::Unchanged);
        assert!(graph.hover_coordinate().is_none());
    }

    #[test]
    fn pointer_outside_bounds_clears() {
        let mut graph = graph_at(10, 20, 300, 100);
        graph.handle_pointer(PointerEvent::Move(Point::new(160, 30)));
        assert_eq!(graph.hover().unwrap().index, 1);

        graph.handle_pointer(PointerEvent::Move(Point::new(5, 30)));
        assert!(graph.hover().is_none());
    }

    #[test]
    fn hit_test_is_relative_to_bounds() {
        let mut graph = graph_at(100, 50, 300, 100);

        graph.handle_pointer(PointerEvent::Move(Point::new(100 + 230, 60)));

        let hover = graph.hover().unwrap();
        assert_eq!(hover.index, 2);
        // Coordinates stay container-local
        assert_eq!(hover.coordinate.x, 225.0);
    }

    #[test]
    fn tooltip_text_uses_formatter() {
        let mut graph = graph_at(0, 0, 300, 100);
        graph.handle_pointer(PointerEvent::Move(Point::new(150, 50)));
        assert_eq!(graph.tooltip_text().unwrap(), "$20.00 / Feb");

        graph.set_formatter(ValueFormatter::Raw);
        assert_eq!(graph.tooltip_text().unwrap(), "20 / Feb");

        graph.clear_hover();
        assert!(graph.tooltip_text().is_none());
    }

    #[test]
    fn resize_keeps_hover_and_moves_anchor() {
        let mut graph = graph_at(0, 0, 300, 100);
        graph.handle_pointer(PointerEvent::Move(Point::new(150, 50)));

        graph.resize(Rectangle::new(Point::zero(), Size::new(600, 200)));

        let hover = graph.hover().unwrap();
        assert_eq!(hover.index, 1);
        assert_eq!(hover.coordinate, HoverCoordinate { x: 300.0, y: 0.0 });
        assert_eq!(graph.layout().unwrap().size(), Size::new(600, 200));
    }

    #[test]
    fn unmeasured_graph_heals_on_resize() {
        let mut graph = graph_at(0, 0, 0, 0);
        assert!(!graph.layout().unwrap().is_measured());

        graph.handle_pointer(PointerEvent::Move(Point::new(0, 0)));
        assert!(graph.hover().is_none());

        graph.resize(Rectangle::new(Point::zero(), Size::new(300, 100)));
        assert!(graph.layout().unwrap().is_measured());

        graph.handle_pointer(PointerEvent::Move(Point::new(10, 10)));
        assert_eq!(graph.hover().unwrap().index, 0);

        // Collapsing again drops the hover
        graph.resize(Rectangle::new(Point::zero(), Size::new(300, 0)));
        assert!(graph.hover().is_none());
    }

    #[test]
    fn invalid_data_leaves_placeholder() {
        let mut graph = graph_at(0, 0, 40, 30);
        graph.handle_pointer(PointerEvent::Move(Point::new(10, 10)));

        assert_eq!(graph.set_data(Vec::<DataPoint>::new()), Err(GraphError::EmptySeries));
        assert!(graph.series().is_none());
        assert!(graph.layout().is_none());
        assert!(graph.hover().is_none());

        graph.handle_pointer(PointerEvent::Move(Point::new(10, 10)));
        assert!(graph.hover().is_none());

        let mut display = RecordingDisplay::new();
        graph.draw(&mut display).unwrap();
        assert_eq!(display.len(), 40 * 30);
        assert!(display.colors().all(|c| c == COLOR_BACKGROUND));

        graph.set_data(months()).unwrap();
        assert_eq!(graph.layout().unwrap().points().len(), 5);
    }

    #[test]
    fn set_data_recomputes_and_clears_hover() {
        let mut graph = graph_at(0, 0, 300, 100);
        graph.handle_pointer(PointerEvent::Move(Point::new(150, 50)));

        graph.set_data(vec![DataPoint::new("X", 5.0)]).unwrap();

        assert!(graph.hover().is_none());
        let layout = graph.layout().unwrap();
        assert_eq!(layout.points().len(), 3);
        assert_eq!(layout.range().floor, 4.0);
    }

    #[test]
    fn drawing_stays_inside_bounds_without_hover() {
        let graph = graph_at(5, 5, 60, 40);
        let mut display = RecordingDisplay::new();

        graph.draw(&mut display).unwrap();

        let bounds = graph.bounds();
        assert!(display.points().all(|p| bounds.contains(p)));
        // Curve passes through Feb, the topmost point
        assert!((5..=7).any(|y| display.get(Point::new(5 + 30, y)) == Some(WHITE)));
    }

    #[test]
    fn drawing_with_hover_adds_tooltip() {
        let mut graph = graph_at(0, 0, 300, 100);
        let mut plain = RecordingDisplay::new();
        graph.draw(&mut plain).unwrap();

        graph.handle_pointer(PointerEvent::Move(Point::new(225, 50)));
        let mut hovered = RecordingDisplay::new();
        graph.draw(&mut hovered).unwrap();

        let differing = hovered
            .points()
            .filter(|p| hovered.get(*p) != plain.get(*p))
            .count();
        assert!(differing > 0);
        assert!(hovered.points().all(|p| graph.bounds().contains(p)));
    }

    #[test]
    fn config_sets_formatter_and_colors() {
        let config = GraphConfig {
            value_format: crate::ui::components::area_graph::ValueFormat::Raw,
            background: 0x000000,
            ..GraphConfig::default()
        };
        let mut graph = graph_at(0, 0, 300, 100).with_config(&config);
        graph.handle_pointer(PointerEvent::Move(Point::new(75, 50)));

        assert_eq!(graph.tooltip_text().unwrap(), "10 / Jan");

        let mut display = RecordingDisplay::new();
        graph.draw(&mut display).unwrap();
        assert_eq!(display.get(Point::new(299, 0)), Some(Rgb565::BLACK));
    }
}
