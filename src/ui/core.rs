// src/ui/core.rs
//! Core UI traits and types shared by the chart widgets

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Pointer events a host forwards to a widget
///
/// Hosts deliver these synchronously from their own event loop; a widget
/// finishes handling one before the next is delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a point, in the same coordinate space as the widget bounds
    Move(Point),
    /// Pointer left the widget
    Leave,
}

/// Result from handling a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventResult {
    /// The event changed the widget's visible state and it needs a redraw
    Handled,
    /// Nothing changed
    Unchanged,
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);
}

/// Trait for UI elements that respond to pointer movement
pub trait PointerTarget {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: Point) -> bool;

    /// Handle a pointer event
    fn handle_pointer(&mut self, event: PointerEvent) -> EventResult;
}

/// Combined trait for interactive drawable elements
pub trait Interactive: Drawable + PointerTarget {}

impl<T: Drawable + PointerTarget> Interactive for T {}
