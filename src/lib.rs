//! Area graph widget for embedded-graphics displays
//!
//! Renders an ordered series of named values as a gradient-filled area chart
//! and shows a speech-bubble tooltip for the point under the pointer. The
//! widget draws onto any `DrawTarget<Color = Rgb565>` and takes pointer input
//! as plain synchronous calls, so it fits whatever event loop the host runs.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

/// Re-exported so hosts draw with the same embedded-graphics version
pub use embedded_graphics;

pub use config::GraphConfig;
pub use ui::components::area_graph::{AreaGraph, DataPoint, GraphError, GraphResult};

/// Common imports for hosting an [`AreaGraph`]
pub mod prelude {
    pub use crate::config::GraphConfig;
    pub use crate::ui::components::area_graph::{
        AreaGraph, DataPoint, GraphError, GraphResult, Hover, HoverCoordinate, Series,
        ValueFormatter,
    };
    pub use crate::ui::core::{Drawable, EventResult, PointerEvent, PointerTarget};
    pub use embedded_graphics::pixelcolor::Rgb565;
    pub use embedded_graphics::prelude::{Point, Size};
    pub use embedded_graphics::primitives::Rectangle;
}
