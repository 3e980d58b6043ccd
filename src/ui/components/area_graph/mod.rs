//! Area graph widget with a hover tooltip
//!
//! Renders an ordered series of named values as a filled area under a
//! straight-segment curve and shows a speech-bubble tooltip for the data
//! point nearest to the pointer.
//!
//! - Pure layout: [`Layout::compute`] maps a [`Series`] and a container size
//!   to pixel positions, so it can be tested without a display
//! - Padded value range: the lower bound sits 20% of the maximum below the
//!   minimum, keeping the curve off the floor
//! - Two synthetic anchor points stretch the fill flush to both edges
//! - Pluggable value formatting ([`ValueFormatter`]): raw numbers, currency
//!   presets, or a custom function
//!
//! # Examples
//!
//! ```ignore
//! use area_graph::prelude::*;
//!
//! let bounds = Rectangle::new(Point::new(10, 10), Size::new(300, 100));
//! let mut graph = AreaGraph::new(
//!     bounds,
//!     vec![DataPoint::new("Jan", 10.0), DataPoint::new("Feb", 20.0)],
//! )?
//! .with_formatter(ValueFormatter::currency("es-MX", "MXN")?);
//!
//! graph.handle_pointer(PointerEvent::Move(Point::new(160, 40)));
//! graph.draw(&mut display)?;
//! ```

use thiserror_no_std::Error;

mod component;
pub mod constants;
mod fill;
pub mod format;
pub mod layout;
pub mod series;
mod tooltip;

pub use component::AreaGraph;
pub use fill::AreaStyle;
pub use format::{
    Currency, CurrencyFormat, Locale, SymbolPlacement, ValueFormat, ValueFormatter, ValueLabel,
};
pub use layout::{Layout, RenderPoint, ValueRange};
pub use series::{DataPoint, Series};
pub use tooltip::{Hover, HoverCoordinate, TooltipText};

/// Error types for area graph operations
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// The input series has no points
    #[error("invalid input: empty series")]
    EmptySeries,

    /// A value in the input series is NaN or infinite
    #[error("invalid input: non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the offending point
        index: usize,
    },

    /// No currency preset exists for the locale/currency pair
    #[error("unsupported currency format")]
    UnsupportedCurrency,

    /// A configuration blob could not be decoded
    #[error("failed to decode graph configuration")]
    ConfigDecode,

    /// A configuration could not be encoded
    #[error("failed to encode graph configuration")]
    ConfigEncode,
}

/// Result type for area graph operations
pub type GraphResult<T> = Result<T, GraphError>;
