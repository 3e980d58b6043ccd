// src/ui/mod.rs
//! UI building blocks
//!
//! - Core traits for drawable and pointer-driven elements
//! - Styling: chart colors and gradient helpers
//! - Components: the area graph widget

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::AreaGraph;
pub use self::core::{Drawable, EventResult, Interactive, PointerEvent, PointerTarget};
