// src/ui/components/mod.rs
//! UI components library

pub mod area_graph;

pub use area_graph::AreaGraph;
