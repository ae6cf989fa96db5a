// src/models/mod.rs

//! Domain models for the supplier scout.
//!
//! This module contains all data structures used throughout the
//! application, organized by their primary purpose.

mod config;
mod element;
mod supplier;

// Re-export all public types
pub use config::{Config, FilterConfig, HttpConfig, OutputConfig};
pub use element::{Center, Element, ElementKind, ElementTags, OverpassResponse};
pub use supplier::Supplier;
