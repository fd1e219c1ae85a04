//! Centralized theme for the AgriHub TUI.
//!
//! - `palette` - Light and dark color sets
//! - `styles` - Semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
