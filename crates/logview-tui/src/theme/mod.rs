//! Theme system for the TUI.
//!
//! - `palette` - Dark and light color sets
//! - `styles` - Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
