//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions, colors and system bar derivation
//! - Reusable widgets
//! - Screen renderers and the main render entry point

pub mod theme;
pub mod render;
pub mod widgets;

pub use theme::Theme;
pub use render::render;
