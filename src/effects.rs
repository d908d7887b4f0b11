//! Decorative surface effects
//!
//! Non-interactive overlays layered behind or over other widgets.

pub mod ripple_grid;

pub use ripple_grid::{RippleGrid, ripple_background};
