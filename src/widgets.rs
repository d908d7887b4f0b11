//! Interactive widgets
//!
//! Widgets that implement iced's `Widget` trait directly and own their
//! animation state in the widget tree.

pub mod progress_fill;

pub use progress_fill::{FillShape, ProgressFillBar, progress_fill_button};
