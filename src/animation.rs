//! Frame-driven animation state
//!
//! Pure drivers for the widgets in this crate. Each driver is a plain state
//! machine advanced with millisecond timestamps from the host's frame clock,
//! so every timing property can be unit tested with a simulated clock.

pub mod progress;
pub mod ripple;

pub use progress::ProgressFill;
pub use ripple::{RippleConfig, RippleEvent, RippleField, Wavefront};
