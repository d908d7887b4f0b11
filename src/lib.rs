//! dotwave - decorative animation widgets for iced
//!
//! Two self-contained, frame-driven widgets:
//!
//! - [`ProgressFillBar`] / [`progress_fill_button`]: a clickable bar whose
//!   background fills left-to-right over a fixed duration, clipped to a
//!   pill (or other) shape, publishing a completion message exactly once.
//! - [`RippleGrid`] / [`ripple_background`]: a lattice of dots whose radii
//!   pulse as circular wavefronts ripple outward from timed, seed-derived
//!   spawn points.
//!
//! Both widgets drive themselves from iced's redraw clock: they tick their
//! animation state on every `RedrawRequested` and keep requesting frames
//! while animating, so no application-level subscription is needed. All
//! state lives in the widget tree and is discarded on unmount.
//!
//! ```no_run
//! use dotwave::{ProgressFillBar, RippleGrid, progress_fill_button, ripple_background};
//!
//! #[derive(Clone)]
//! enum Message {
//!     Pressed,
//!     Finished,
//! }
//!
//! let button = progress_fill_button(
//!     "Hold tight",
//!     ProgressFillBar::new()
//!         .duration_ms(5000)
//!         .on_press(Message::Pressed)
//!         .on_complete(Message::Finished),
//! );
//!
//! let screen = ripple_background(RippleGrid::new().dot_spacing(24.0), button);
//! ```

pub mod animation;
pub mod effects;
pub mod theme;
pub mod widgets;

pub use animation::{ProgressFill, RippleConfig, RippleField};
pub use effects::{RippleGrid, ripple_background};
pub use widgets::{FillShape, ProgressFillBar, progress_fill_button};
