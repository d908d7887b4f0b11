//! Default palette for the dotwave widgets
//!
//! Consumers can override every colour through the widget builders; these
//! are the out-of-the-box values.

use iced::{Color, color};

/// Default ripple dot colour: black at 8% opacity, faint enough to sit
/// behind content.
pub const DOT_COLOR: Color = color!(0x000000, 0.08);

/// Default track colour behind an unfilled progress bar.
pub const TRACK_COLOR: Color = color!(0x333333);

/// Default progress fill colour.
pub const FILL_COLOR: Color = color!(0xcc3380);

/// Default label colour for the progress button.
pub const LABEL_COLOR: Color = color!(0xffffff);
