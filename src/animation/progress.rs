//! Linear progress-fill driver
//!
//! A single scalar animation from 0 to 1 over a fixed duration, advanced by
//! the host's frame clock. The driver itself knows nothing about rendering;
//! [`crate::widgets::progress_fill`] adapts it to iced's redraw cycle.

/// Drives a scalar `progress` in `[0, 1]` linearly over `duration_ms`.
///
/// Progress is monotonically non-decreasing for one run: a clock that
/// momentarily reports an earlier timestamp never moves the fill backwards.
/// Completion is signalled exactly once, on the tick that first reaches 1.
#[derive(Debug, Clone)]
pub struct ProgressFill {
    duration_ms: u32,
    progress: f32,
    fired: bool,
}

impl ProgressFill {
    /// Create a driver for the given duration in milliseconds.
    ///
    /// A zero duration means immediate completion: progress jumps to 1 and
    /// the completion signal fires on the first tick.
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            progress: 0.0,
            fired: false,
        }
    }

    /// Sample the linear interpolation at `elapsed_ms` without advancing.
    pub fn progress_at(&self, elapsed_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }

        (elapsed_ms as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Advance to `elapsed_ms` (milliseconds since the animation started).
    ///
    /// Returns `true` exactly once: on the tick where progress first
    /// reaches 1. Every later tick returns `false` and holds at 1.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        self.progress = self.progress.max(self.progress_at(elapsed_ms));

        if self.progress >= 1.0 && !self.fired {
            self.fired = true;
            return true;
        }

        false
    }

    /// Current progress value (0.0 - 1.0).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the animation has reached 1 and signalled completion.
    pub fn is_complete(&self) -> bool {
        self.fired
    }

    /// Width of the revealed fill for a surface of `surface_width`.
    pub fn fill_width(&self, surface_width: f32) -> f32 {
        surface_width * self.progress
    }
}
