//! Ripple field driver
//!
//! Owns the frame clock state for a ripple dot grid: the set of active
//! ripple events, the spawn schedule, and the per-frame dot-radius math.
//!
//! # Design
//!
//! A ripple never stores its origin. The spawn timestamp doubles as a PRNG
//! seed, so the identical centre is re-derived on every frame of the
//! ripple's life. This keeps `RippleEvent` to a single integer and makes
//! the whole field trivially replayable from a tick sequence in tests.

use iced::{Point, Size};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extra lifetime past the animation duration before an event is pruned,
/// so a ripple is never removed while still visually fading.
pub const CLEANUP_GRACE_MS: u32 = 1000;

/// The wavefront travels outward at this multiple of the fade rate.
const WAVE_SPEED: f32 = 1.5;

/// Width of the phase window during which a wavefront affects a dot.
const WAVE_WINDOW: f32 = 0.3;

/// Peak dot scale while a single wavefront passes through it.
const MAX_SCALE: f32 = 2.0;

/// Fraction of the larger surface dimension a wavefront travels in total.
const MAX_DISTANCE_FACTOR: f32 = 0.8;

/// Invalid ripple configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("animation duration must be positive")]
    ZeroDuration,
    #[error("dot spacing must be positive")]
    ZeroSpacing,
}

/// Configuration for a [`RippleField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RippleConfig {
    /// Lattice spacing between dot centres, in logical pixels.
    pub dot_spacing: f32,
    /// Base dot radius, before any wavefront contribution.
    pub dot_radius: f32,
    /// Lifetime of one ripple's fade, in milliseconds.
    pub animation_duration_ms: u32,
    /// Minimum interval between ripple spawns. Zero spawns every frame.
    pub spawn_interval_ms: u32,
    /// Derive a pseudo-random origin per ripple instead of the surface centre.
    pub random_center: bool,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            dot_spacing: 20.0,
            dot_radius: 1.0,
            animation_duration_ms: 3000,
            spawn_interval_ms: 2000,
            random_center: true,
        }
    }
}

impl RippleConfig {
    /// Strict validation, for callers that prefer rejection over clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !(self.dot_spacing > 0.0) {
            return Err(ConfigError::ZeroSpacing);
        }
        Ok(())
    }

    /// Clamp degenerate values so the render loop cannot divide by zero or
    /// spin on a zero-length lattice step.
    fn sanitized(mut self) -> Self {
        if self.animation_duration_ms == 0 {
            tracing::warn!("ripple duration of 0ms clamped to 1ms");
            self.animation_duration_ms = 1;
        }
        if !(self.dot_spacing > 0.0) {
            tracing::warn!(spacing = self.dot_spacing, "dot spacing clamped to 1.0");
            self.dot_spacing = 1.0;
        }
        if !(self.dot_radius >= 0.0) {
            self.dot_radius = 0.0;
        }
        self
    }
}

/// A single timestamped wave source.
///
/// `start_ms` is both the spawn time and the origin seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RippleEvent {
    pub start_ms: u64,
}

impl RippleEvent {
    /// Unclamped fade progress at `now_ms`; exceeds 1 during the grace
    /// period after the wave has finished travelling.
    pub fn progress(&self, now_ms: u64, duration_ms: u32) -> f32 {
        now_ms.saturating_sub(self.start_ms) as f32 / duration_ms as f32
    }

    /// Re-derive this ripple's origin for the given surface.
    ///
    /// Seeding Pcg32 with the spawn timestamp and drawing x then y yields
    /// the identical point on every frame without storing it.
    pub fn center(&self, size: Size, random_center: bool) -> Point {
        if random_center {
            let mut rng = Pcg32::seed_from_u64(self.start_ms);
            let x = rng.random::<f32>() * size.width;
            let y = rng.random::<f32>() * size.height;
            Point::new(x, y)
        } else {
            Point::new(size.width / 2.0, size.height / 2.0)
        }
    }
}

/// A per-frame snapshot of one active ripple: origin plus fade progress.
#[derive(Debug, Clone, Copy)]
pub struct Wavefront {
    pub center: Point,
    pub progress: f32,
}

/// The animation state behind a ripple dot grid.
///
/// Single-threaded by construction: the field lives in widget tree state
/// and is only touched from the frame-update step.
#[derive(Debug, Clone)]
pub struct RippleField {
    config: RippleConfig,
    ripples: Vec<RippleEvent>,
    last_spawn_ms: u64,
    now_ms: u64,
}

impl RippleField {
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config: config.sanitized(),
            ripples: Vec::new(),
            last_spawn_ms: 0,
            now_ms: 0,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Advance the field to `now_ms` (milliseconds since the animation
    /// loop started): spawn at most one new ripple, then prune expired ones.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;

        if now_ms.saturating_sub(self.last_spawn_ms) > u64::from(self.config.spawn_interval_ms) {
            tracing::trace!(start_ms = now_ms, "spawning ripple");
            self.ripples.push(RippleEvent { start_ms: now_ms });
            self.last_spawn_ms = now_ms;
        }

        let expiry = u64::from(self.config.animation_duration_ms) + u64::from(CLEANUP_GRACE_MS);
        self.ripples
            .retain(|ripple| now_ms.saturating_sub(ripple.start_ms) <= expiry);
    }

    /// Currently active events, in spawn order.
    pub fn ripples(&self) -> &[RippleEvent] {
        &self.ripples
    }

    /// Snapshot the active wavefronts for this frame.
    ///
    /// Origins are derived once here rather than once per lattice dot.
    pub fn wavefronts(&self, size: Size) -> Vec<Wavefront> {
        self.ripples
            .iter()
            .filter(|ripple| ripple.start_ms <= self.now_ms)
            .map(|ripple| Wavefront {
                center: ripple.center(size, self.config.random_center),
                progress: ripple.progress(self.now_ms, self.config.animation_duration_ms),
            })
            .collect()
    }

    /// How far a wavefront travels on this surface before fading out.
    pub fn max_ripple_distance(size: Size) -> f32 {
        size.width.max(size.height) * MAX_DISTANCE_FACTOR
    }

    /// Dot radius at `point` for the current frame.
    pub fn radius_at(&self, point: Point, size: Size) -> f32 {
        let waves = self.wavefronts(size);
        dot_radius(
            self.config.dot_radius,
            point,
            &waves,
            Self::max_ripple_distance(size),
        )
    }
}

/// Accumulate the radius for one dot from a frame's wavefront snapshot.
///
/// Each wavefront whose phase falls inside the passage window contributes a
/// sine bell on top of the base radius. Overlapping wavefronts add up
/// without a cap, so dense spawn settings can exceed the single-wave peak.
pub fn dot_radius(base: f32, point: Point, waves: &[Wavefront], max_distance: f32) -> f32 {
    if max_distance <= 0.0 {
        return base;
    }

    let mut radius = base;

    for wave in waves {
        let distance = point.distance(wave.center);
        let normalized = distance / max_distance;
        let phase = wave.progress * WAVE_SPEED - normalized;

        if phase > 0.0 && phase < WAVE_WINDOW {
            let wave_height = (phase / WAVE_WINDOW * std::f32::consts::PI).sin();
            radius += base * (MAX_SCALE - 1.0) * wave_height;
        }
    }

    radius
}

/// Lattice positions along one axis: step by `spacing` from 0 while short
/// of `extent`, then always close with the boundary coordinate itself.
///
/// The final step may be shorter than `spacing`; edge rows and columns are
/// deliberately denser than the interior.
pub fn axis_positions(extent: f32, spacing: f32) -> Vec<f32> {
    let mut positions = Vec::new();
    let mut pos = 0.0;

    while pos < extent {
        positions.push(pos);
        pos += spacing;
    }
    positions.push(extent);

    positions
}

/// The full dot lattice for a surface, row-major.
pub fn lattice(size: Size, spacing: f32) -> Vec<Point> {
    let columns = axis_positions(size.width, spacing);
    let rows = axis_positions(size.height, spacing);

    let mut points = Vec::with_capacity(columns.len() * rows.len());
    for &x in &columns {
        for &y in &rows {
            points.push(Point::new(x, y));
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 400.0,
        height: 300.0,
    };

    fn field(config: RippleConfig) -> RippleField {
        RippleField::new(config)
    }

    #[test]
    fn center_is_rederived_identically() {
        let event = RippleEvent { start_ms: 1600 };

        let first = event.center(SIZE, true);
        let at_100 = event.center(SIZE, true);
        let at_500 = event.center(SIZE, true);

        assert_eq!(first, at_100);
        assert_eq!(first, at_500);
        assert!((0.0..SIZE.width).contains(&first.x));
        assert!((0.0..SIZE.height).contains(&first.y));
    }

    #[test]
    fn distinct_seeds_give_distinct_centers() {
        let a = RippleEvent { start_ms: 1600 }.center(SIZE, true);
        let b = RippleEvent { start_ms: 3200 }.center(SIZE, true);

        assert_ne!(a, b);
    }

    #[test]
    fn fixed_center_is_surface_middle() {
        let event = RippleEvent { start_ms: 42 };

        assert_eq!(event.center(SIZE, false), Point::new(200.0, 150.0));
    }

    #[test]
    fn ripple_lives_through_grace_period_and_no_longer() {
        let config = RippleConfig {
            animation_duration_ms: 3000,
            spawn_interval_ms: 100_000,
            ..RippleConfig::default()
        };
        let mut field = field(config);

        // First tick past the interval spawns one ripple.
        field.tick(100_001);
        let start = 100_001u64;
        assert_eq!(field.ripples(), &[RippleEvent { start_ms: start }]);

        // Present across the whole lifetime plus grace.
        for offset in [0u64, 1, 1500, 3000, 3500, 4000] {
            field.tick(start + offset);
            assert_eq!(field.ripples().len(), 1, "absent at offset {offset}");
        }

        // Gone immediately after.
        field.tick(start + 4001);
        assert!(field.ripples().is_empty());
    }

    #[test]
    fn spawn_count_over_simulated_clock() {
        let config = RippleConfig {
            spawn_interval_ms: 1500,
            // Long enough that nothing is pruned during the run.
            animation_duration_ms: 60_000,
            ..RippleConfig::default()
        };
        let mut field = field(config);

        let mut spawned = Vec::new();
        for t in (0..=10_000u64).step_by(100) {
            field.tick(t);
            for ripple in field.ripples() {
                if !spawned.contains(&ripple.start_ms) {
                    spawned.push(ripple.start_ms);
                }
            }
        }

        // last_spawn starts at 0, so the first spawn lands at 1600, then
        // every 1600ms after: 1600, 3200, 4800, 6400, 8000, 9600.
        assert_eq!(spawned, vec![1600, 3200, 4800, 6400, 8000, 9600]);
        assert!([6usize, 7].contains(&spawned.len()));
    }

    #[test]
    fn zero_interval_spawns_every_frame() {
        let config = RippleConfig {
            spawn_interval_ms: 0,
            ..RippleConfig::default()
        };
        let mut field = field(config);

        for t in 1..=5u64 {
            field.tick(t * 16);
        }

        assert_eq!(field.ripples().len(), 5);
    }

    #[test]
    fn at_most_one_spawn_per_tick() {
        let config = RippleConfig {
            spawn_interval_ms: 10,
            ..RippleConfig::default()
        };
        let mut field = field(config);

        // A huge clock jump still produces a single event.
        field.tick(50_000);
        assert_eq!(field.ripples().len(), 1);
    }

    #[test]
    fn quiescent_dot_has_exactly_base_radius() {
        let config = RippleConfig {
            dot_radius: 2.5,
            spawn_interval_ms: 100_000,
            ..RippleConfig::default()
        };
        let mut field = field(config);
        field.tick(16);

        assert!(field.ripples().is_empty());
        assert_eq!(field.radius_at(Point::new(50.0, 50.0), SIZE), 2.5);
    }

    #[test]
    fn single_wavefront_stays_within_peak_scale() {
        let base = 1.0f32;
        let config = RippleConfig {
            dot_radius: base,
            animation_duration_ms: 3000,
            spawn_interval_ms: 100_000,
            random_center: false,
            ..RippleConfig::default()
        };
        let mut field = field(config);
        field.tick(100_001);
        let start = 100_001u64;

        // Sweep the wave across its lifetime, sampling the whole lattice.
        for offset in (0..4000u64).step_by(50) {
            field.tick(start + offset);
            for point in lattice(SIZE, 20.0) {
                let radius = field.radius_at(point, SIZE);
                assert!(
                    radius >= base && radius <= base * 2.0,
                    "radius {radius} out of range at {point:?}, offset {offset}"
                );
            }
        }
    }

    #[test]
    fn overlapping_wavefronts_accumulate_uncapped() {
        // Two waves positioned so both phases peak on the same dot.
        let center = Point::new(100.0, 100.0);
        let waves = [
            Wavefront {
                center,
                progress: 0.1,
            },
            Wavefront {
                center,
                progress: 0.1,
            },
        ];
        let max_distance = 160.0;

        // phase = 0.15 at the origin dot: exact bell peak for both.
        let radius = dot_radius(1.0, center, &waves, max_distance);
        assert!(radius > 2.0, "expected additive growth, got {radius}");
    }

    #[test]
    fn degenerate_surface_yields_finite_base_radius() {
        let mut field = field(RippleConfig::default());
        field.tick(2001);

        let radius = field.radius_at(Point::ORIGIN, Size::ZERO);
        assert!(radius.is_finite());
        assert_eq!(radius, field.config().dot_radius);
    }

    #[test]
    fn lattice_covers_surface_inclusive_of_boundary() {
        let points = lattice(Size::new(100.0, 100.0), 50.0);

        let expected: Vec<Point> = [0.0, 50.0, 100.0]
            .iter()
            .flat_map(|&x| [0.0, 50.0, 100.0].map(|y| Point::new(x, y)))
            .collect();

        assert_eq!(points.len(), 9);
        assert_eq!(points, expected);
    }

    #[test]
    fn short_final_step_still_reaches_boundary() {
        let positions = axis_positions(120.0, 50.0);

        assert_eq!(positions, vec![0.0, 50.0, 100.0, 120.0]);
    }

    #[test]
    fn config_clamps_degenerate_values() {
        let config = RippleConfig {
            animation_duration_ms: 0,
            dot_spacing: 0.0,
            ..RippleConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));

        let field = RippleField::new(config);
        assert_eq!(field.config().animation_duration_ms, 1);
        assert_eq!(field.config().dot_spacing, 1.0);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = RippleConfig {
            dot_spacing: 24.0,
            random_center: false,
            ..RippleConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: RippleConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
