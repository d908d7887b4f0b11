//! Ripple dot-grid overlay
//!
//! Fills its bounds with a regular lattice of dots whose radii pulse as
//! circular wavefronts travel outward from timed spawn points. Purely
//! decorative: it never captures events, so it can sit underneath any
//! content as an animated surface.
//!
//! # Design
//!
//! All animation state lives in a [`RippleField`] inside widget tree state,
//! ticked on every `RedrawRequested` with the frame's timestamp and dropped
//! on unmount. Dots are painted as fully-rounded quads, the same trick the
//! rest of the crate uses for circular geometry.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::time::Instant;
use iced::window;
use iced::{Color, Element, Event, Length, Point, Rectangle, Size, Theme};

use crate::animation::ripple::{self, RippleConfig, RippleField};
use crate::theme;

/// An animated grid of rippling dots.
///
/// Configuration is captured when the widget mounts; remounting resets the
/// clock and the active ripple set.
pub struct RippleGrid {
    config: RippleConfig,
    dot_color: Color,
    width: Length,
    height: Length,
}

impl RippleGrid {
    pub fn new() -> Self {
        Self {
            config: RippleConfig::default(),
            dot_color: theme::DOT_COLOR,
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    pub fn config(mut self, config: RippleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dot_color(mut self, color: impl Into<Color>) -> Self {
        self.dot_color = color.into();
        self
    }

    /// Lattice spacing between dot centres.
    pub fn dot_spacing(mut self, spacing: f32) -> Self {
        self.config.dot_spacing = spacing;
        self
    }

    /// Base dot radius while no wavefront is passing.
    pub fn dot_radius(mut self, radius: f32) -> Self {
        self.config.dot_radius = radius;
        self
    }

    /// Lifetime of one ripple's fade, in milliseconds.
    pub fn animation_duration_ms(mut self, duration_ms: u32) -> Self {
        self.config.animation_duration_ms = duration_ms;
        self
    }

    /// Minimum interval between ripple spawns. Zero spawns every frame.
    pub fn spawn_interval_ms(mut self, interval_ms: u32) -> Self {
        self.config.spawn_interval_ms = interval_ms;
        self
    }

    /// Spawn ripples at deterministic pseudo-random origins instead of the
    /// surface centre.
    pub fn random_center(mut self, random: bool) -> Self {
        self.config.random_center = random;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl Default for RippleGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-mount state: the ripple field plus the frame-clock epoch.
struct State {
    field: RippleField,
    epoch: Option<Instant>,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for RippleGrid
where
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            field: RippleField::new(self.config),
            epoch: None,
        })
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        layout::Node::new(limits.resolve(self.width, self.height, Size::ZERO))
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        // Decorative only: never capture, just keep the frame loop running.
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            let state = tree.state.downcast_mut::<State>();
            let epoch = *state.epoch.get_or_insert(*now);
            let now_ms = now.duration_since(epoch).as_millis() as u64;

            state.field.tick(now_ms);
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let size = bounds.size();
        let config = state.field.config();

        // One snapshot per frame; origins are not re-derived per dot.
        let waves = state.field.wavefronts(size);
        let max_distance = RippleField::max_ripple_distance(size);

        let rows = ripple::axis_positions(size.height, config.dot_spacing);
        for x in ripple::axis_positions(size.width, config.dot_spacing) {
            for &y in &rows {
                let radius = ripple::dot_radius(
                    config.dot_radius,
                    Point::new(x, y),
                    &waves,
                    max_distance,
                );

                if radius <= 0.0 {
                    continue;
                }

                renderer.fill_quad(
                    renderer::Quad {
                        bounds: Rectangle {
                            x: bounds.x + x - radius,
                            y: bounds.y + y - radius,
                            width: radius * 2.0,
                            height: radius * 2.0,
                        },
                        border: Border {
                            radius: radius.into(),
                            width: 0.0,
                            color: Color::TRANSPARENT,
                        },
                        ..renderer::Quad::default()
                    },
                    self.dot_color,
                );
            }
        }
    }
}

impl<'a, Message, Renderer> From<RippleGrid> for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(grid: RippleGrid) -> Element<'a, Message, Theme, Renderer> {
        Element::new(grid)
    }
}

/// Stack `content` over a ripple grid, turning the grid into an animated
/// background for an arbitrary surface.
pub fn ripple_background<'a, Message>(
    grid: RippleGrid,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    iced::widget::stack![Element::from(grid), content.into()].into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_configuration() {
        let grid = RippleGrid::new()
            .dot_spacing(32.0)
            .dot_radius(2.0)
            .animation_duration_ms(1500)
            .spawn_interval_ms(500)
            .random_center(false);

        assert_eq!(grid.config.dot_spacing, 32.0);
        assert_eq!(grid.config.dot_radius, 2.0);
        assert_eq!(grid.config.animation_duration_ms, 1500);
        assert_eq!(grid.config.spawn_interval_ms, 500);
        assert!(!grid.config.random_center);
    }

    #[test]
    fn defaults_match_documented_values() {
        let grid = RippleGrid::new();

        assert_eq!(grid.config, RippleConfig::default());
        assert_eq!(grid.dot_color, theme::DOT_COLOR);
    }
}
