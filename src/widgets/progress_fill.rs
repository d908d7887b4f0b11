//! Progress-fill button widget
//!
//! A clickable bar whose background fills left-to-right over a fixed
//! duration, clipped to a configurable shape. The fill starts on the first
//! rendered frame after mount and publishes a completion message exactly
//! once when it reaches the far edge.
//!
//! # Design
//!
//! The timing lives in [`ProgressFill`](crate::animation::ProgressFill),
//! stored in widget tree state so it resets on remount and is dropped on
//! unmount (a pending completion message is then never published). The
//! widget only adapts the driver to iced's redraw cycle and paints it.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::time::Instant;
use iced::touch;
use iced::window;
use iced::{Color, Element, Event, Length, Pixels, Rectangle, Size, Theme};

use crate::animation::ProgressFill;
use crate::theme;

/// Shape descriptor for the bar outline and the fill clip boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FillShape {
    /// Fully rounded ends, radius half the bar height.
    #[default]
    Pill,
    /// Rounded corners with a fixed radius.
    Rounded(f32),
    /// Square corners.
    Rect,
}

impl FillShape {
    /// Corner radius of the clip boundary for a bar of the given height.
    pub fn corner_radius(&self, height: f32) -> f32 {
        match self {
            FillShape::Pill => height / 2.0,
            FillShape::Rounded(radius) => radius.min(height / 2.0),
            FillShape::Rect => 0.0,
        }
    }
}

/// A bar that fills from left to right while counting down to completion.
pub struct ProgressFillBar<'a, Message> {
    duration_ms: u32,
    shape: FillShape,
    on_press: Option<Message>,
    on_complete: Option<Message>,
    width: Length,
    height: f32,
    style: Box<dyn Fn(&Theme) -> Style + 'a>,
}

impl<'a, Message> ProgressFillBar<'a, Message>
where
    Message: Clone,
{
    pub const DEFAULT_HEIGHT: f32 = 48.0;
    pub const DEFAULT_DURATION_MS: u32 = 5000;

    pub fn new() -> Self {
        Self {
            duration_ms: Self::DEFAULT_DURATION_MS,
            shape: FillShape::default(),
            on_press: None,
            on_complete: None,
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
            style: Box::new(default_style),
        }
    }

    /// Duration of the fill animation in milliseconds. Zero completes on
    /// the first frame.
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn shape(mut self, shape: FillShape) -> Self {
        self.shape = shape;
        self
    }

    /// Message published when the bar is clicked, at any fill level.
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Message published exactly once, when the fill reaches the far edge.
    pub fn on_complete(mut self, message: Message) -> Self {
        self.on_complete = Some(message);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }
}

impl<Message> Default for ProgressFillBar<'_, Message>
where
    Message: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Per-mount animation state. Dropped on unmount, recreated on remount.
struct State {
    fill: ProgressFill,
    started_at: Option<Instant>,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for ProgressFillBar<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            fill: ProgressFill::new(self.duration_ms),
            started_at: None,
        })
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if cursor.is_over(bounds) {
                    if let Some(on_press) = self.on_press.clone() {
                        shell.publish(on_press);
                    }
                    shell.capture_event();
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                // The first rendered frame starts the clock.
                let started_at = *state.started_at.get_or_insert(*now);
                let elapsed_ms = now.duration_since(started_at).as_millis() as u64;

                if state.fill.tick(elapsed_ms) {
                    tracing::debug!(elapsed_ms, "progress fill complete");
                    if let Some(on_complete) = self.on_complete.clone() {
                        shell.publish(on_complete);
                    }
                }

                if !state.fill.is_complete() {
                    shell.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let style = (self.style)(theme);
        let radius = self.shape.corner_radius(bounds.height);

        let outline = renderer::Quad {
            bounds,
            border: Border {
                radius: radius.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..renderer::Quad::default()
        };

        // Track
        renderer.fill_quad(outline, style.track);

        // Fill: a solid rectangle of fill_width clipped to the shape, drawn
        // as the full shaped quad inside a rectangular layer clip.
        let fill_width = state.fill.fill_width(bounds.width);
        if fill_width > 0.0 {
            let clip = Rectangle {
                width: fill_width,
                ..bounds
            };
            renderer.with_layer(clip, |renderer| {
                renderer.fill_quad(outline, style.fill);
            });
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.on_press.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<ProgressFillBar<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(bar: ProgressFillBar<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(bar)
    }
}

/// Colours for the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background behind the unfilled portion.
    pub track: Color,
    /// The advancing fill.
    pub fill: Color,
}

fn default_style(_theme: &Theme) -> Style {
    Style {
        track: theme::TRACK_COLOR,
        fill: theme::FILL_COLOR,
    }
}

/// A progress-fill bar with a centred text label stacked on top.
///
/// The label does not intercept clicks; presses anywhere on the button
/// reach the bar underneath.
pub fn progress_fill_button<'a, Message>(
    label: impl iced::widget::text::IntoFragment<'a>,
    bar: ProgressFillBar<'a, Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let label = iced::widget::container(
        iced::widget::text(label).color(theme::LABEL_COLOR),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    iced::widget::stack![Element::from(bar), label].into()
}
