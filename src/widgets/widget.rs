use std::time::Duration;

use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Scale the alpha channel, e.g. to fade a color by an animated opacity.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Pointer input, in screen coordinates.
///
/// Only a single pointer is tracked; multi-touch is folded onto it by the
/// platform before events reach widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer pressed (finger down)
    PointerDown { x: f32, y: f32 },
    /// Pointer moved
    PointerMove { x: f32, y: f32 },
    /// Pointer released (finger up)
    PointerUp { x: f32, y: f32 },
    /// The platform took the pointer away (left the surface, system gesture)
    PointerCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::PointerDown { x, y } | Event::PointerMove { x, y } | Event::PointerUp { x, y } => {
                Some((*x, *y))
            }
            Event::PointerCancel => None,
        }
    }

    /// Create a new event with translated coordinates
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        match *self {
            Event::PointerDown { x, y } => Event::PointerDown { x: x + dx, y: y + dy },
            Event::PointerMove { x, y } => Event::PointerMove { x: x + dx, y: y + dy },
            Event::PointerUp { x, y } => Event::PointerUp { x: x + dx, y: y + dy },
            Event::PointerCancel => Event::PointerCancel,
        }
    }
}

/// A retained widget driven by the frame host.
///
/// `Send` so a widget tree can be built on the caller's thread and handed to
/// the animation thread.
pub trait Widget: Send {
    /// Advance animations by `dt`.
    /// Returns true if anything moved this frame or is still animating, i.e.
    /// the widget needs repainting. Called once per frame before layout.
    fn advance_animations(&mut self, dt: Duration) -> bool {
        let _ = dt;
        false
    }

    fn layout(&mut self, constraints: Constraints) -> Size;

    /// Paint in local coordinates; the parent has already translated `ctx`.
    fn paint(&self, ctx: &mut PaintContext);

    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }
}

impl Widget for Box<dyn Widget> {
    fn advance_animations(&mut self, dt: Duration) -> bool {
        (**self).advance_animations(dt)
    }
    fn layout(&mut self, constraints: Constraints) -> Size {
        (**self).layout(constraints)
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
}
