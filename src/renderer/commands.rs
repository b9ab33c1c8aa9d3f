//! Draw command definitions for the recorded display list.

use crate::widgets::{Color, Rect};

/// A single draw operation in screen coordinates.
///
/// Translations pushed on the [`PaintContext`](super::PaintContext) are
/// already applied when a command is recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Draw a rounded rectangle.
    RoundedRect {
        /// Rectangle bounds
        rect: Rect,
        /// Fill color
        color: Color,
        /// Corner radius in logical pixels
        radius: f32,
    },
}

impl DrawCommand {
    /// Create a simple rounded rectangle.
    pub fn rounded_rect(rect: Rect, color: Color, radius: f32) -> Self {
        Self::RoundedRect {
            rect,
            color,
            radius,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::RoundedRect { rect, .. } => *rect,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::RoundedRect { color, .. } => *color,
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            DrawCommand::RoundedRect { radius, .. } => *radius,
        }
    }
}
