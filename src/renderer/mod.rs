//! Headless paint target.
//!
//! Widgets paint into a [`PaintContext`], which records a flat list of
//! [`DrawCommand`]s in screen coordinates. A platform backend rasterizes the
//! list; tests inspect it directly.

mod commands;

pub use commands::DrawCommand;

use crate::widgets::{Color, Rect};

#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    /// Translation stack for composing parent→child offsets
    translation_stack: Vec<(f32, f32)>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            translation_stack: Vec::with_capacity(4),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
        self.translation_stack.clear();
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rounded_rect(rect, color, 0.0);
    }

    pub fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        let (dx, dy) = self.current_translation();
        self.commands
            .push(DrawCommand::rounded_rect(rect.offset(dx, dy), color, radius));
    }

    /// Push a translation, composed with the current one
    pub fn push_translation(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.current_translation();
        self.translation_stack.push((x + dx, y + dy));
    }

    /// Pop a translation from the stack
    pub fn pop_translation(&mut self) {
        self.translation_stack.pop();
    }

    /// Get the current composed translation
    pub fn current_translation(&self) -> (f32, f32) {
        self.translation_stack.last().copied().unwrap_or((0.0, 0.0))
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
