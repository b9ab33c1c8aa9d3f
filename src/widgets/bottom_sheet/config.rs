use crate::animation::SpringConfig;
use crate::platform::{screen_metrics, ScreenMetrics};
use crate::widgets::Color;

/// Configuration for a [`BottomSheet`](super::BottomSheet)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Offset at mount (0 = closed)
    pub snap: f32,
    /// Screen the sheet covers
    pub metrics: ScreenMetrics,
    /// Spring used by `scroll_to`
    pub spring: SpringConfig,
    /// Spring used to fade the backdrop
    pub backdrop_spring: SpringConfig,
    pub panel_color: Color,
    pub handle_color: Color,
    /// Backdrop color at full opacity
    pub backdrop_color: Color,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            snap: 0.0,
            metrics: screen_metrics(),
            spring: SpringConfig::SHEET,
            backdrop_spring: SpringConfig::DEFAULT,
            panel_color: Color::WHITE,
            handle_color: Color::GRAY,
            backdrop_color: Color::rgba(0.0, 0.0, 0.0, 0.4),
        }
    }
}

impl SheetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit screen metrics instead of the process-wide ones
    pub fn with_metrics(metrics: ScreenMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    pub fn snap(mut self, snap: f32) -> Self {
        self.snap = snap;
        self
    }

    pub fn metrics(mut self, metrics: ScreenMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn backdrop_spring(mut self, spring: SpringConfig) -> Self {
        self.backdrop_spring = spring;
        self
    }

    pub fn panel_color(mut self, color: Color) -> Self {
        self.panel_color = color;
        self
    }

    pub fn handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }

    pub fn backdrop_color(mut self, color: Color) -> Self {
        self.backdrop_color = color;
        self
    }
}
