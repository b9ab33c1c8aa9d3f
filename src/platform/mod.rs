//! Screen metrics.
//!
//! The viewport size is read once per process and never refreshed; the sheet
//! does not follow orientation or size changes at runtime.

use std::sync::OnceLock;

use crate::layout::Size;

/// Environment variable overriding the detected screen width
pub const SCREEN_WIDTH_VAR: &str = "DRAG_SHEET_SCREEN_WIDTH";
/// Environment variable overriding the detected screen height
pub const SCREEN_HEIGHT_VAR: &str = "DRAG_SHEET_SCREEN_HEIGHT";

static SCREEN_METRICS: OnceLock<ScreenMetrics> = OnceLock::new();

/// Viewport size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl ScreenMetrics {
    /// Used when nothing else is known about the display
    pub const FALLBACK: Self = Self {
        width: 390.0,
        height: 844.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Read the metrics from the environment, falling back per axis to
    /// [`FALLBACK`](Self::FALLBACK) when a variable is unset or unusable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str, fallback: f32| -> f32 {
            match lookup(name).map(|raw| raw.trim().parse::<f32>()) {
                Some(Ok(value)) if value.is_finite() && value > 0.0 => value,
                Some(_) => {
                    log::warn!("Ignoring invalid {}, using {}", name, fallback);
                    fallback
                }
                None => fallback,
            }
        };

        Self {
            width: read(SCREEN_WIDTH_VAR, Self::FALLBACK.width),
            height: read(SCREEN_HEIGHT_VAR, Self::FALLBACK.height),
        }
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        screen_metrics()
    }
}

/// The process-wide screen metrics, read on first use.
pub fn screen_metrics() -> ScreenMetrics {
    *SCREEN_METRICS.get_or_init(|| {
        let metrics = ScreenMetrics::from_env();
        log::info!("Screen metrics: {}x{}", metrics.width, metrics.height);
        metrics
    })
}
