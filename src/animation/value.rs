use std::time::Duration;

use super::{SpringConfig, SpringState};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvanceResult {
    /// Value did not change (no spring running)
    NoChange,
    /// Value changed to a new value
    Changed(f32),
}

impl AdvanceResult {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// A scalar that is either held at a value or converging toward a target
/// by spring physics.
///
/// Assigning with [`set_immediate`](Self::set_immediate) cancels any running
/// spring. Calling [`spring_to`](Self::spring_to) while a spring is in flight
/// retargets it, carrying the current velocity over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    current: f32,
    spring: Option<(SpringState, SpringConfig)>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            spring: None,
        }
    }

    /// Current value
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Where the value is heading; the current value when nothing is running
    pub fn target(&self) -> f32 {
        self.spring
            .map(|(state, _)| state.target)
            .unwrap_or(self.current)
    }

    /// Check if a spring is still running
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.spring = None;
    }

    /// Start (or retarget) a spring toward `target`.
    ///
    /// Non-finite targets can never settle and are ignored.
    pub fn spring_to(&mut self, target: f32, config: SpringConfig) {
        if !target.is_finite() {
            log::warn!("Ignoring spring toward non-finite target {}", target);
            return;
        }
        match self.spring {
            Some((ref mut state, ref mut running)) => {
                state.retarget(target);
                *running = config;
            }
            None => {
                self.spring = Some((SpringState::new(self.current, target), config));
            }
        }
    }

    /// Advance the running spring by `dt`
    pub fn advance(&mut self, dt: Duration) -> AdvanceResult {
        let Some((mut state, config)) = self.spring else {
            return AdvanceResult::NoChange;
        };

        let previous = self.current;
        self.current = state.step(dt.as_secs_f32(), &config);
        self.spring = if state.is_settled(&config) {
            None
        } else {
            Some((state, config))
        };

        if self.current != previous {
            AdvanceResult::Changed(self.current)
        } else {
            AdvanceResult::NoChange
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
