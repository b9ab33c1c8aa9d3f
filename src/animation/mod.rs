//! Spring physics and interpolation.
//!
//! Values move in two ways: directly (a finger dragging the sheet sets the
//! offset 1:1) or by spring toward a target (the sheet snapping open or
//! closed). [`AnimatedValue`] covers both; [`interpolate`] derives style
//! values such as corner radius from the current value each frame.

mod interpolate;
mod spring;
mod value;

pub use interpolate::{interpolate, Extrapolation};
pub use spring::{SpringConfig, SpringState};
pub use value::{AdvanceResult, AnimatedValue};
