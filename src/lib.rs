//! A draggable bottom sheet overlay.
//!
//! The sheet follows a single finger vertically, springs to closed or fully
//! open on release, and fades a backdrop in while open. Widgets paint into a
//! recorded display list, so everything here runs headless; a [`Host`] drives
//! a widget on its own animation thread at a fixed frame rate.

pub mod animation;
pub mod error;
pub mod gesture;
pub mod host;
pub mod layout;
pub mod platform;
pub mod reactive;
pub mod renderer;
pub mod widgets;

pub use error::HostError;
pub use host::{Frame, Host, HostConfig};

pub mod prelude {
    pub use crate::animation::{interpolate, AnimatedValue, Extrapolation, SpringConfig};
    pub use crate::error::HostError;
    pub use crate::gesture::{register_pan_gesture, PanEvent, PanGesture};
    pub use crate::host::{Frame, Host, HostConfig};
    pub use crate::layout::{Constraints, Size};
    pub use crate::platform::{screen_metrics, ScreenMetrics};
    pub use crate::reactive::SharedValue;
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::widgets::{
        block, bottom_sheet, derive_style, max_open_offset, snap_target, Block, BottomSheet,
        Color, Event, EventResponse, Rect, SheetConfig, SheetHandle, SheetStyle, Widget,
    };
}
