//! Draggable bottom sheet.
//!
//! The sheet is a full-screen panel parked just below the visible area. Its
//! vertical offset is 0 when closed and grows negative as it opens, up to
//! [`max_open_offset`]. A finger drags the offset 1:1; on release it springs
//! to closed or fully open depending on which half of the screen it was let
//! go in. A translucent backdrop fades in while the sheet is commanded open.
//!
//! The owner controls the sheet through a [`SheetHandle`], which stays valid
//! for the lifetime of the sheet and can be used from any thread.
//!
//! # Example
//!
//! ```
//! use drag_sheet::prelude::*;
//!
//! let metrics = ScreenMetrics::new(400.0, 800.0);
//! let sheet = bottom_sheet(SheetConfig::with_metrics(metrics))
//!     .child(block(120.0).color(Color::from_hex(0xEEEEEE)));
//! let handle = sheet.handle();
//!
//! handle.scroll_to(max_open_offset(&metrics));
//! assert!(handle.is_active());
//! ```

mod config;
mod style;

pub use config::SheetConfig;
pub use style::{
    derive_style, drag_offset, max_open_offset, midpoint, snap_target, SheetStyle, CORNER_RADIUS,
    CORNER_RAMP, OPEN_INSET,
};

use std::time::Duration;

use crate::animation::{AnimatedValue, SpringConfig};
use crate::gesture::PanGesture;
use crate::layout::{Constraints, Size};
use crate::reactive::SharedValue;
use crate::renderer::PaintContext;
use crate::widgets::{Event, EventResponse, Rect, Widget};

/// Drag handle bar dimensions
pub const HANDLE_WIDTH: f32 = 80.0;
pub const HANDLE_HEIGHT: f32 = 5.0;
pub const HANDLE_RADIUS: f32 = 4.0;
/// Space above and below the handle bar
pub const HANDLE_MARGIN: f32 = 7.0;
/// Height of the strip holding the handle; content starts below it
pub const HEADER_HEIGHT: f32 = HANDLE_MARGIN * 2.0 + HANDLE_HEIGHT;

/// Backdrop opacity below which nothing is painted
const BACKDROP_EPSILON: f32 = 0.001;

/// Offset captured when a drag begins
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DragContext {
    y: f32,
}

/// Offset and active flag, always written together under one lock
#[derive(Debug, Clone, Copy, PartialEq)]
struct SheetState {
    offset: AnimatedValue,
    active: bool,
}

/// Remote control for a [`BottomSheet`].
///
/// Cloning yields another handle to the same sheet.
#[derive(Clone, Debug)]
pub struct SheetHandle {
    state: SharedValue<SheetState>,
    spring: SpringConfig,
}

impl SheetHandle {
    /// Spring the panel toward `destination`.
    ///
    /// The sheet counts as active whenever the destination is not 0, from the
    /// moment of the call. A call while a spring is in flight retargets it.
    /// Any value is accepted; 0 and the open offset are the meaningful ones.
    pub fn scroll_to(&self, destination: f32) {
        let active = destination != 0.0;
        log::debug!("Sheet scrolling to {} (active: {})", destination, active);
        self.state.update(|state| {
            state.active = active;
            state.offset.spring_to(destination, self.spring);
        });
    }

    pub fn is_active(&self) -> bool {
        self.state.with(|state| state.active)
    }

    fn offset(&self) -> f32 {
        self.state.with(|state| state.offset.current())
    }
}

/// A bottom sheet with a backdrop, a drag handle and stacked content.
pub struct BottomSheet {
    config: SheetConfig,
    handle: SheetHandle,
    gesture: PanGesture,
    backdrop: AnimatedValue,
    children: Vec<Box<dyn Widget>>,
    child_sizes: Vec<Size>,
}

pub fn bottom_sheet(config: SheetConfig) -> BottomSheet {
    BottomSheet::new(config)
}

impl BottomSheet {
    pub fn new(config: SheetConfig) -> Self {
        let handle = SheetHandle {
            state: SharedValue::new(SheetState {
                offset: AnimatedValue::new(config.snap),
                active: false,
            }),
            spring: config.spring,
        };
        let gesture = Self::pan_gesture(&handle, config);

        Self {
            config,
            handle,
            gesture,
            backdrop: AnimatedValue::new(0.0),
            children: Vec::new(),
            child_sizes: Vec::new(),
        }
    }

    /// Wire the pan callbacks to the shared sheet state.
    fn pan_gesture(handle: &SheetHandle, config: SheetConfig) -> PanGesture {
        let metrics = config.metrics;
        let ctx = SharedValue::new(DragContext::default());

        let start_handle = handle.clone();
        let start_ctx = ctx.clone();
        let update_state = handle.state.clone();
        let end_handle = handle.clone();

        PanGesture::new()
            .on_start(move |_| {
                start_ctx.set(DragContext {
                    y: start_handle.offset(),
                });
            })
            .on_update(move |event| {
                let y = drag_offset(ctx.get().y, event.translation_y, &metrics);
                log::trace!("Sheet dragged to {}", y);
                update_state.update(|state| state.offset.set_immediate(y));
            })
            .on_end(move |_| {
                let released = end_handle.offset();
                match snap_target(released, &metrics) {
                    Some(target) => end_handle.scroll_to(target),
                    None => log::debug!("Sheet released at midpoint {}, not snapping", released),
                }
            })
    }

    /// Add a content widget below the previous ones
    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Handle for the owner to open, close and query the sheet
    pub fn handle(&self) -> SheetHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Style for the current animated state
    pub fn style(&self) -> SheetStyle {
        let (offset, active) = self
            .handle
            .state
            .with(|state| (state.offset.current(), state.active));
        derive_style(offset, active, &self.config.metrics)
    }

    /// Current backdrop opacity (may overshoot [0, 1] mid-spring)
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop.current()
    }

    /// Whether a finger is currently dragging the sheet
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Panel bounds in screen coordinates at the current offset
    pub fn panel_rect(&self) -> Rect {
        let metrics = self.config.metrics;
        Rect::new(0.0, metrics.height, metrics.width, metrics.height)
            .offset(0.0, self.handle.offset())
    }

    /// Content origins relative to the panel's top-left corner
    fn child_origins(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        let width = self.config.metrics.width;
        self.child_sizes.iter().scan(HEADER_HEIGHT, move |y, size| {
            let origin = ((width - size.width) / 2.0, *y);
            *y += size.height;
            Some(origin)
        })
    }
}

impl Widget for BottomSheet {
    fn advance_animations(&mut self, dt: Duration) -> bool {
        let (offset_changed, offset_animating) = self.handle.state.update(|state| {
            let changed = state.offset.advance(dt).is_changed();
            (changed, state.offset.is_animating())
        });

        let backdrop_target = self.style().backdrop_target;
        if self.backdrop.target() != backdrop_target {
            self.backdrop
                .spring_to(backdrop_target, self.config.backdrop_spring);
        }
        let backdrop_changed = self.backdrop.advance(dt).is_changed();

        let mut needs_frame = offset_changed
            || offset_animating
            || backdrop_changed
            || self.backdrop.is_animating();
        for child in &mut self.children {
            needs_frame |= child.advance_animations(dt);
        }
        needs_frame
    }

    fn layout(&mut self, _constraints: Constraints) -> Size {
        let metrics = self.config.metrics;
        let content = Constraints::loose(Size::new(
            metrics.width,
            (metrics.height - HEADER_HEIGHT).max(0.0),
        ));

        self.child_sizes = self
            .children
            .iter_mut()
            .map(|child| child.layout(content))
            .collect();

        // The sheet always covers the whole screen, whatever the parent offers
        metrics.size()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let metrics = self.config.metrics;
        let style = self.style();

        let opacity = self.backdrop.current();
        if opacity > BACKDROP_EPSILON {
            ctx.draw_rect(
                Rect::from_size(metrics.size()),
                self.config.backdrop_color.with_opacity(opacity),
            );
        }

        ctx.push_translation(0.0, metrics.height + style.translate_y);

        ctx.draw_rounded_rect(
            Rect::from_size(metrics.size()),
            self.config.panel_color,
            style.corner_radius,
        );
        ctx.draw_rounded_rect(
            Rect::new(
                (metrics.width - HANDLE_WIDTH) / 2.0,
                HANDLE_MARGIN,
                HANDLE_WIDTH,
                HANDLE_HEIGHT,
            ),
            self.config.handle_color,
            HANDLE_RADIUS,
        );

        for (child, (x, y)) in self.children.iter().zip(self.child_origins()) {
            ctx.push_translation(x, y);
            child.paint(ctx);
            ctx.pop_translation();
        }

        ctx.pop_translation();
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        // The backdrop never takes input; only a press on the panel starts a drag
        if let Event::PointerDown { x, y } = *event {
            if !self.gesture.is_active() && !self.panel_rect().contains(x, y) {
                return EventResponse::Ignored;
            }
        }

        let panel = self.panel_rect();
        let origins: Vec<(f32, f32)> = self.child_origins().collect();
        let mut response = self.gesture.handle_event(event);

        for (child, (x, y)) in self.children.iter_mut().zip(origins) {
            let local = event.translated(-(panel.x + x), -(panel.y + y));
            if child.event(&local) == EventResponse::Handled {
                response = EventResponse::Handled;
            }
        }

        response
    }
}
