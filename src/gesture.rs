//! Single-pointer vertical pan recognition.
//!
//! A [`PanGesture`] turns raw pointer events into start/update/end callbacks.
//! Each update carries the cumulative vertical translation since the pointer
//! went down, so a handler can compute its new position from the value it
//! captured at start without accumulating deltas.
//!
//! ```
//! use drag_sheet::gesture::register_pan_gesture;
//! use drag_sheet::widgets::Event;
//!
//! let mut pan = register_pan_gesture(
//!     |_| {},
//!     |event| assert_eq!(event.translation_y, -40.0),
//!     |_| {},
//! );
//! pan.handle_event(&Event::PointerDown { x: 0.0, y: 500.0 });
//! pan.handle_event(&Event::PointerMove { x: 0.0, y: 460.0 });
//! ```

use std::time::Instant;

use crate::widgets::{Event, EventResponse};

/// Callback invoked for a pan phase.
pub type PanCallback = Box<dyn FnMut(&PanEvent) + Send>;

/// Payload delivered to pan callbacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    /// Vertical distance moved since the gesture started (positive = down)
    pub translation_y: f32,
    /// Current pointer position
    pub absolute_y: f32,
    /// Estimated vertical speed in px/s from the last two samples
    pub velocity_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PanState {
    Idle,
    Dragging {
        start_y: f32,
        last_y: f32,
        last_at: Instant,
        velocity_y: f32,
    },
}

/// Recognizer for a vertical pan driven by a single pointer.
pub struct PanGesture {
    on_start: Option<PanCallback>,
    on_update: Option<PanCallback>,
    on_end: Option<PanCallback>,
    state: PanState,
}

impl PanGesture {
    pub fn new() -> Self {
        Self {
            on_start: None,
            on_update: None,
            on_end: None,
            state: PanState::Idle,
        }
    }

    /// Called once when the pointer goes down
    pub fn on_start<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PanEvent) + Send + 'static,
    {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Called for every pointer move while dragging
    pub fn on_update<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PanEvent) + Send + 'static,
    {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Called when the pointer is released or cancelled
    pub fn on_end<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PanEvent) + Send + 'static,
    {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Whether a drag is in progress
    pub fn is_active(&self) -> bool {
        matches!(self.state, PanState::Dragging { .. })
    }

    /// Feed a pointer event through the recognizer.
    ///
    /// Any `PointerDown` while idle starts a drag; hit-testing is the owning
    /// widget's job.
    pub fn handle_event(&mut self, event: &Event) -> EventResponse {
        match (*event, self.state) {
            (Event::PointerDown { y, .. }, PanState::Idle) => {
                self.state = PanState::Dragging {
                    start_y: y,
                    last_y: y,
                    last_at: Instant::now(),
                    velocity_y: 0.0,
                };
                log::trace!("Pan started at y={}", y);
                let payload = PanEvent {
                    translation_y: 0.0,
                    absolute_y: y,
                    velocity_y: 0.0,
                };
                fire(&mut self.on_start, &payload);
                EventResponse::Handled
            }
            (
                Event::PointerMove { y, .. },
                PanState::Dragging {
                    start_y,
                    last_y,
                    last_at,
                    velocity_y,
                },
            ) => {
                let now = Instant::now();
                let dt = now.duration_since(last_at).as_secs_f32();
                let velocity_y = if dt > 0.0 {
                    (y - last_y) / dt
                } else {
                    velocity_y
                };
                self.state = PanState::Dragging {
                    start_y,
                    last_y: y,
                    last_at: now,
                    velocity_y,
                };
                let payload = PanEvent {
                    translation_y: y - start_y,
                    absolute_y: y,
                    velocity_y,
                };
                fire(&mut self.on_update, &payload);
                EventResponse::Handled
            }
            (Event::PointerUp { .. } | Event::PointerCancel, PanState::Dragging { .. }) => {
                self.finish(event);
                EventResponse::Handled
            }
            // Second pointer, or stray moves/ups with no drag in progress
            _ => EventResponse::Ignored,
        }
    }

    fn finish(&mut self, event: &Event) {
        let PanState::Dragging {
            start_y,
            last_y,
            velocity_y,
            ..
        } = self.state
        else {
            return;
        };
        self.state = PanState::Idle;

        let end_y = event.coords().map(|(_, y)| y).unwrap_or(last_y);
        log::trace!("Pan ended, translation {}", end_y - start_y);
        let payload = PanEvent {
            translation_y: end_y - start_y,
            absolute_y: end_y,
            velocity_y,
        };
        fire(&mut self.on_end, &payload);
    }
}

impl Default for PanGesture {
    fn default() -> Self {
        Self::new()
    }
}

fn fire(callback: &mut Option<PanCallback>, payload: &PanEvent) {
    if let Some(callback) = callback.as_mut() {
        callback(payload);
    }
}

/// Build a pan recognizer from its three phase callbacks.
pub fn register_pan_gesture<S, U, E>(on_start: S, on_update: U, on_end: E) -> PanGesture
where
    S: FnMut(&PanEvent) + Send + 'static,
    U: FnMut(&PanEvent) + Send + 'static,
    E: FnMut(&PanEvent) + Send + 'static,
{
    PanGesture::new()
        .on_start(on_start)
        .on_update(on_update)
        .on_end(on_end)
}
