//! Frame host.
//!
//! Runs a widget on its own animation thread so gesture handling and
//! per-frame style derivation never wait on application work. The thread
//! owns a `calloop` event loop with two sources:
//!
//! - a channel delivering pointer [`Event`]s to the root widget, and
//! - a timer that advances animations, lays out and paints every frame.
//!
//! The loop dispatches one callback at a time, so the widget's shared state
//! only ever has one writer on the animation thread. Handles such as
//! [`SheetHandle`](crate::widgets::SheetHandle) may still be used from other
//! threads.
//!
//! # Example
//!
//! ```no_run
//! use drag_sheet::prelude::*;
//!
//! # fn main() -> Result<(), HostError> {
//! let sheet = bottom_sheet(SheetConfig::default());
//! let handle = sheet.handle();
//! let host = Host::spawn(HostConfig::default(), sheet)?;
//!
//! handle.scroll_to(max_open_offset(&screen_metrics()));
//! host.send(Event::PointerDown { x: 100.0, y: 200.0 })?;
//! host.shutdown()
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use calloop::channel::{self, Channel, Sender};
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};

use crate::error::HostError;
use crate::layout::Constraints;
use crate::platform::{screen_metrics, ScreenMetrics};
use crate::reactive::{take_frame_request, ChangeFlags};
use crate::renderer::{DrawCommand, PaintContext};
use crate::widgets::{Event, Widget};

const THREAD_NAME: &str = "drag-sheet-animation";

pub struct HostConfig {
    /// Time between frames
    pub frame_interval: Duration,
    /// Size the root widget is laid out to
    pub viewport: ScreenMetrics,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            viewport: screen_metrics(),
        }
    }
}

impl HostConfig {
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn viewport(mut self, viewport: ScreenMetrics) -> Self {
        self.viewport = viewport;
        self
    }
}

/// A painted frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Sequence number, starting at 0
    pub index: u64,
    pub commands: Vec<DrawCommand>,
}

/// A widget running on its own animation thread.
///
/// Dropping the host stops the thread and waits for it.
pub struct Host {
    sender: Option<Sender<Event>>,
    latest: Arc<Mutex<Option<Frame>>>,
    thread: Option<JoinHandle<Result<(), HostError>>>,
}

impl Host {
    pub fn spawn<W>(config: HostConfig, root: W) -> Result<Self, HostError>
    where
        W: Widget + 'static,
    {
        let (sender, channel) = channel::channel();
        let latest = Arc::new(Mutex::new(None));
        let published = latest.clone();

        let thread = std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run_frame_loop(config, root, channel, published))?;

        Ok(Self {
            sender: Some(sender),
            latest,
            thread: Some(thread),
        })
    }

    /// Queue a pointer event for the root widget
    pub fn send(&self, event: Event) -> Result<(), HostError> {
        let sender = self.sender.as_ref().ok_or(HostError::Disconnected)?;
        sender.send(event).map_err(|_| HostError::Disconnected)
    }

    /// The most recently painted frame, if any
    pub fn latest_frame(&self) -> Option<Frame> {
        match self.latest.lock() {
            Ok(latest) => latest.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread
            .as_ref()
            .is_some_and(|thread| !thread.is_finished())
    }

    /// Stop the animation thread and wait for it to exit
    pub fn shutdown(mut self) -> Result<(), HostError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), HostError> {
        // Closing the channel stops the loop
        self.sender.take();
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| HostError::Panicked)?,
            None => Ok(()),
        }
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            log::error!("Animation host did not stop cleanly: {}", err);
        }
    }
}

/// State owned by the animation thread
struct FrameLoop<W> {
    root: W,
    viewport: ScreenMetrics,
    dirty: ChangeFlags,
    last_tick: Instant,
    next_index: u64,
    paint_ctx: PaintContext,
    published: Arc<Mutex<Option<Frame>>>,
    signal: LoopSignal,
}

impl<W: Widget> FrameLoop<W> {
    fn dispatch(&mut self, event: Event) {
        self.root.event(&event);
        self.dirty |= ChangeFlags::NEEDS_PAINT;
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        if self.root.advance_animations(dt) {
            self.dirty |= ChangeFlags::NEEDS_PAINT;
        }
        if take_frame_request() {
            self.dirty |= ChangeFlags::NEEDS_PAINT;
        }

        if self.dirty.contains(ChangeFlags::NEEDS_LAYOUT) {
            self.root
                .layout(Constraints::tight(self.viewport.size()));
        }

        if self.dirty.contains(ChangeFlags::NEEDS_PAINT) {
            self.paint_ctx.clear();
            self.root.paint(&mut self.paint_ctx);

            let frame = Frame {
                index: self.next_index,
                commands: self.paint_ctx.commands().to_vec(),
            };
            log::trace!(
                "Painted frame {} ({} commands)",
                frame.index,
                frame.commands.len()
            );
            self.next_index += 1;

            match self.published.lock() {
                Ok(mut latest) => *latest = Some(frame),
                Err(poisoned) => *poisoned.into_inner() = Some(frame),
            }
        }

        self.dirty = ChangeFlags::empty();
    }
}

fn run_frame_loop<W>(
    config: HostConfig,
    root: W,
    channel: Channel<Event>,
    published: Arc<Mutex<Option<Frame>>>,
) -> Result<(), HostError>
where
    W: Widget + 'static,
{
    let mut event_loop: EventLoop<FrameLoop<W>> = EventLoop::try_new()?;
    let handle = event_loop.handle();

    handle
        .insert_source(channel, |event, _, state| match event {
            channel::Event::Msg(event) => state.dispatch(event),
            channel::Event::Closed => state.signal.stop(),
        })
        .map_err(|err| HostError::EventLoop(err.error))?;

    let interval = config.frame_interval;
    handle
        .insert_source(Timer::from_duration(interval), move |_, _, state| {
            state.tick();
            TimeoutAction::ToDuration(interval)
        })
        .map_err(|err| HostError::EventLoop(err.error))?;

    let mut state = FrameLoop {
        root,
        viewport: config.viewport,
        dirty: ChangeFlags::all(),
        last_tick: Instant::now(),
        next_index: 0,
        paint_ctx: PaintContext::with_capacity(16),
        published,
        signal: event_loop.get_signal(),
    };

    log::info!(
        "Animation loop started: {}x{}, frame every {:?}",
        config.viewport.width,
        config.viewport.height,
        interval
    );
    event_loop.run(None, &mut state, |_| {})?;
    log::info!("Animation loop stopped after {} frames", state.next_index);

    Ok(())
}
