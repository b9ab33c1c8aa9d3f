use thiserror::Error;

/// Errors from running the animation host.
///
/// Widget operations themselves never fail; only starting, feeding and
/// stopping the animation thread can.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to spawn animation thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("animation event loop error: {0}")]
    EventLoop(#[from] calloop::Error),

    #[error("animation host is no longer running")]
    Disconnected,

    #[error("animation thread panicked")]
    Panicked,
}
