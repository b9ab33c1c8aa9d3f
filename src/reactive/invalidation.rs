use std::sync::atomic::{AtomicBool, Ordering};

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

impl Default for ChangeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Global flag to indicate a frame is requested
static FRAME_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Request that the frame host produce a new frame
pub fn request_frame() {
    FRAME_REQUESTED.store(true, Ordering::Relaxed);
}

/// Check if a frame has been requested and clear the flag
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.swap(false, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_flags_combine() {
        let mut flags = ChangeFlags::default();
        assert!(flags.is_empty());

        flags |= ChangeFlags::NEEDS_PAINT;
        assert!(flags.contains(ChangeFlags::NEEDS_PAINT));
        assert!(!flags.contains(ChangeFlags::NEEDS_LAYOUT));

        flags |= ChangeFlags::NEEDS_LAYOUT;
        assert_eq!(flags, ChangeFlags::all());
    }

    #[test]
    fn test_request_is_observed() {
        request_frame();
        assert!(take_frame_request());
    }
}
