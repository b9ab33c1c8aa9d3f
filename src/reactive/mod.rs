pub mod invalidation;
pub mod shared;

pub use invalidation::{request_frame, take_frame_request, ChangeFlags};
pub use shared::SharedValue;
