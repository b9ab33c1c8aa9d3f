pub mod block;
pub mod bottom_sheet;
pub mod widget;

pub use block::{block, Block};
pub use bottom_sheet::{
    bottom_sheet, derive_style, max_open_offset, snap_target, BottomSheet, SheetConfig,
    SheetHandle, SheetStyle,
};
pub use widget::{Color, Event, EventResponse, Rect, Widget};
