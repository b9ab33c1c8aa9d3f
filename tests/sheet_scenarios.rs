use std::time::Duration;

use drag_sheet::prelude::*;

const SCREEN: ScreenMetrics = ScreenMetrics::new(400.0, 800.0);
const FRAME: Duration = Duration::from_micros(16_667);

fn run_frames(sheet: &mut BottomSheet, frames: usize) {
    for _ in 0..frames {
        sheet.advance_animations(FRAME);
    }
}

#[test]
fn drag_past_midpoint_opens_sheet() {
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(SCREEN).snap(0.0));
    let handle = sheet.handle();

    // Panel top sits at the bottom edge of the screen while closed
    sheet.event(&Event::PointerDown { x: 200.0, y: 805.0 });
    sheet.event(&Event::PointerMove { x: 200.0, y: 405.0 });
    assert_eq!(sheet.style().translate_y, -400.0);

    sheet.event(&Event::PointerMove { x: 200.0, y: 305.0 });
    assert_eq!(sheet.style().translate_y, -500.0);
    assert!(!handle.is_active());

    sheet.event(&Event::PointerUp { x: 200.0, y: 305.0 });
    assert!(handle.is_active());

    run_frames(&mut sheet, 300);
    assert_eq!(sheet.style().translate_y, max_open_offset(&SCREEN));
    assert_eq!(sheet.style().corner_radius, 0.0);
    assert_eq!(sheet.backdrop_opacity(), 1.0);
}

#[test]
fn owner_opens_and_closes_through_handle() {
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(SCREEN));
    let handle = sheet.handle();

    handle.scroll_to(max_open_offset(&SCREEN));
    run_frames(&mut sheet, 300);
    assert_eq!(sheet.style().translate_y, -750.0);

    // Closing flips active at once, long before the panel is down
    handle.scroll_to(0.0);
    assert!(!handle.is_active());
    run_frames(&mut sheet, 1);
    assert!(sheet.style().translate_y < -730.0);

    run_frames(&mut sheet, 300);
    assert_eq!(sheet.style().translate_y, 0.0);
    assert_eq!(sheet.backdrop_opacity(), 0.0);
}

#[test]
fn retargeting_mid_flight_supersedes_previous_target() {
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(SCREEN));
    let handle = sheet.handle();

    handle.scroll_to(-750.0);
    run_frames(&mut sheet, 6);
    handle.scroll_to(0.0);
    run_frames(&mut sheet, 300);

    assert_eq!(sheet.style().translate_y, 0.0);
    assert!(!handle.is_active());
}

#[test]
fn dragging_open_sheet_down_closes_it() {
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(SCREEN));
    let handle = sheet.handle();
    handle.scroll_to(-750.0);
    run_frames(&mut sheet, 300);

    // Grab the handle area near the top of the open panel
    sheet.event(&Event::PointerDown { x: 200.0, y: 60.0 });
    sheet.event(&Event::PointerMove { x: 200.0, y: 560.0 });
    assert_eq!(sheet.style().translate_y, -250.0);
    sheet.event(&Event::PointerUp { x: 200.0, y: 560.0 });

    assert!(!handle.is_active());
    run_frames(&mut sheet, 300);
    assert_eq!(sheet.style().translate_y, 0.0);
}

#[test]
fn drag_offset_never_passes_fully_open() {
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(SCREEN));
    let open = max_open_offset(&SCREEN);

    sheet.event(&Event::PointerDown { x: 200.0, y: 810.0 });
    for y in [700.0, 300.0, -100.0, -5000.0, 200.0, -800.0, 40.0] {
        sheet.event(&Event::PointerMove { x: 200.0, y });
        assert!(sheet.style().translate_y >= open);
    }
}

#[test]
fn backdrop_fades_with_active_flag() {
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(SCREEN));
    sheet.layout(Constraints::loose(SCREEN.size()));

    sheet.handle().scroll_to(-750.0);
    run_frames(&mut sheet, 3);
    let opacity = sheet.backdrop_opacity();
    assert!(opacity > 0.0 && opacity < 1.0);

    let mut ctx = PaintContext::new();
    sheet.paint(&mut ctx);
    let backdrop = ctx.commands()[0];
    assert_eq!(backdrop.rect(), Rect::new(0.0, 0.0, 400.0, 800.0));
    assert!(backdrop.color().a > 0.0 && backdrop.color().a < 0.4);
}

#[test]
fn drag_from_handle_strip_of_closed_sheet_opens_it() {
    let screen = ScreenMetrics::FALLBACK;
    let mut sheet = bottom_sheet(SheetConfig::with_metrics(screen));
    let handle = sheet.handle();

    let x = screen.width / 2.0;
    let mut y = screen.height + drag_sheet::widgets::bottom_sheet::HANDLE_MARGIN;
    assert_eq!(
        sheet.event(&Event::PointerDown { x, y }),
        EventResponse::Handled
    );
    for _ in 0..20 {
        y -= screen.height / 30.0;
        sheet.event(&Event::PointerMove { x, y });
    }
    sheet.event(&Event::PointerUp { x, y });

    assert!(handle.is_active());
    run_frames(&mut sheet, 300);
    assert_eq!(sheet.style().translate_y, max_open_offset(&screen));
}
