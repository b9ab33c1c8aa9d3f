//! Drives a bottom sheet headlessly: drags it open with a synthetic finger,
//! closes it from the owner thread and logs what the animation thread paints.
//!
//! Run with `RUST_LOG=info cargo run --example sheet_demo`.

use std::thread::sleep;
use std::time::Duration;

use drag_sheet::prelude::*;
use drag_sheet::widgets::bottom_sheet::HANDLE_MARGIN;

fn log_latest(host: &Host, label: &str) {
    match host.latest_frame() {
        Some(frame) => {
            let panel_y = frame
                .commands
                .iter()
                .find(|command| command.color() == Color::WHITE)
                .map(|command| command.rect().y);
            log::info!(
                "{}: frame {} with {} commands, panel top at {:?}",
                label,
                frame.index,
                frame.commands.len(),
                panel_y
            );
        }
        None => log::info!("{}: nothing painted yet", label),
    }
}

fn main() -> Result<(), HostError> {
    env_logger::init();

    let metrics = screen_metrics();
    let sheet = bottom_sheet(SheetConfig::default())
        .child(block(60.0).width(metrics.width - 32.0).radius(8.0))
        .child(block(120.0).width(metrics.width - 32.0).radius(8.0))
        .child(block(200.0).width(metrics.width - 32.0).radius(8.0));
    let handle = sheet.handle();

    let host = Host::spawn(HostConfig::default(), sheet)?;
    sleep(Duration::from_millis(50));
    log_latest(&host, "closed");

    // The closed panel starts at the bottom edge; grab its handle strip and
    // pull it two thirds of the way up
    let x = metrics.width / 2.0;
    let mut y = metrics.height + HANDLE_MARGIN;
    host.send(Event::PointerDown { x, y })?;
    for _ in 0..20 {
        y -= metrics.height / 30.0;
        host.send(Event::PointerMove { x, y })?;
        sleep(Duration::from_millis(16));
    }
    host.send(Event::PointerUp { x, y })?;
    log_latest(&host, "released");

    sleep(Duration::from_secs(2));
    log_latest(&host, "opened");

    handle.scroll_to(0.0);
    sleep(Duration::from_secs(2));
    log_latest(&host, "closed again");

    host.shutdown()
}
