//! Pure geometry for the sheet: drag clamping, the release decision and the
//! per-frame style. Nothing here touches shared state.

use crate::animation::{interpolate, Extrapolation};
use crate::platform::ScreenMetrics;

/// Distance between the top of the screen and the fully open panel
pub const OPEN_INSET: f32 = 50.0;
/// Corner radius of the panel away from the top of its travel
pub const CORNER_RADIUS: f32 = 10.0;
/// Travel over which the corners square off as the panel reaches the top
pub const CORNER_RAMP: f32 = 50.0;

/// Offset of the fully open sheet (negative, `-height + OPEN_INSET`)
pub fn max_open_offset(metrics: &ScreenMetrics) -> f32 {
    -metrics.height + OPEN_INSET
}

/// Release threshold halfway up the screen
pub fn midpoint(metrics: &ScreenMetrics) -> f32 {
    -metrics.height / 2.0
}

/// Offset while dragging: the offset captured at gesture start plus the
/// cumulative translation, never above the fully open position.
///
/// No lower bound: the panel may be pulled below its closed position until
/// released.
pub fn drag_offset(start: f32, translation_y: f32, metrics: &ScreenMetrics) -> f32 {
    (start + translation_y).max(max_open_offset(metrics))
}

/// Where the sheet settles after release at `offset`.
///
/// Below the midpoint snaps closed, above snaps fully open. Exactly at the
/// midpoint there is no snap and the sheet stays where it was let go.
pub fn snap_target(offset: f32, metrics: &ScreenMetrics) -> Option<f32> {
    let midpoint = midpoint(metrics);
    if offset > midpoint {
        Some(0.0)
    } else if offset < midpoint {
        Some(max_open_offset(metrics))
    } else {
        None
    }
}

/// Style values derived from the animated state each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyle {
    /// Panel corner radius
    pub corner_radius: f32,
    /// Vertical translation applied to the panel
    pub translate_y: f32,
    /// Opacity the backdrop springs toward
    pub backdrop_target: f32,
}

pub fn derive_style(offset: f32, active: bool, metrics: &ScreenMetrics) -> SheetStyle {
    let open = max_open_offset(metrics);
    SheetStyle {
        corner_radius: interpolate(
            offset,
            [open + CORNER_RAMP, open],
            [CORNER_RADIUS, 0.0],
            Extrapolation::Clamp,
        ),
        translate_y: offset,
        backdrop_target: if active { 1.0 } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenMetrics = ScreenMetrics::new(400.0, 800.0);

    #[test]
    fn test_max_open_offset() {
        assert_eq!(max_open_offset(&SCREEN), -750.0);
        assert_eq!(midpoint(&SCREEN), -400.0);
    }

    #[test]
    fn test_drag_offset_clamps_at_open() {
        assert_eq!(drag_offset(0.0, -400.0, &SCREEN), -400.0);
        assert_eq!(drag_offset(0.0, -2000.0, &SCREEN), -750.0);
        assert_eq!(drag_offset(-750.0, -1.0, &SCREEN), -750.0);
    }

    #[test]
    fn test_drag_offset_allows_slack_below_closed() {
        assert_eq!(drag_offset(0.0, 120.0, &SCREEN), 120.0);
    }

    #[test]
    fn test_drag_offset_never_exceeds_open_bound() {
        let mut start = 0.0;
        for translation in [-100.0, -900.0, 300.0, -10_000.0, 0.0, 50.0] {
            let offset = drag_offset(start, translation, &SCREEN);
            assert!(offset >= max_open_offset(&SCREEN));
            start = offset;
        }
    }

    #[test]
    fn test_snap_target_sides() {
        assert_eq!(snap_target(-399.0, &SCREEN), Some(0.0));
        assert_eq!(snap_target(0.0, &SCREEN), Some(0.0));
        assert_eq!(snap_target(90.0, &SCREEN), Some(0.0));
        assert_eq!(snap_target(-401.0, &SCREEN), Some(-750.0));
        assert_eq!(snap_target(-500.0, &SCREEN), Some(-750.0));
        assert_eq!(snap_target(-750.0, &SCREEN), Some(-750.0));
    }

    #[test]
    fn test_snap_target_midpoint_does_not_snap() {
        assert_eq!(snap_target(-400.0, &SCREEN), None);
    }

    #[test]
    fn test_corner_radius_bounds() {
        assert_eq!(derive_style(-750.0, true, &SCREEN).corner_radius, 0.0);
        assert_eq!(derive_style(-700.0, true, &SCREEN).corner_radius, 10.0);
        assert_eq!(derive_style(-725.0, true, &SCREEN).corner_radius, 5.0);
    }

    #[test]
    fn test_corner_radius_is_clamped() {
        // Spring overshoot past fully open
        assert_eq!(derive_style(-790.0, true, &SCREEN).corner_radius, 0.0);
        assert_eq!(derive_style(0.0, false, &SCREEN).corner_radius, 10.0);
        assert_eq!(derive_style(150.0, false, &SCREEN).corner_radius, 10.0);
    }

    #[test]
    fn test_style_translation_and_backdrop() {
        let style = derive_style(-321.0, false, &SCREEN);
        assert_eq!(style.translate_y, -321.0);
        assert_eq!(style.backdrop_target, 0.0);
        assert_eq!(derive_style(-321.0, true, &SCREEN).backdrop_target, 1.0);
    }
}
