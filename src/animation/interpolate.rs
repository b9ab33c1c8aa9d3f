//! Range interpolation for deriving style values from animated values.
//!
//! ```
//! use drag_sheet::animation::{interpolate, Extrapolation};
//!
//! // Corner radius fades out over the last 50px of travel
//! let radius = interpolate(-775.0, [-700.0, -750.0], [10.0, 0.0], Extrapolation::Clamp);
//! assert_eq!(radius, 0.0);
//! ```

/// What to do with inputs that fall outside the input range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolation {
    /// Keep the linear mapping going past the ends
    #[default]
    Extend,
    /// Pin to the nearest output bound
    Clamp,
    /// Return the input unchanged
    Identity,
}

/// Map `value` from `input` to `output` linearly.
///
/// The input range may be decreasing. A degenerate input range yields the
/// first output bound.
pub fn interpolate(
    value: f32,
    input: [f32; 2],
    output: [f32; 2],
    extrapolation: Extrapolation,
) -> f32 {
    let [in_start, in_end] = input;
    let [out_start, out_end] = output;

    let span = in_end - in_start;
    if span == 0.0 {
        return out_start;
    }

    let t = (value - in_start) / span;
    if !(0.0..=1.0).contains(&t) {
        match extrapolation {
            Extrapolation::Extend => {}
            Extrapolation::Clamp => {
                return if t < 0.0 { out_start } else { out_end };
            }
            Extrapolation::Identity => return value,
        }
    }

    out_start + (out_end - out_start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_inside_range() {
        assert_eq!(interpolate(5.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Clamp), 50.0);
        assert_eq!(interpolate(0.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Clamp), 0.0);
        assert_eq!(interpolate(10.0, [0.0, 10.0], [0.0, 100.0], Extrapolation::Clamp), 100.0);
    }

    #[test]
    fn test_decreasing_input_range() {
        let input = [-700.0, -750.0];
        let output = [10.0, 0.0];
        assert_eq!(interpolate(-700.0, input, output, Extrapolation::Clamp), 10.0);
        assert_eq!(interpolate(-750.0, input, output, Extrapolation::Clamp), 0.0);
        assert_eq!(interpolate(-725.0, input, output, Extrapolation::Clamp), 5.0);
    }

    #[test]
    fn test_clamp_pins_both_ends() {
        let input = [-700.0, -750.0];
        let output = [10.0, 0.0];
        assert_eq!(interpolate(0.0, input, output, Extrapolation::Clamp), 10.0);
        assert_eq!(interpolate(-800.0, input, output, Extrapolation::Clamp), 0.0);
    }

    #[test]
    fn test_extend_keeps_slope() {
        assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::Extend), 2.0);
        assert_eq!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::Extend), -1.0);
    }

    #[test]
    fn test_identity_returns_input() {
        assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], Extrapolation::Identity), 20.0);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(interpolate(3.0, [1.0, 1.0], [4.0, 8.0], Extrapolation::Clamp), 4.0);
    }
}
