//! Outcome classifier: one sampled landing point to a remaining-strokes estimate.
//!
//! Bands by distance to the hole: holed, near-hole putt, short-game zone
//! (on-green vs around-green), long miss with a trouble penalty. Past the
//! short-game zone only the longitudinal direction of the miss selects the
//! trouble side; lateral misses are not separately penalized once the miss is
//! long.

use crate::engine::curves::{expected_strokes, Surface};
use crate::engine::green::{GreenInterval, TroubleLabel};

/// Within this distance of the hole the shot counts as holed (yards).
pub const HOLED_RADIUS: f64 = 0.5;
/// Up to this distance the leave is treated as a near-hole putt (yards).
pub const NEAR_HOLE_PUTT_RADIUS: f64 = 2.0;
/// Outer edge of the short-game zone (yards).
pub const SHORT_GAME_RADIUS: f64 = 40.0;

/// Expected strokes remaining after landing at `actual_total` yards with
/// `lateral` yards of offset, for a hole at `target` yards.
pub fn strokes_remaining(
    actual_total: f64,
    lateral: f64,
    target: f64,
    green: GreenInterval,
    trouble_short: TroubleLabel,
    trouble_long: TroubleLabel,
) -> f64 {
    let diff = actual_total - target;
    let dist_to_hole = diff.abs();

    if dist_to_hole <= HOLED_RADIUS {
        return 0.0;
    }
    if dist_to_hole <= NEAR_HOLE_PUTT_RADIUS {
        return expected_strokes(dist_to_hole, Surface::Green);
    }
    if dist_to_hole <= SHORT_GAME_RADIUS {
        if green.contains(actual_total, lateral) {
            return expected_strokes(dist_to_hole, Surface::Green);
        }
        return expected_strokes(dist_to_hole, Surface::AroundGreen);
    }

    let trouble = if diff < 0.0 { trouble_short } else { trouble_long };
    expected_strokes(dist_to_hole, Surface::LightRough) + trouble.penalty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin_at_150() -> GreenInterval {
        GreenInterval::resolve(Some(143.0), Some(157.0), 150.0)
    }

    #[test]
    fn dead_on_target_is_holed() {
        let remaining = strokes_remaining(
            150.0,
            0.0,
            150.0,
            pin_at_150(),
            TroubleLabel::None,
            TroubleLabel::None,
        );
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn half_yard_either_side_is_holed() {
        for actual in [149.5, 150.5] {
            let remaining = strokes_remaining(
                actual,
                0.0,
                150.0,
                pin_at_150(),
                TroubleLabel::None,
                TroubleLabel::None,
            );
            assert_eq!(remaining, 0.0);
        }
    }

    #[test]
    fn near_hole_leave_is_a_putt() {
        // 1.5 yards = 4.5 feet on the putting curve.
        let remaining = strokes_remaining(
            151.5,
            0.0,
            150.0,
            pin_at_150(),
            TroubleLabel::None,
            TroubleLabel::None,
        );
        assert_eq!(remaining, expected_strokes(1.5, Surface::Green));
    }

    #[test]
    fn short_game_leave_on_green_uses_putting_curve() {
        // 10 yards long but still inside [143, 157]? No: use 155 (5 long, on green).
        let remaining = strokes_remaining(
            155.0,
            3.0,
            150.0,
            pin_at_150(),
            TroubleLabel::None,
            TroubleLabel::None,
        );
        assert_eq!(remaining, expected_strokes(5.0, Surface::Green));
    }

    #[test]
    fn short_game_leave_off_green_uses_around_green_curve() {
        // 10 short of a 150 target with the green starting at 143: off-green.
        let remaining = strokes_remaining(
            140.0,
            0.0,
            150.0,
            pin_at_150(),
            TroubleLabel::None,
            TroubleLabel::None,
        );
        assert_eq!(remaining, 1.85);
    }

    #[test]
    fn wide_lateral_miss_in_short_game_zone_is_off_green() {
        let remaining = strokes_remaining(
            150.0 + 5.0,
            12.0,
            150.0,
            pin_at_150(),
            TroubleLabel::None,
            TroubleLabel::None,
        );
        assert_eq!(remaining, expected_strokes(5.0, Surface::AroundGreen));
    }

    #[test]
    fn long_miss_applies_trouble_by_longitudinal_direction() {
        let green = pin_at_150();
        let short_miss = strokes_remaining(
            100.0,
            0.0,
            150.0,
            green,
            TroubleLabel::Severe,
            TroubleLabel::None,
        );
        let long_miss = strokes_remaining(
            200.0,
            0.0,
            150.0,
            green,
            TroubleLabel::Severe,
            TroubleLabel::None,
        );
        let base = expected_strokes(50.0, Surface::LightRough);
        assert!((short_miss - base - TroubleLabel::Severe.penalty()).abs() < 1e-12);
        assert!((long_miss - base).abs() < 1e-12);
    }

    #[test]
    fn lateral_offset_does_not_select_trouble_side_on_long_misses() {
        let green = pin_at_150();
        let centered = strokes_remaining(
            100.0,
            0.0,
            150.0,
            green,
            TroubleLabel::Mild,
            TroubleLabel::None,
        );
        let pushed = strokes_remaining(
            100.0,
            35.0,
            150.0,
            green,
            TroubleLabel::Mild,
            TroubleLabel::None,
        );
        assert_eq!(centered, pushed);
    }

    #[test]
    fn trouble_severity_orders_expected_strokes() {
        let green = pin_at_150();
        let leave = |label| {
            strokes_remaining(95.0, 0.0, 150.0, green, label, TroubleLabel::None)
        };
        let none = leave(TroubleLabel::None);
        let mild = leave(TroubleLabel::Mild);
        let severe = leave(TroubleLabel::Severe);
        assert!(severe > mild);
        assert!(mild > none);
    }
}
