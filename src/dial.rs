//! Dial geometry: converting between rotation angles and segments.
//!
//! Angles are in degrees. Segment 0's center sits at 12 o'clock when
//! rotation is zero, and positive rotation turns the dial
//! counter-clockwise, so putting a higher-indexed segment at the top
//! means rotating by a negative angle.

pub mod segments;

use crate::model::RingKind;

/// Angular width of one segment on a ring with `segment_count` segments.
///
/// # Panics
///
/// Panics if `segment_count` is zero. Rings always have at least one
/// segment; an empty list is a bug in the caller.
pub fn segment_angle_width(segment_count: usize) -> f64 {
    assert!(segment_count > 0, "ring must have at least one segment");
    360.0 / segment_count as f64
}

/// Index of the segment sitting at 12 o'clock for a given rotation.
///
/// Correct for any rotation, however far outside ±360°.
pub fn segment_at_top(rotation: f64, segment_count: usize) -> usize {
    let width = segment_angle_width(segment_count);
    // Negate: clockwise (negative) rotation brings higher-indexed
    // segments to the top. Half a width corrects for segment centering.
    let pointer = (-rotation + width / 2.0).rem_euclid(360.0);
    // rem_euclid can land exactly on 360.0 for tiny negative inputs.
    (pointer / width).floor() as usize % segment_count
}

/// Snap a free rotation to the nearest segment boundary.
///
/// Ties round toward the larger value. The result is deliberately not
/// normalized into `[0, 360)`: a drag that wound the dial several times
/// around keeps its turns, so the dial doesn't jump when it settles.
pub fn snap_to_segment(rotation: f64, segment_count: usize) -> f64 {
    let width = segment_angle_width(segment_count);
    // Round half-up: f64::round would send -13.5 away from zero.
    (rotation / width + 0.5).floor() * width
}

/// The rotation that puts `value`'s segment at 12 o'clock: zero or
/// negative, one segment width per index step.
///
/// Returns `0.0` when the value is not on the ring. Callers that need
/// to tell "not found" apart from "first segment" must check the
/// segment list themselves.
pub fn rotation_for_value(ring: RingKind, value: &str, context_decade: &str) -> f64 {
    let list = segments::segments_for(ring, context_decade);
    let Some(index) = list.iter().position(|segment| segment == value) else {
        return 0.0;
    };
    -(index as f64) * segment_angle_width(list.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_widths_for_the_three_rings() {
        assert_eq!(segment_angle_width(9), 40.0);
        assert_eq!(segment_angle_width(10), 36.0);
        assert_eq!(segment_angle_width(12), 30.0);
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn zero_segments_is_a_caller_bug() {
        segment_angle_width(0);
    }

    #[test]
    fn zero_rotation_shows_the_first_segment() {
        assert_eq!(segment_at_top(0.0, 9), 0);
        assert_eq!(segment_at_top(0.0, 12), 0);
    }

    #[test]
    fn clockwise_rotation_steps_through_segments() {
        assert_eq!(segment_at_top(-30.0, 12), 1);
        assert_eq!(segment_at_top(-210.0, 12), 7);
        assert_eq!(segment_at_top(-330.0, 12), 11);
    }

    #[test]
    fn full_revolutions_change_nothing() {
        for count in [9, 10, 12] {
            assert_eq!(segment_at_top(360.0, count), segment_at_top(0.0, count));
            assert_eq!(segment_at_top(720.0, count), segment_at_top(0.0, count));
            assert_eq!(segment_at_top(-360.0, count), segment_at_top(0.0, count));
        }
    }

    #[test]
    fn far_out_of_range_rotations_resolve() {
        assert_eq!(segment_at_top(-990.0, 12), segment_at_top(-270.0, 12));
        assert_eq!(segment_at_top(1475.0, 12), segment_at_top(35.0, 12));
    }

    #[test]
    fn snap_lands_on_the_nearest_boundary() {
        assert_eq!(snap_to_segment(14.0, 12), 0.0);
        assert_eq!(snap_to_segment(16.0, 12), 30.0);
        assert_eq!(snap_to_segment(-16.0, 12), -30.0);
    }

    #[test]
    fn snap_rounds_ties_up() {
        assert_eq!(snap_to_segment(45.0, 12), 60.0);
        assert_eq!(snap_to_segment(-45.0, 12), -30.0);
    }

    #[test]
    fn snap_keeps_extra_revolutions() {
        assert_eq!(snap_to_segment(395.0, 12), 390.0);
        assert_eq!(snap_to_segment(-395.0, 12), -390.0);
        assert_eq!(snap_to_segment(1000.0, 12), 990.0);
    }

    #[test]
    fn decade_values_map_to_clockwise_rotations() {
        assert_eq!(rotation_for_value(RingKind::Decade, "1940s", ""), 0.0);
        assert_eq!(rotation_for_value(RingKind::Decade, "1950s", ""), -40.0);
        assert_eq!(rotation_for_value(RingKind::Decade, "1990s", ""), -200.0);
    }

    #[test]
    fn year_rotations_depend_on_the_context_decade() {
        assert_eq!(rotation_for_value(RingKind::Year, "1991", "1990s"), -36.0);
        assert_eq!(rotation_for_value(RingKind::Year, "1995", "1990s"), -180.0);
        assert_eq!(rotation_for_value(RingKind::Year, "1985", "1980s"), -180.0);
    }

    #[test]
    fn month_values_map_to_clockwise_rotations() {
        assert_eq!(rotation_for_value(RingKind::Month, "Feb", ""), -30.0);
        assert_eq!(rotation_for_value(RingKind::Month, "Aug", ""), -210.0);
        assert_eq!(rotation_for_value(RingKind::Month, "Dec", ""), -330.0);
    }

    #[test]
    fn values_not_on_the_ring_fall_back_to_zero() {
        assert_eq!(rotation_for_value(RingKind::Decade, "1930s", ""), 0.0);
        assert_eq!(rotation_for_value(RingKind::Year, "2000", "1990s"), 0.0);
        assert_eq!(rotation_for_value(RingKind::Month, "August", ""), 0.0);
    }

    #[test]
    fn every_value_round_trips_through_its_rotation() {
        let cases = [
            (RingKind::Decade, segments::segments_for(RingKind::Decade, "")),
            (RingKind::Year, segments::segments_for(RingKind::Year, "1990s")),
            (RingKind::Month, segments::segments_for(RingKind::Month, "")),
        ];
        for (ring, list) in cases {
            for (index, value) in list.iter().enumerate() {
                let rotation = rotation_for_value(ring, value, "1990s");
                assert_eq!(segment_at_top(rotation, list.len()), index, "{value}");
            }
        }
    }
}
