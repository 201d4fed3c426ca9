//=========================================================================
// Angle Math
//=========================================================================
//
// Canonical angle range used by route planning.
//
// Rotation angles coming from destination data may be expressed in any
// number of revolutions. Planning works with the half-open range
// [-PI, PI) so that interpolation always takes the short way around.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f64::consts::{PI, TAU};

//=== Constants ===========================================================

/// One full revolution, in radians.
pub const REV: f64 = TAU;

//=== normalize_angle() ===================================================

/// Normalizes `angle` into `[-PI, PI)`.
///
/// Angles already inside the range are returned untouched, which makes the
/// function idempotent bit-for-bit. Angles many revolutions away are folded
/// with a Euclidean remainder instead of repeated subtraction.
///
/// ```
/// use tour_engine::core::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_angle(PI), -PI);
/// assert_eq!(normalize_angle(0.5), 0.5);
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    if (-PI..PI).contains(&angle) {
        return angle;
    }

    let mut folded = (angle + PI).rem_euclid(REV) - PI;

    // Rounding can land exactly on either bound
    if folded >= PI {
        folded -= REV;
    }
    if folded < -PI {
        folded += REV;
    }
    folded
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn in_range(angle: f64) -> bool {
        (-PI..PI).contains(&angle)
    }

    #[test]
    fn values_in_range_are_unchanged() {
        for angle in [-PI, -1.0, 0.0, 0.25, 3.0] {
            assert_eq!(normalize_angle(angle), angle);
        }
    }

    #[test]
    fn upper_bound_wraps_to_lower_bound() {
        assert_eq!(normalize_angle(PI), -PI);
    }

    #[test]
    fn one_revolution_out_folds_back() {
        assert!((normalize_angle(0.5 + REV) - 0.5).abs() < EPSILON);
        assert!((normalize_angle(-0.5 - REV) + 0.5).abs() < EPSILON);
    }

    #[test]
    fn many_revolutions_out_stays_in_range() {
        for angle in [1e6, -1e6, 12345.678, -98765.4321, 1e15, -1e15] {
            let normalized = normalize_angle(angle);
            assert!(in_range(normalized), "{} -> {}", angle, normalized);
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for angle in [-50.0, -7.0, -PI, 0.0, 4.0, 17.5, 1e9] {
            let once = normalize_angle(angle);
            assert_eq!(normalize_angle(once), once);
        }
    }

    #[test]
    fn whole_revolutions_do_not_change_the_result() {
        let base = 1.2345;
        for k in -5..=5 {
            let shifted = base + f64::from(k) * REV;
            assert!(
                (normalize_angle(shifted) - normalize_angle(base)).abs() < EPSILON,
                "k = {}",
                k
            );
        }
    }
}
