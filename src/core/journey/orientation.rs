//=========================================================================
// Orientation Resolver
//=========================================================================
//
// Turns a destination's rotation angles into the globe orientation the
// travel animation interpolates towards.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DQuat;

//=== Internal Dependencies ===============================================

use super::destination::Destination;

//=== Orientation =========================================================

/// Orientation for Euler angles `(rx, ry, 0)` applied in XYZ order.
pub fn orientation_from_angles(rx: f64, ry: f64) -> DQuat {
    (DQuat::from_rotation_x(rx) * DQuat::from_rotation_y(ry)).normalize()
}

/// Unit orientation bringing `target` into view.
///
/// Only the target matters; where the globe currently points is the
/// animator's concern.
pub fn goal_orientation(target: &Destination) -> DQuat {
    orientation_from_angles(target.rx, target.ry)
}

//=========================================================================
// Unit Tests
//=========================================================================
