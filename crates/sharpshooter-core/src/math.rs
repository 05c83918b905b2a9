//! Vector helpers shared by the geometry systems.
//!
//! Basic arithmetic (subtract, dot, scale, normalize, distance) comes from
//! `glam::DVec3`; this module adds the segment and aiming helpers built on it.

use glam::DQuat;

use crate::constants::LOOK_SENSITIVITY;
use crate::types::{Vector2, Vector3};

/// Projection parameter of `point` onto the segment `[start, end]`, clamped to `[0, 1]`.
///
/// A zero-length segment yields `0.0`.
pub fn segment_projection(start: Vector3, end: Vector3, point: Vector3) -> f64 {
    let segment = end - start;
    let len_sq = segment.dot(segment);
    if len_sq <= f64::EPSILON {
        return 0.0;
    }
    ((point - start).dot(segment) / len_sq).clamp(0.0, 1.0)
}

/// Closest point to `point` on the segment `[start, end]`.
pub fn closest_point_on_segment(start: Vector3, end: Vector3, point: Vector3) -> Vector3 {
    let t = segment_projection(start, end, point);
    start + (end - start) * t
}

/// Distance from `point` to the segment `[start, end]`.
pub fn distance_to_segment(start: Vector3, end: Vector3, point: Vector3) -> f64 {
    closest_point_on_segment(start, end, point).distance(point)
}

/// Orientation of the aiming pivot for the given yaw and pitch (degrees).
///
/// Yaw 0, pitch 0 faces -z. Positive yaw turns toward +x, positive pitch
/// raises the aim (toward -y, since the world is y-down).
pub fn aim_rotation(yaw_deg: f64, pitch_deg: f64) -> DQuat {
    DQuat::from_rotation_y(-yaw_deg.to_radians()) * DQuat::from_rotation_x(-pitch_deg.to_radians())
}

/// Unit forward vector for the given yaw and pitch (degrees).
pub fn forward_from_angles(yaw_deg: f64, pitch_deg: f64) -> Vector3 {
    (aim_rotation(yaw_deg, pitch_deg) * Vector3::NEG_Z).normalize()
}

/// Yaw and pitch (degrees) of the ray from `eye` through `point`.
pub fn angles_towards(eye: Vector3, point: Vector3) -> (f64, f64) {
    let to = point - eye;
    let horizontal = (to.x * to.x + to.z * to.z).sqrt();
    (
        to.x.atan2(-to.z).to_degrees(),
        (-to.y).atan2(horizontal).to_degrees(),
    )
}

/// Mouse delta in pixels that turns a look pose of `yaw_deg`/`pitch_deg` to face `point`.
///
/// `pitch_deg` is the look pitch only; recoil kicks are not part of it.
pub fn look_delta_towards(eye: Vector3, yaw_deg: f64, pitch_deg: f64, point: Vector3) -> Vector2 {
    let (yaw, pitch) = angles_towards(eye, point);
    Vector2::new(
        (yaw - yaw_deg) / LOOK_SENSITIVITY,
        (pitch_deg - pitch) / LOOK_SENSITIVITY,
    )
}
