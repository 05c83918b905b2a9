//! Camera aim: mouse look and the aiming-pivot recoil kick.
//!
//! The pivot kick is a discrete rotation reverted after a fixed time. It is
//! independent of the scope overlay recoil in `scope.rs`, which decays instead.

use sharpshooter_core::constants::*;
use sharpshooter_core::math;
use sharpshooter_core::state::CameraView;
use sharpshooter_core::types::{Countdown, Vector3};

/// An upward pitch applied to the pivot until its countdown elapses.
#[derive(Debug, Clone, Copy)]
pub struct PivotKick {
    pub angle_deg: f64,
    pub remaining: Countdown,
}

/// Aiming pivot pose. Owns yaw, pitch, and any active kicks.
#[derive(Debug, Clone)]
pub struct Aim {
    eye: Vector3,
    yaw_deg: f64,
    pitch_deg: f64,
    kicks: Vec<PivotKick>,
}

impl Default for Aim {
    fn default() -> Self {
        Self::new(EYE_POSITION)
    }
}

impl Aim {
    pub fn new(eye: Vector3) -> Self {
        Self {
            eye,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            kicks: Vec::new(),
        }
    }

    /// Apply a mouse delta in pixels. Pitch is clamped, yaw is not.
    pub fn on_look(&mut self, dx: f64, dy: f64) {
        self.yaw_deg += dx * LOOK_SENSITIVITY;
        self.pitch_deg =
            (self.pitch_deg - dy * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Add a kick that reverts after `duration_secs`. Kicks stack.
    pub fn kick(&mut self, angle_deg: f64, duration_secs: f64) {
        self.kicks.push(PivotKick {
            angle_deg,
            remaining: Countdown::new(duration_secs),
        });
    }

    /// Count down active kicks and revert the ones that elapsed.
    pub fn advance(&mut self, dt: f64) {
        self.kicks.retain_mut(|kick| !kick.remaining.advance(dt));
    }

    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    pub fn yaw_deg(&self) -> f64 {
        self.yaw_deg
    }

    /// Pitch from mouse look only.
    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    /// Pitch including active kicks. Kicks are not clamped.
    pub fn effective_pitch_deg(&self) -> f64 {
        self.pitch_deg + self.kicks.iter().map(|k| k.angle_deg).sum::<f64>()
    }

    pub fn active_kicks(&self) -> &[PivotKick] {
        &self.kicks
    }

    /// Unit view ray.
    pub fn forward(&self) -> Vector3 {
        math::forward_from_angles(self.yaw_deg, self.effective_pitch_deg())
    }

    /// World position of the muzzle.
    pub fn muzzle_position(&self) -> Vector3 {
        self.eye + math::aim_rotation(self.yaw_deg, self.effective_pitch_deg()) * MUZZLE_OFFSET
    }

    pub fn view(&self, field_of_view_deg: f64) -> CameraView {
        CameraView {
            position: self.eye,
            yaw_deg: self.yaw_deg,
            pitch_deg: self.effective_pitch_deg(),
            look_pitch_deg: self.pitch_deg,
            field_of_view_deg,
        }
    }
}
