//! Scripted player used by the headless host.

use sharpshooter_core::commands::PlayerCommand;
use sharpshooter_core::math;
use sharpshooter_core::state::CameraView;
use sharpshooter_core::types::Vector3;

/// The `Look` command that turns `camera` to face `point`.
///
/// Works from the look pitch, so an active recoil kick does not skew the turn.
pub fn look_towards(camera: &CameraView, point: Vector3) -> PlayerCommand {
    let delta = math::look_delta_towards(
        camera.position,
        camera.yaw_deg,
        camera.look_pitch_deg,
        point,
    );
    PlayerCommand::Look {
        dx: delta.x,
        dy: delta.y,
    }
}
