//! Game state snapshot: everything the render collaborator needs for one frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, SimEvent};
use crate::types::{SimTime, Vector2, Vector3};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: CameraView,
    pub scope: ScopeView,
    pub target: Option<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub muzzle_flashes: Vec<MuzzleFlashView>,
    pub miss_message_visible: bool,
    pub score: ScoreView,
    pub events: Vec<SimEvent>,
    pub audio_events: Vec<AudioEvent>,
}

/// Camera pose and lens.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vector3,
    /// Yaw in degrees, unbounded.
    pub yaw_deg: f64,
    /// Pitch in degrees including any active recoil kick.
    pub pitch_deg: f64,
    /// Pitch from mouse look alone, without recoil kicks.
    pub look_pitch_deg: f64,
    /// Vertical field of view in degrees.
    pub field_of_view_deg: f64,
}

/// Scope overlay transform and visibility.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScopeView {
    pub mode: ScopeMode,
    /// Whether the detailed reticle overlay is shown.
    pub overlay_visible: bool,
    pub breathing_phase: f64,
    /// Uniform scale applied to the overlay.
    pub overlay_scale: f64,
    /// Overlay translation in pixels: breathing recentring plus recoil.
    pub overlay_translation: Vector2,
    pub recoil_offset: Vector2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub position: Vector3,
    pub hit_radius: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vector3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u32,
    pub position: Vector3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MuzzleFlashView {
    pub id: u32,
    pub position: Vector3,
    pub scale: f64,
    pub opacity: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub hits: u32,
    pub shots_fired: u32,
    pub misses: u32,
}
