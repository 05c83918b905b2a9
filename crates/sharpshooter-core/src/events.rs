//! Events emitted by the simulation for the render and audio collaborators.

use serde::{Deserialize, Serialize};

use crate::types::Vector3;

/// Gameplay events produced during a tick, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A projectile was spawned.
    ProjectileFired {
        projectile_id: u32,
        origin: Vector3,
        direction: Vector3,
    },
    /// A projectile's swept path passed within the target's hit radius.
    TargetHit {
        projectile_id: u32,
        /// Closest point on the projectile's path to the target centre.
        impact: Vector3,
        /// Score after this hit.
        score: u32,
    },
    /// A projectile left the play volume without hitting anything.
    ProjectileMissed {
        projectile_id: u32,
        position: Vector3,
    },
    /// A new target was spawned.
    TargetRespawned { position: Vector3 },
    /// The scope was toggled.
    ScopeToggled { scoped: bool },
}

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A shot was fired.
    Gunshot,
}
