//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::types::{Countdown, Vector3};

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector3);

/// Per-tick displacement. Not scaled by wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vector3);

/// Time left before the entity is despawned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifetime(pub Countdown);

/// An in-flight projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Stable id for the render collaborator.
    pub id: u32,
    /// Unit direction of travel.
    pub direction: Vector3,
    /// Distance travelled per tick.
    pub speed: f64,
    /// Where the projectile was fired from.
    pub origin: Vector3,
    /// Ticks advanced so far.
    pub ticks_alive: u32,
}

/// The shootable target. Exactly one exists while a session is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    pub hit_radius: f64,
    /// Where the target was spawned; patrol displacement is measured from here.
    pub spawn_position: Vector3,
}

/// Lateral back-and-forth motion of the target along x.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Patrol {
    /// Distance per tick.
    pub speed: f64,
    /// +1.0 or -1.0.
    pub direction: f64,
    /// Maximum displacement from spawn before reversing.
    pub bound: f64,
}

/// One spark of a hit burst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
}

/// Short-lived flash at the muzzle on every shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MuzzleFlash {
    pub id: u32,
    /// Time since the flash was spawned.
    pub elapsed_secs: f64,
}

/// A single-instance timed flag, such as the "missed" banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransientMessage {
    pub visible: bool,
    pub remaining: Countdown,
}
