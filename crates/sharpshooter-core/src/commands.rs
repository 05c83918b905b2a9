//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Aiming ---
    /// Mouse movement in pixels since the last look event.
    Look { dx: f64, dy: f64 },
    /// Fire along the current view ray.
    Fire,
    /// Enter or leave the scope.
    ToggleScope,

    // --- Session control ---
    /// Spawn the first target and start the session.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
