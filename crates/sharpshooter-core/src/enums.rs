//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Aim mode of the scope state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeMode {
    #[default]
    Unscoped,
    Scoped,
}

impl ScopeMode {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            ScopeMode::Unscoped => ScopeMode::Scoped,
            ScopeMode::Scoped => ScopeMode::Unscoped,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}

