//! Per-tick systems over the hecs world.
//!
//! Each system is a free function over `World`. Anything that outlives a tick
//! lives in components or on `SimulationEngine`.

pub mod cleanup;
pub mod effects;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod target;
