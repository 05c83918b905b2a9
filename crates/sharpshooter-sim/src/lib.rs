//! Simulation engine for SHARPSHOOTER.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the render collaborator.

pub mod aim;
pub mod config;
pub mod engine;
pub mod scope;
pub mod score;
pub mod systems;

pub use config::{ConfigError, PatrolConfig, SimConfig};
pub use engine::SimulationEngine;
pub use sharpshooter_core as core;

#[cfg(test)]
mod tests;
