//! Core types and definitions for the SHARPSHOOTER simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vector math, components, commands, state snapshots, events, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod math;
pub mod state;
pub mod types;
