//! Headless host for the sharpshooter simulation.
//!
//! Runs the engine on a fixed-rate game loop thread, forwards commands to it
//! over a channel, and keeps the latest snapshot for polling.

pub mod config;
pub mod game_loop;
pub mod script;
pub mod state;

pub use sharpshooter_core as core;
