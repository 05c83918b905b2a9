//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use sharpshooter_core::commands::PlayerCommand;
use sharpshooter_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type SnapshotSlot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Host-side handle to a running game loop.
pub struct AppState {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SnapshotSlot,
    thread: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SnapshotSlot,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward a player command. Returns false once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Clone of the most recent snapshot, if a tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for its thread to exit.
    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("game loop thread panicked");
            }
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
