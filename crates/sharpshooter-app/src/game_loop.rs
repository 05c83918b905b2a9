//! Game loop thread: runs the simulation engine at a fixed rate.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive over an `mpsc` channel; each tick's snapshot is
//! stored in the shared slot for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use sharpshooter_core::constants::TICK_RATE;
use sharpshooter_sim::{SimConfig, SimulationEngine};

use crate::state::{AppState, GameLoopCommand, SnapshotSlot};

/// Nominal duration of one tick at the default rate.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawn the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> io::Result<AppState> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SnapshotSlot = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("sharpshooter-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, &slot))?;

    Ok(AppState::new(cmd_tx, latest_snapshot, thread))
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<sharpshooter_core::state::GameStateSnapshot>>,
) {
    let period = tick_duration(config.tick_rate);
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    info!(?period, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (pause is handled by the engine)
        let snapshot = engine.tick();

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next deadline
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > period * 2 {
            debug!(behind = ?(now - next_tick_time), "game loop fell behind, resetting deadline");
            next_tick_time = now;
        }
    }
}
