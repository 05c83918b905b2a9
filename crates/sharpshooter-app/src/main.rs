//! Headless sharpshooter host.
//!
//! Starts a session, plays a short scripted round against the live engine,
//! and logs the final score.

use std::time::Duration;

use tracing::{error, info};

use sharpshooter_app::config::load_config;
use sharpshooter_app::game_loop::spawn_game_loop;
use sharpshooter_app::script::look_towards;
use sharpshooter_core::commands::PlayerCommand;

const SHOTS: usize = 5;
const SETTLE: Duration = Duration::from_millis(250);
const BETWEEN_SHOTS: Duration = Duration::from_secs(1);

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() {
    init_tracing();

    let config = load_config();
    let mut state = match spawn_game_loop(config) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "failed to spawn game loop");
            return;
        }
    };

    state.send(PlayerCommand::StartSession);
    std::thread::sleep(SETTLE);

    for shot in 0..SHOTS {
        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        let Some(target) = snapshot.target else {
            continue;
        };
        // Every other shot goes through the scope.
        let scoped = shot % 2 == 1;
        if scoped {
            state.send(PlayerCommand::ToggleScope);
        }
        state.send(look_towards(&snapshot.camera, target.position));
        state.send(PlayerCommand::Fire);
        std::thread::sleep(BETWEEN_SHOTS);
        if scoped {
            state.send(PlayerCommand::ToggleScope);
        }
    }

    // One deliberate miss over the shoulder.
    state.send(PlayerCommand::Look { dx: 900.0, dy: 0.0 });
    state.send(PlayerCommand::Fire);
    std::thread::sleep(BETWEEN_SHOTS);

    let final_snapshot = state.snapshot();
    state.shutdown();

    match final_snapshot {
        Some(snapshot) => info!(
            hits = snapshot.score.hits,
            shots = snapshot.score.shots_fired,
            misses = snapshot.score.misses,
            tick = snapshot.time.tick,
            "session finished"
        ),
        None => error!("no snapshot was produced"),
    }
}
