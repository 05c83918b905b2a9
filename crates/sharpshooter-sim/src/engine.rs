//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player input,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use sharpshooter_core::commands::PlayerCommand;
use sharpshooter_core::components::TransientMessage;
use sharpshooter_core::constants::{
    EYE_POSITION, PIVOT_KICK_DEG, PIVOT_KICK_DURATION, PIVOT_KICK_SCOPED_DEG,
};
use sharpshooter_core::enums::{GamePhase, ScopeMode};
use sharpshooter_core::events::{AudioEvent, SimEvent};
use sharpshooter_core::state::GameStateSnapshot;
use sharpshooter_core::types::SimTime;

use crate::aim::Aim;
use crate::config::{ConfigError, SimConfig};
use crate::scope::{ScopeController, ScopeSettings};
use crate::score::ScoreTracker;
use crate::systems;
use crate::systems::projectiles::Resolution;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    aim: Aim,
    scope: ScopeController,
    score: ScoreTracker,
    miss_message: TransientMessage,
    target: Option<Entity>,
    next_projectile_id: u32,
    next_effect_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// The config is trusted; use [`SimulationEngine::try_new`] for untrusted input.
    pub fn new(config: SimConfig) -> Self {
        let scope = ScopeController::new(ScopeSettings {
            default_fov_deg: config.default_fov_deg,
            scoped_fov_deg: config.scoped_fov_deg,
            recoil_kick: config.overlay_recoil_kick,
        });
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            aim: Aim::new(EYE_POSITION),
            scope,
            score: ScoreTracker::default(),
            miss_message: TransientMessage::default(),
            target: None,
            next_projectile_id: 0,
            next_effect_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Validate `config` and create an engine from it.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance(self.config.dt());
        }

        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.aim.view(self.scope.field_of_view_deg()),
            self.scope.view(),
            self.target,
            &self.miss_message,
            self.score.view(),
            events,
            audio_events,
        )
    }

    /// Spawn the first target and make the session active.
    pub fn start_session(&mut self) {
        if self.phase != GamePhase::MainMenu {
            return;
        }
        self.respawn_target();
        self.phase = GamePhase::Active;
        info!(seed = self.config.seed, "session started");
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Active {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Active;
        }
    }

    /// Apply a mouse-look delta in pixels.
    pub fn on_look(&mut self, dx: f64, dy: f64) {
        self.aim.on_look(dx, dy);
    }

    /// Fire along the current view ray.
    ///
    /// Spawns the projectile and muzzle flash, kicks the aiming pivot and the
    /// scope overlay, and requests the gunshot cue. Returns the projectile id,
    /// or `None` when the session is not active.
    pub fn fire(&mut self) -> Option<u32> {
        if self.phase != GamePhase::Active {
            return None;
        }

        let origin = self.aim.eye();
        let direction = self.aim.forward();
        let projectile_id = systems::projectiles::fire(
            &mut self.world,
            &mut self.next_projectile_id,
            origin,
            direction,
            self.config.projectile_speed,
        );
        systems::effects::spawn_muzzle_flash(
            &mut self.world,
            &mut self.next_effect_id,
            self.aim.muzzle_position(),
        );

        let kick = if self.scope.is_scoped() {
            PIVOT_KICK_SCOPED_DEG
        } else {
            PIVOT_KICK_DEG
        };
        self.aim.kick(kick, PIVOT_KICK_DURATION);
        self.scope.on_fire();
        self.score.on_shot();
        debug!(projectile_id, scoped = self.scope.is_scoped(), "fired");

        self.events.push(SimEvent::ProjectileFired {
            projectile_id,
            origin,
            direction,
        });
        self.audio_events.push(AudioEvent::Gunshot);
        Some(projectile_id)
    }

    /// Enter or leave the scope. Always allowed.
    pub fn toggle_scope(&mut self) -> ScopeMode {
        let mode = self.scope.toggle();
        self.events.push(SimEvent::ScopeToggled {
            scoped: mode == ScopeMode::Scoped,
        });
        mode
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn aim(&self) -> &Aim {
        &self.aim
    }

    pub fn scope(&self) -> &ScopeController {
        &self.scope
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Replace the target with a stationary one at `position` (for tests).
    #[cfg(test)]
    pub fn place_target(&mut self, position: sharpshooter_core::types::Vector3) {
        if let Some(entity) = self.target.take() {
            let _ = self.world.despawn(entity);
        }
        self.target = Some(systems::target::spawn_at(
            &mut self.world,
            position,
            self.config.target_hit_radius,
            None,
        ));
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Look { dx, dy } => self.on_look(dx, dy),
            PlayerCommand::Fire => {
                self.fire();
            }
            PlayerCommand::ToggleScope => {
                self.toggle_scope();
            }
            PlayerCommand::StartSession => self.start_session(),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.config.dt();

        // 1. Scope breathing and overlay recoil
        self.scope.advance();
        // 2. Target patrol
        systems::target::patrol(&mut self.world);
        // 3. Age flashes and the miss message, expire lifetimes. Effects
        //    spawned by this tick's hits and misses are first aged next tick.
        systems::effects::run(&mut self.world, dt, &mut self.miss_message);
        systems::cleanup::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 4. Projectiles: advance, swept collision, bounds
        let target = systems::target::sample(&self.world, self.target);
        let resolutions = systems::projectiles::run(
            &mut self.world,
            target,
            self.config.play_bounds,
            &mut self.despawn_buffer,
        );
        for resolution in resolutions {
            self.resolve(resolution);
        }
        // 5. Particle motion
        systems::movement::run(&mut self.world);
        // 6. Pivot kick revert
        self.aim.advance(dt);
    }

    fn resolve(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Hit {
                projectile_id,
                impact,
            } => {
                let score = self.score.on_hit();
                info!(projectile_id, score, ?impact, "target hit");
                self.events.push(SimEvent::TargetHit {
                    projectile_id,
                    impact,
                    score,
                });
                systems::effects::spawn_hit_burst(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.next_effect_id,
                    impact,
                );
                self.respawn_target();
            }
            Resolution::Miss {
                projectile_id,
                position,
            } => {
                self.score.on_miss();
                debug!(projectile_id, ?position, "projectile missed");
                self.events.push(SimEvent::ProjectileMissed {
                    projectile_id,
                    position,
                });
                systems::effects::show_miss_message(&mut self.miss_message);
            }
        }
    }

    fn respawn_target(&mut self) {
        let (entity, position) = systems::target::respawn(
            &mut self.world,
            &mut self.rng,
            self.target,
            self.config.target_hit_radius,
            self.config.target_patrol,
        );
        self.target = Some(entity);
        self.events.push(SimEvent::TargetRespawned { position });
    }
}
