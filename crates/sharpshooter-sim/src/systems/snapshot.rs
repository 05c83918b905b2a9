//! Builds the per-tick `GameStateSnapshot` handed to the render collaborator.
//!
//! Read-only over the world. Entity lists are sorted by id.

use hecs::{Entity, World};

use sharpshooter_core::components::*;
use sharpshooter_core::enums::GamePhase;
use sharpshooter_core::events::{AudioEvent, SimEvent};
use sharpshooter_core::state::*;
use sharpshooter_core::types::SimTime;

use crate::systems::effects;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    camera: CameraView,
    scope: ScopeView,
    target: Option<Entity>,
    miss_message: &TransientMessage,
    score: ScoreView,
    events: Vec<SimEvent>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        camera,
        scope,
        target: build_target(world, target),
        projectiles: build_projectiles(world),
        particles: build_particles(world),
        muzzle_flashes: build_muzzle_flashes(world),
        miss_message_visible: miss_message.visible,
        score,
        events,
        audio_events,
    }
}

fn build_target(world: &World, target: Option<Entity>) -> Option<TargetView> {
    let entity = target?;
    let position = world.get::<&Position>(entity).ok()?.0;
    let hit_radius = world.get::<&Target>(entity).ok()?.hit_radius;
    Some(TargetView {
        position,
        hit_radius,
    })
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(_, (pos, projectile))| ProjectileView {
            id: projectile.id,
            position: pos.0,
        })
        .collect();

    views.sort_by_key(|p| p.id);
    views
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut views: Vec<ParticleView> = world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            id: particle.id,
            position: pos.0,
        })
        .collect();

    views.sort_by_key(|p| p.id);
    views
}

fn build_muzzle_flashes(world: &World) -> Vec<MuzzleFlashView> {
    let mut views: Vec<MuzzleFlashView> = world
        .query::<(&Position, &MuzzleFlash)>()
        .iter()
        .map(|(_, (pos, flash))| MuzzleFlashView {
            id: flash.id,
            position: pos.0,
            scale: effects::muzzle_flash_scale(flash.elapsed_secs),
            opacity: effects::muzzle_flash_opacity(flash.elapsed_secs),
        })
        .collect();

    views.sort_by_key(|f| f.id);
    views
}
