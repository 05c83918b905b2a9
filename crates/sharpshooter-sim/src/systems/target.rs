//! Target controller: spawning, replacement on hit, and optional patrol.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use sharpshooter_core::components::{Patrol, Position, Target};
use sharpshooter_core::constants::*;
use sharpshooter_core::types::Vector3;

use crate::config::PatrolConfig;
use crate::systems::projectiles::TargetSample;

/// Pick a uniformly random spawn point inside the target field.
pub fn random_spawn_position(rng: &mut ChaCha8Rng) -> Vector3 {
    Vector3::new(
        rng.gen_range(TARGET_SPAWN_X.0..=TARGET_SPAWN_X.1),
        rng.gen_range(TARGET_SPAWN_Y.0..=TARGET_SPAWN_Y.1),
        rng.gen_range(TARGET_SPAWN_Z.0..=TARGET_SPAWN_Z.1),
    )
}

/// Spawn a target at `position`, patrolling if `patrol` is set.
pub fn spawn_at(
    world: &mut World,
    position: Vector3,
    hit_radius: f64,
    patrol: Option<PatrolConfig>,
) -> Entity {
    let target = Target {
        hit_radius,
        spawn_position: position,
    };
    match patrol {
        Some(patrol) => world.spawn((
            Position(position),
            target,
            Patrol {
                speed: patrol.speed,
                direction: 1.0,
                bound: patrol.bound,
            },
        )),
        None => world.spawn((Position(position), target)),
    }
}

/// Replace the current target (if any) with a fresh one at a random position.
///
/// Returns the new entity and its position.
pub fn respawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    current: Option<Entity>,
    hit_radius: f64,
    patrol: Option<PatrolConfig>,
) -> (Entity, Vector3) {
    if let Some(entity) = current {
        let _ = world.despawn(entity);
    }
    let position = random_spawn_position(rng);
    let entity = spawn_at(world, position, hit_radius, patrol);
    info!(?position, "target spawned");
    (entity, position)
}

/// Read the target's position and radius for this tick's collision test.
pub fn sample(world: &World, entity: Option<Entity>) -> Option<TargetSample> {
    let entity = entity?;
    let position = world.get::<&Position>(entity).ok()?.0;
    let hit_radius = world.get::<&Target>(entity).ok()?.hit_radius;
    Some(TargetSample {
        position,
        hit_radius,
    })
}

/// Move patrolling targets along x, reversing once past the bound.
pub fn patrol(world: &mut World) {
    for (_entity, (pos, target, patrol)) in
        world.query_mut::<(&mut Position, &Target, &mut Patrol)>()
    {
        pos.0.x += patrol.speed * patrol.direction;
        if (pos.0.x - target.spawn_position.x).abs() > patrol.bound {
            patrol.direction = -patrol.direction;
        }
    }
}
