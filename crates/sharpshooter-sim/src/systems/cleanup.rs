//! Cleanup system: counts down lifetimes and removes expired entities.

use hecs::{Entity, World};

use sharpshooter_core::components::Lifetime;

/// Advance every `Lifetime` by `dt` and despawn the ones that elapsed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        if lifetime.0.advance(dt) {
            despawn_buffer.push(entity);
        }
    }

    let expired = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    expired
}
