//! Kinematic integration for particles.
//!
//! Velocity is a per-tick displacement: position += velocity, no damping.
//! Projectiles are advanced by the projectile system instead.

use hecs::World;

use sharpshooter_core::components::{Position, Velocity};

/// Run integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }
}
