//! Effect system: hit bursts, muzzle flashes, and the miss message.
//!
//! Effects are purely visual and timed. Particles move every tick; expiry is
//! handled by `cleanup` from their `Lifetime`, independent of motion.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sharpshooter_core::components::*;
use sharpshooter_core::constants::*;
use sharpshooter_core::types::{Countdown, Vector3};

/// Spawn a burst of `HIT_BURST_PARTICLES` sparks at `at`. Returns their ids.
pub fn spawn_hit_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_effect_id: &mut u32,
    at: Vector3,
) -> Vec<u32> {
    let mut ids = Vec::with_capacity(HIT_BURST_PARTICLES);
    for _ in 0..HIT_BURST_PARTICLES {
        let velocity = Vector3::new(
            rng.gen_range(-HIT_BURST_SPREAD..=HIT_BURST_SPREAD),
            rng.gen_range(-HIT_BURST_SPREAD..=HIT_BURST_SPREAD),
            rng.gen_range(-HIT_BURST_SPREAD..=HIT_BURST_SPREAD),
        );
        let id = take_id(next_effect_id);
        world.spawn((
            Particle { id },
            Position(at),
            Velocity(velocity),
            Lifetime(Countdown::new(PARTICLE_LIFETIME)),
        ));
        ids.push(id);
    }
    ids
}

/// Spawn a muzzle flash at `at`.
pub fn spawn_muzzle_flash(world: &mut World, next_effect_id: &mut u32, at: Vector3) -> u32 {
    let id = take_id(next_effect_id);
    world.spawn((
        MuzzleFlash {
            id,
            elapsed_secs: 0.0,
        },
        Position(at),
        Lifetime(Countdown::new(MUZZLE_FLASH_FADE)),
    ));
    id
}

/// Show the miss message. A miss while it is already showing does not extend it.
///
/// Returns whether the message was newly shown.
pub fn show_miss_message(message: &mut TransientMessage) -> bool {
    if message.visible {
        return false;
    }
    message.visible = true;
    message.remaining = Countdown::new(MISS_MESSAGE_DURATION);
    true
}

/// Age muzzle flashes and count down the miss message.
pub fn run(world: &mut World, dt: f64, miss_message: &mut TransientMessage) {
    for (_entity, flash) in world.query_mut::<&mut MuzzleFlash>() {
        flash.elapsed_secs += dt;
    }

    if miss_message.visible && miss_message.remaining.advance(dt) {
        miss_message.visible = false;
    }
}

/// Flash scale: grows linearly from `MUZZLE_FLASH_MIN_SCALE` to 1.0 over the growth time.
pub fn muzzle_flash_scale(elapsed_secs: f64) -> f64 {
    let t = (elapsed_secs / MUZZLE_FLASH_GROW).clamp(0.0, 1.0);
    MUZZLE_FLASH_MIN_SCALE + (1.0 - MUZZLE_FLASH_MIN_SCALE) * t
}

/// Flash opacity: fades linearly from 1.0 to 0.0 over the fade time.
pub fn muzzle_flash_opacity(elapsed_secs: f64) -> f64 {
    1.0 - (elapsed_secs / MUZZLE_FLASH_FADE).clamp(0.0, 1.0)
}

fn take_id(next_effect_id: &mut u32) -> u32 {
    let id = *next_effect_id;
    *next_effect_id = next_effect_id.wrapping_add(1);
    id
}
