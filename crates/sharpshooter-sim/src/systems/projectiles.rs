//! Projectile system: spawning, per-tick advancement, and swept collision.
//!
//! Each tick a projectile moves a fixed distance along its direction. The
//! collision test runs against the whole segment it travelled that tick, so a
//! fast projectile cannot step over the target between two samples.

use hecs::{Entity, World};
use tracing::debug;

use sharpshooter_core::components::{Position, Projectile};
use sharpshooter_core::math;
use sharpshooter_core::types::Vector3;

/// The target as seen by the collision test for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetSample {
    pub position: Vector3,
    pub hit_radius: f64,
}

/// How a projectile ended this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Hit { projectile_id: u32, impact: Vector3 },
    Miss { projectile_id: u32, position: Vector3 },
}

impl Resolution {
    pub fn projectile_id(&self) -> u32 {
        match self {
            Resolution::Hit { projectile_id, .. } | Resolution::Miss { projectile_id, .. } => {
                *projectile_id
            }
        }
    }
}

/// Spawn a projectile at `origin`. `direction` must already be unit length.
pub fn fire(
    world: &mut World,
    next_projectile_id: &mut u32,
    origin: Vector3,
    direction: Vector3,
    speed: f64,
) -> u32 {
    debug_assert!((direction.length() - 1.0).abs() < 1e-6, "direction not normalized");

    let id = *next_projectile_id;
    *next_projectile_id = next_projectile_id.wrapping_add(1);

    world.spawn((
        Position(origin),
        Projectile {
            id,
            direction,
            speed,
            origin,
            ticks_alive: 0,
        },
    ));
    debug!(projectile_id = id, ?origin, ?direction, "projectile fired");
    id
}

/// Advance every projectile one tick and resolve hits and misses.
///
/// All projectiles test against the same `target` sample, so the outcome does
/// not depend on iteration order. Resolved projectiles are despawned after the
/// scan. Results are sorted by projectile id.
pub fn run(
    world: &mut World,
    target: Option<TargetSample>,
    play_bounds: f64,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Resolution> {
    despawn_buffer.clear();
    let mut resolutions = Vec::new();

    for (entity, (pos, projectile)) in world.query_mut::<(&mut Position, &mut Projectile)>() {
        let prev = pos.0;
        pos.0 += projectile.direction * projectile.speed;
        projectile.ticks_alive += 1;
        let curr = pos.0;

        if let Some(target) = target {
            let impact = math::closest_point_on_segment(prev, curr, target.position);
            if impact.distance(target.position) < target.hit_radius {
                resolutions.push(Resolution::Hit {
                    projectile_id: projectile.id,
                    impact,
                });
                despawn_buffer.push(entity);
                continue;
            }
        }

        if curr.x.abs() > play_bounds || curr.z.abs() > play_bounds {
            resolutions.push(Resolution::Miss {
                projectile_id: projectile.id,
                position: curr,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    resolutions.sort_by_key(Resolution::projectile_id);
    resolutions
}

/// Number of projectiles in flight.
pub fn live_count(world: &World) -> usize {
    world.query::<&Projectile>().iter().count()
}
