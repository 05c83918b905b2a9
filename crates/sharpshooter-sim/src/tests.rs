//! Tests for the simulation engine: input intake, tick ordering, and scenarios.

use sharpshooter_core::commands::PlayerCommand;
use sharpshooter_core::components::Particle;
use sharpshooter_core::constants::*;
use sharpshooter_core::enums::*;
use sharpshooter_core::events::{AudioEvent, SimEvent};
use sharpshooter_core::math;
use sharpshooter_core::state::GameStateSnapshot;
use sharpshooter_core::types::{Vector2, Vector3};

use crate::config::{ConfigError, PatrolConfig, SimConfig};
use crate::engine::SimulationEngine;

fn started_engine(seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartSession);
    engine.tick();
    engine
}

fn hits(snapshot: &GameStateSnapshot) -> usize {
    snapshot
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::TargetHit { .. }))
        .count()
}

fn misses(snapshot: &GameStateSnapshot) -> usize {
    snapshot
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::ProjectileMissed { .. }))
        .count()
}

/// Turn the aim so the view ray passes through `point`.
fn aim_at(engine: &mut SimulationEngine, point: Vector3) {
    let aim = engine.aim();
    let delta = math::look_delta_towards(aim.eye(), aim.yaw_deg(), aim.pitch_deg(), point);
    engine.on_look(delta.x, delta.y);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(12345);
    let mut engine_b = started_engine(12345);

    for i in 0..600 {
        if i % 40 == 0 {
            let look = PlayerCommand::Look {
                dx: (i % 7) as f64 * 3.0 - 9.0,
                dy: (i % 5) as f64 - 2.0,
            };
            engine_a.queue_commands([look, PlayerCommand::Fire]);
            engine_b.queue_commands([look, PlayerCommand::Fire]);
        }
        if i == 100 || i == 300 {
            engine_a.queue_command(PlayerCommand::ToggleScope);
            engine_b.queue_command(PlayerCommand::ToggleScope);
        }
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });
    engine_a.queue_command(PlayerCommand::StartSession);
    engine_b.queue_command(PlayerCommand::StartSession);

    let target_a = engine_a.tick().target.unwrap().position;
    let target_b = engine_b.tick().target.unwrap().position;
    assert_ne!(target_a, target_b, "Different seeds should spawn different targets");
}

// ---- Tick timing ----

#[test]
fn test_tick_timing_60_ticks_one_second() {
    let mut engine = started_engine(1);
    for _ in 0..59 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 60);
    assert!(
        (engine.time().elapsed_secs - 1.0).abs() < 1e-10,
        "60 ticks should equal 1.0 seconds, got {}",
        engine.time().elapsed_secs
    );
}

// ---- Phase gating ----

#[test]
fn test_session_phase_gating() {
    let mut engine = SimulationEngine::new(SimConfig::default());

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert!(snap.target.is_none());
    assert_eq!(snap.time.tick, 0);
    assert_eq!(engine.fire(), None, "Cannot fire before the session starts");

    engine.queue_command(PlayerCommand::StartSession);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(snap.target.is_some());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::TargetRespawned { .. })));

    // Starting again while Active is a no-op.
    let target = engine.target();
    engine.queue_command(PlayerCommand::StartSession);
    let snap = engine.tick();
    assert_eq!(engine.target(), target);
    assert!(snap.events.is_empty());
}

#[test]
fn test_pause_stops_simulation() {
    let mut engine = started_engine(5);
    for _ in 0..9 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 10);

    engine.fire();
    engine.queue_command(PlayerCommand::Pause);
    let before = engine.tick().projectiles[0].position;
    for _ in 0..10 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        assert_eq!(snap.projectiles[0].position, before, "Paused projectiles must not move");
    }
    assert_eq!(engine.time().tick, 10, "Time should not advance while paused");
    assert_eq!(engine.fire(), None);

    engine.queue_command(PlayerCommand::Resume);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 20);
    assert_eq!(engine.phase(), GamePhase::Active);
}

// ---- Scenario A: straight shot ----

#[test]
fn test_hit_on_tick_20_scores_and_respawns() {
    let mut engine = started_engine(7);
    let target_pos = EYE_POSITION + Vector3::new(0.0, 0.0, -400.0);
    engine.place_target(target_pos);
    let old_target = engine.target();

    let id = engine.fire().unwrap();
    for tick in 1..20 {
        let snap = engine.tick();
        assert_eq!(hits(&snap), 0, "early hit on tick {tick}");
        assert_eq!(snap.projectiles.len(), 1);
    }

    let snap = engine.tick();
    let hit = snap
        .events
        .iter()
        .find_map(|e| match e {
            SimEvent::TargetHit {
                projectile_id,
                impact,
                score,
            } => Some((*projectile_id, *impact, *score)),
            _ => None,
        })
        .expect("hit on tick 20");
    assert_eq!(hit.0, id);
    assert!((hit.1 - target_pos).length() < 1e-9);
    assert_eq!(hit.2, 1);

    assert_eq!(snap.score.hits, 1);
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.particles.len(), HIT_BURST_PARTICLES);
    assert_ne!(engine.target(), old_target, "Target must be replaced on hit");
    assert!(!engine.world().contains(old_target.unwrap()));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::TargetRespawned { .. })));

    let new_target = snap.target.unwrap();
    assert!((-200.0..=200.0).contains(&new_target.position.x));
    assert!((-60.0..=-10.0).contains(&new_target.position.y));
    assert!((-900.0..=-400.0).contains(&new_target.position.z));
    assert_eq!(new_target.hit_radius, TARGET_HIT_RADIUS);
}

// ---- Scenario B: shot away from the target ----

#[test]
fn test_miss_on_tick_51_shows_message_for_two_seconds() {
    let mut engine = started_engine(8);
    engine.place_target(Vector3::new(500.0, -20.0, 0.0));
    // Turn around to face +z.
    engine.on_look(180.0 / LOOK_SENSITIVITY, 0.0);
    engine.fire();

    for tick in 1..=50 {
        let snap = engine.tick();
        assert_eq!(misses(&snap), 0, "early miss on tick {tick}");
        assert!(!snap.miss_message_visible);
    }
    let snap = engine.tick();
    assert_eq!(misses(&snap), 1);
    assert_eq!(hits(&snap), 0);
    assert!(snap.miss_message_visible);
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.score.misses, 1);
    assert_eq!(snap.score.hits, 0);

    // Visible for 120 snapshots, counting the tick it appeared on.
    for _ in 0..119 {
        assert!(engine.tick().miss_message_visible);
    }
    assert!(!engine.tick().miss_message_visible);
}

// ---- Scenario C: scope ----

#[test]
fn test_scope_toggle_changes_fov_and_resets_overlay() {
    let mut engine = started_engine(9);
    let snap = engine.tick();
    assert_eq!(snap.camera.field_of_view_deg, 45.0);
    assert!(!snap.scope.overlay_visible);

    engine.queue_command(PlayerCommand::ToggleScope);
    let snap = engine.tick();
    assert!(snap.camera.field_of_view_deg <= 10.0);
    assert!(snap.scope.overlay_visible);
    assert_eq!(snap.scope.mode, ScopeMode::Scoped);
    assert!(snap.events.contains(&SimEvent::ScopeToggled { scoped: true }));

    let mut last_phase = snap.scope.breathing_phase;
    for _ in 0..20 {
        let snap = engine.tick();
        assert!(snap.scope.breathing_phase > last_phase);
        last_phase = snap.scope.breathing_phase;
    }

    engine.queue_command(PlayerCommand::ToggleScope);
    let snap = engine.tick();
    assert_eq!(snap.camera.field_of_view_deg, 45.0);
    assert_eq!(snap.scope.overlay_scale, 1.0);
    assert_eq!(snap.scope.overlay_translation, Vector2::ZERO);
    assert_eq!(snap.scope.breathing_phase, 0.0);
}

#[test]
fn test_scope_toggle_works_outside_session() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.toggle_scope(), ScopeMode::Scoped);
    let snap = engine.tick();
    assert!(snap.camera.field_of_view_deg <= 10.0);
    // No ticks run in the menu, so breathing does not advance.
    assert_eq!(snap.scope.breathing_phase, 0.0);
}

#[test]
fn test_scoped_fire_kicks_overlay_and_decays() {
    let mut engine = started_engine(10);
    engine.toggle_scope();
    engine.fire();

    let mut prev = OVERLAY_RECOIL_KICK.length();
    for _ in 0..120 {
        let snap = engine.tick();
        let magnitude = snap.scope.recoil_offset.length();
        assert!(magnitude < prev, "recoil must shrink every tick");
        assert!(magnitude > 0.0);
        prev = magnitude;
    }
}

#[test]
fn test_unscoped_fire_does_not_kick_overlay() {
    let mut engine = started_engine(10);
    engine.fire();
    let snap = engine.tick();
    assert_eq!(snap.scope.recoil_offset, Vector2::ZERO);
}

// ---- Pivot kick ----

#[test]
fn test_pivot_kick_reverts_after_60ms() {
    for (scoped, expected) in [(false, PIVOT_KICK_DEG), (true, PIVOT_KICK_SCOPED_DEG)] {
        let mut engine = started_engine(11);
        if scoped {
            engine.toggle_scope();
        }
        engine.fire();
        assert!((engine.aim().effective_pitch_deg() - expected).abs() < 1e-12);

        for _ in 0..3 {
            let snap = engine.tick();
            assert!((snap.camera.pitch_deg - expected).abs() < 1e-12);
        }
        let snap = engine.tick();
        assert_eq!(snap.camera.pitch_deg, 0.0, "kick should revert, scoped = {scoped}");
    }
}

// ---- Scenario D: hit burst lifetime ----

#[test]
fn test_hit_burst_lives_one_second() {
    let mut engine = started_engine(12);
    engine.place_target(EYE_POSITION + Vector3::new(0.0, 0.0, -100.0));
    engine.fire();

    let mut hit_seen = false;
    for _ in 0..5 {
        if hits(&engine.tick()) > 0 {
            hit_seen = true;
            break;
        }
    }
    assert!(hit_seen, "Target 100 units ahead is hit within 5 ticks");

    let particle_count =
        |engine: &SimulationEngine| engine.world().query::<&Particle>().iter().count();
    assert_eq!(particle_count(&engine), HIT_BURST_PARTICLES);

    // Hit tick counts as the first of 60 visible snapshots.
    for _ in 0..59 {
        engine.tick();
        assert_eq!(particle_count(&engine), HIT_BURST_PARTICLES);
    }
    let snap = engine.tick();
    assert_eq!(particle_count(&engine), 0);
    assert!(snap.particles.is_empty());
}

#[test]
fn test_effects_from_a_tick_last_their_full_duration() {
    // Miss: count snapshots with the message up.
    let mut engine = started_engine(18);
    engine.place_target(Vector3::new(500.0, -20.0, 0.0));
    engine.on_look(180.0 / LOOK_SENSITIVITY, 0.0);
    engine.fire();
    let mut message_frames = 0;
    for _ in 0..300 {
        if engine.tick().miss_message_visible {
            message_frames += 1;
        }
    }
    assert_eq!(message_frames, 120);

    // Hit: count snapshots with sparks in them.
    let mut engine = started_engine(18);
    engine.place_target(EYE_POSITION + Vector3::new(0.0, 0.0, -100.0));
    engine.fire();
    let mut particle_frames = 0;
    for _ in 0..200 {
        if !engine.tick().particles.is_empty() {
            particle_frames += 1;
        }
    }
    assert_eq!(particle_frames, 60);
}

// ---- Fire side effects ----

#[test]
fn test_fire_emits_flash_audio_and_event() {
    let mut engine = started_engine(13);
    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();

    assert_eq!(snap.audio_events, vec![AudioEvent::Gunshot]);
    assert_eq!(snap.score.shots_fired, 1);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.muzzle_flashes.len(), 1);
    let flash = snap.muzzle_flashes[0];
    assert!(flash.scale > MUZZLE_FLASH_MIN_SCALE && flash.scale <= 1.0);
    assert!(flash.opacity < 1.0 && flash.opacity > 0.0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::ProjectileFired { .. })));

    // Gone after 100 ms, counting the fire tick.
    for _ in 0..4 {
        assert_eq!(engine.tick().muzzle_flashes.len(), 1);
    }
    assert!(engine.tick().muzzle_flashes.is_empty());
}

#[test]
fn test_projectile_follows_view_ray() {
    let mut engine = started_engine(14);
    engine.on_look(50.0, -30.0);
    let direction = engine.aim().forward();
    let origin = engine.aim().eye();
    let id = engine.fire().unwrap();

    for n in 1..=10 {
        let snap = engine.tick();
        let Some(p) = snap.projectiles.iter().find(|p| p.id == id) else {
            // Could only disappear by hitting the random target.
            assert!(hits(&snap) > 0);
            return;
        };
        let expected = origin + direction * PROJECTILE_SPEED * n as f64;
        assert!((p.position - expected).length() < 1e-6);
    }
}

// ---- Score ----

#[test]
fn test_aimed_shots_hit_and_score_by_one() {
    let mut engine = started_engine(15);
    for round in 1..=10u32 {
        let target = engine.tick().target.unwrap().position;
        aim_at(&mut engine, target);
        engine.fire();

        let mut scored = false;
        for _ in 0..60 {
            let snap = engine.tick();
            if hits(&snap) > 0 {
                assert_eq!(hits(&snap), 1);
                assert_eq!(snap.score.hits, round);
                scored = true;
                break;
            }
        }
        assert!(scored, "aimed shot {round} should hit");
        // Let the pivot kick revert before the next shot.
        for _ in 0..5 {
            engine.tick();
        }
    }
    assert_eq!(engine.score().hits(), 10);
}

#[test]
fn test_score_never_decreases() {
    let mut engine = started_engine(16);
    let mut last = 0;
    let mut hit_events = 0;
    for i in 0..3000u32 {
        if i % 13 == 0 {
            let target = engine.tick().target.unwrap().position;
            // Alternate aimed and wild shots.
            if i % 2 == 0 {
                aim_at(&mut engine, target);
            } else {
                engine.on_look(37.0, 11.0);
            }
            engine.fire();
        }
        let snap = engine.tick();
        hit_events += hits(&snap) as u32;
        assert!(snap.score.hits >= last);
        assert_eq!(snap.score.hits, hit_events);
        last = snap.score.hits;
    }
    assert!(last > 0);
}

// ---- Patrol ----

#[test]
fn test_patrolling_target_moves_laterally() {
    let mut engine = SimulationEngine::new(SimConfig {
        target_patrol: Some(PatrolConfig::default()),
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartSession);
    let start = engine.tick().target.unwrap().position;
    let later = {
        for _ in 0..9 {
            engine.tick();
        }
        engine.tick().target.unwrap().position
    };
    assert!((later.x - start.x).abs() > 0.0);
    assert_eq!(later.y, start.y);
    assert_eq!(later.z, start.z);
}

// ---- Config ----

#[test]
fn test_try_new_rejects_invalid_config() {
    let result = SimulationEngine::try_new(SimConfig {
        target_hit_radius: -1.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::NonPositive { .. })));
    assert!(SimulationEngine::try_new(SimConfig::default()).is_ok());
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut engine = started_engine(17);
    engine.toggle_scope();
    engine.fire();
    let snap = engine.tick();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.projectiles.len(), 1);
    assert_eq!(back.scope.mode, ScopeMode::Scoped);
    assert_eq!(back.score.shots_fired, 1);
}
