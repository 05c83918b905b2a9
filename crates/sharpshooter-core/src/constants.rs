//! Simulation constants and tuning parameters.

use crate::types::{Vector2, Vector3};

/// Simulation tick rate (Hz), one tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Viewport ---

/// Overlay viewport width in pixels.
pub const VIEWPORT_WIDTH: f64 = 1280.0;

/// Overlay viewport height in pixels.
pub const VIEWPORT_HEIGHT: f64 = 720.0;

// --- Aiming ---

/// Eye (aiming pivot) position. The floor sits at y = 50, so this is 70 units above it.
pub const EYE_POSITION: Vector3 = Vector3::new(0.0, -20.0, 0.0);

/// Degrees of rotation per pixel of mouse movement.
pub const LOOK_SENSITIVITY: f64 = 0.2;

/// Pitch limit in degrees (both directions).
pub const PITCH_LIMIT_DEG: f64 = 45.0;

/// Muzzle point in the pivot's local frame: 2.5 below and 25 ahead of the eye.
/// The frame faces -z, so "ahead" is a negative z offset.
pub const MUZZLE_OFFSET: Vector3 = Vector3::new(0.0, 2.5, -25.0);

// --- Projectiles ---

/// Distance a projectile travels each tick.
pub const PROJECTILE_SPEED: f64 = 20.0;

/// Half-extent of the play volume on x and z; beyond it a projectile is a miss.
pub const PLAY_BOUNDS: f64 = 1000.0;

// --- Target ---

/// Hit radius of the target (radius of its outer ring).
pub const TARGET_HIT_RADIUS: f64 = 15.0;

/// Spawn range on x.
pub const TARGET_SPAWN_X: (f64, f64) = (-200.0, 200.0);

/// Spawn range on y (negative is up).
pub const TARGET_SPAWN_Y: (f64, f64) = (-60.0, -10.0);

/// Spawn range on z (negative is downrange).
pub const TARGET_SPAWN_Z: (f64, f64) = (-900.0, -400.0);

/// Lateral patrol speed per tick, when patrolling is enabled.
pub const TARGET_PATROL_SPEED: f64 = 2.0;

/// Maximum lateral displacement from the spawn point before the patrol reverses.
pub const TARGET_PATROL_BOUND: f64 = 200.0;

// --- Scope ---

/// Unscoped field of view (degrees).
pub const DEFAULT_FOV_DEG: f64 = 45.0;

/// Scoped field of view (degrees).
pub const SCOPED_FOV_DEG: f64 = 8.0;

/// Breathing phase upper bound; the phase oscillates in `[0, BREATHING_PHASE_MAX]`.
pub const BREATHING_PHASE_MAX: f64 = 2.0;

/// Breathing phase step per tick.
pub const BREATHING_STEP: f64 = 0.01;

/// Overlay scale gain: scale = 1 + (phase - 1) * gain.
pub const BREATHING_SCALE_GAIN: f64 = 0.02;

/// Overlay offset applied when firing while scoped (pixels, negative y is up).
pub const OVERLAY_RECOIL_KICK: Vector2 = Vector2::new(0.0, -18.0);

/// Per-tick multiplier on the overlay recoil offset.
pub const OVERLAY_RECOIL_DECAY: f64 = 0.92;

/// Pivot kick when firing unscoped (degrees of upward pitch).
pub const PIVOT_KICK_DEG: f64 = 2.0;

/// Pivot kick when firing scoped (degrees of upward pitch).
pub const PIVOT_KICK_SCOPED_DEG: f64 = 3.0;

/// Time before a pivot kick is reverted (seconds).
pub const PIVOT_KICK_DURATION: f64 = 0.060;

// --- Effects ---

/// Particles per hit burst.
pub const HIT_BURST_PARTICLES: usize = 15;

/// Per-axis particle velocity half-range (per tick).
pub const HIT_BURST_SPREAD: f64 = 2.5;

/// Particle lifetime (seconds).
pub const PARTICLE_LIFETIME: f64 = 1.0;

/// Muzzle flash growth time (seconds).
pub const MUZZLE_FLASH_GROW: f64 = 0.050;

/// Muzzle flash fade time; the flash is removed when it ends (seconds).
pub const MUZZLE_FLASH_FADE: f64 = 0.100;

/// Starting scale of the muzzle flash.
pub const MUZZLE_FLASH_MIN_SCALE: f64 = 0.1;

/// How long the miss message stays visible (seconds).
pub const MISS_MESSAGE_DURATION: f64 = 2.0;
