//! Simulation constants and tuning parameters.
//!
//! Distances are arena units, angles are radians, time is seconds unless
//! a name says ticks.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

/// Default half-extent of the square arena. Positions outside are blocked.
pub const ARENA_HALF_EXTENT: f32 = 20.0;

/// Minimum clearance from obstacles when picking a spawn point.
pub const SPAWN_CLEARANCE: f32 = 1.5;

/// Attempts at finding a free spawn point before falling back to the origin.
pub const SPAWN_ATTEMPTS: u32 = 64;

/// Minimum distance between a random spawn point and any existing unit.
/// Two hulls cannot overlap beyond twice the hull's circumradius (~1.28).
pub const UNIT_SPAWN_SPACING: f32 = 3.0;

// --- Sparky: hull motion ---

/// Forward/backward top speed before the speed multiplier.
pub const SPARKY_MOVE_SPEED: f32 = 2.0;

/// Spring constant pulling velocity toward the desired velocity (1/s).
pub const SPARKY_ACCEL_GAIN: f32 = 4.0;

/// Per-tick multiplicative velocity decay.
pub const SPARKY_FRICTION: f32 = 0.995;

/// Nominal hull turn speed (180 deg/s).
pub const SPARKY_TURN_SPEED: f32 = std::f32::consts::PI;

/// Fraction of the turn speed applied per tick of held turn input.
pub const SPARKY_TURN_STEP: f32 = 0.004;

// --- Sparky: turret ---

/// Below this cursor distance the aim direction is undefined and held.
pub const TURRET_AIM_EPSILON: f32 = 1e-4;

/// Remaining angle below which the turret is considered on target.
pub const TURRET_SETTLE_ANGLE: f32 = 0.01;

/// Angular speed ramp-up while tracking (rad/s per second).
pub const TURRET_START_ACCEL: f32 = 2.0;

/// Angular speed ramp-down once settled (rad/s per second).
pub const TURRET_END_DECEL: f32 = 20.0;

/// Cap on turret angular speed.
pub const TURRET_MAX_SPEED: f32 = 3.0;

// --- Sparky: weapons ---

/// Muzzle offset along the turret's forward axis.
pub const MUZZLE_OFFSET: f32 = 1.2;

/// Muzzle speed of a full-range cannon round.
pub const MUZZLE_SPEED: f32 = 50.0;

/// Fraction of the muzzle velocity fed back into the hull as recoil.
pub const CANNON_RECOIL_FACTOR: f32 = 0.008;

/// Cannon base damage before scaling and falloff.
pub const CANNON_BASE_DAMAGE: f32 = 8.0;

/// Distance at which falloff peaks.
pub const CANNON_OPTIMAL_RANGE: f32 = 4.6;

/// Falloff sharpness: f(d) = exp(-k * ((d - opt) / opt)^2).
pub const FALLOFF_SHARPNESS: f32 = 3.0;

/// Ticks between cannon shots (2 seconds).
pub const CANNON_COOLDOWN_TICKS: u32 = 2 * TICK_RATE;

/// Machine-gun damage per round before scaling.
pub const MACHINE_GUN_DAMAGE: f32 = 0.05;

/// Machine-gun round speed as a fraction of the muzzle speed.
pub const MACHINE_GUN_SPEED_FACTOR: f32 = 0.5;

/// Ticks between machine-gun rounds (0.1 seconds).
pub const MACHINE_GUN_COOLDOWN_TICKS: u32 = TICK_RATE / 10;

// --- Sparky: heat ---

/// Heat at which the barrel is disabled.
pub const HEAT_MAX: f32 = 100.0;

/// Heat added by each cannon shot.
pub const HEAT_PER_SHOT: f32 = 20.0;

/// Heat dissipated per second.
pub const HEAT_DISSIPATION_RATE: f32 = 2.0;

// --- Sparky: silhouette (local frame, +y forward) ---

/// Hull half-width.
pub const HULL_HALF_WIDTH: f32 = 0.8;

/// Rear edge.
pub const HULL_REAR: f32 = -1.0;

/// Front edge.
pub const HULL_FRONT: f32 = 1.0;

/// Bevel constant for the two front corner cuts (|x| + y < bevel).
pub const HULL_BEVEL: f32 = 1.6;

// --- Bullets ---

/// Ticks a bullet lives before despawning (3 seconds).
pub const BULLET_LIFETIME_TICKS: u32 = 3 * TICK_RATE;
