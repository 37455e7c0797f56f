//! Tunable configuration, loadable from JSON.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::types::Rect;

/// Gameplay tuning for the Sparky archetype.
///
/// Defaults come from `constants`. Missing JSON fields fall back to them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkyTuning {
    pub move_speed: f32,
    pub accel_gain: f32,
    pub friction: f32,
    pub turn_speed: f32,
    pub turn_step: f32,

    pub turret_start_accel: f32,
    pub turret_end_decel: f32,
    pub turret_max_speed: f32,
    pub turret_settle_angle: f32,

    pub muzzle_offset: f32,
    pub muzzle_speed: f32,
    pub recoil_factor: f32,
    pub cannon_damage: f32,
    /// Divides the falloff offset, so JSON must give a positive value.
    #[serde(deserialize_with = "positive_range")]
    pub optimal_range: f32,
    pub cannon_cooldown_ticks: u32,
    pub machine_gun_damage: f32,
    pub machine_gun_speed_factor: f32,
    pub machine_gun_cooldown_ticks: u32,

    pub heat_max: f32,
    pub heat_per_shot: f32,
    pub heat_dissipation_rate: f32,
}

impl Default for SparkyTuning {
    fn default() -> Self {
        Self {
            move_speed: SPARKY_MOVE_SPEED,
            accel_gain: SPARKY_ACCEL_GAIN,
            friction: SPARKY_FRICTION,
            turn_speed: SPARKY_TURN_SPEED,
            turn_step: SPARKY_TURN_STEP,

            turret_start_accel: TURRET_START_ACCEL,
            turret_end_decel: TURRET_END_DECEL,
            turret_max_speed: TURRET_MAX_SPEED,
            turret_settle_angle: TURRET_SETTLE_ANGLE,

            muzzle_offset: MUZZLE_OFFSET,
            muzzle_speed: MUZZLE_SPEED,
            recoil_factor: CANNON_RECOIL_FACTOR,
            cannon_damage: CANNON_BASE_DAMAGE,
            optimal_range: CANNON_OPTIMAL_RANGE,
            cannon_cooldown_ticks: CANNON_COOLDOWN_TICKS,
            machine_gun_damage: MACHINE_GUN_DAMAGE,
            machine_gun_speed_factor: MACHINE_GUN_SPEED_FACTOR,
            machine_gun_cooldown_ticks: MACHINE_GUN_COOLDOWN_TICKS,

            heat_max: HEAT_MAX,
            heat_per_shot: HEAT_PER_SHOT,
            heat_dissipation_rate: HEAT_DISSIPATION_RATE,
        }
    }
}

fn positive_range<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let range = f32::deserialize(deserializer)?;
    if range.is_finite() && range > 0.0 {
        Ok(range)
    } else {
        Err(serde::de::Error::custom(format!(
            "optimal_range must be positive, got {range}"
        )))
    }
}

/// Configuration for starting a new arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed for determinism. Same seed = same spawn points.
    pub seed: u64,
    /// Playable area. Anything outside is blocked.
    pub bounds: Rect,
    pub sparky: SparkyTuning,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: Rect::centered(ARENA_HALF_EXTENT),
            sparky: SparkyTuning::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse a config from JSON. Omitted fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
