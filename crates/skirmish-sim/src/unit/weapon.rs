//! Dual-mode turret weapon gated by cooldown and heat.
//!
//! Cannon shells are range-sensitive: the same falloff factor scales both
//! their damage and their launch speed. Machine-gun rounds are flat damage,
//! half speed, and generate no heat or recoil.

use glam::Vec2;

use skirmish_core::config::SparkyTuning;
use skirmish_core::enums::{FireState, WeaponMode};
use skirmish_core::types::{rotate, Pose};

use crate::unit::falloff::falloff;

/// A shot that left the barrel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub mode: WeaponMode,
    /// Muzzle position (world).
    pub position: Vec2,
    /// Turret angle at fire time (world).
    pub rotation: f32,
    pub damage: f32,
    /// World-space launch velocity.
    pub velocity: Vec2,
    /// Hull-local impulse to subtract from the firing unit's velocity.
    pub recoil: Vec2,
}

/// Heat is capped at `heat_max` when a shot lands and sheds
/// `heat_dissipation_rate * dt` later in the same tick. With the default
/// tuning a saturated barrel is therefore below the cap again by the next
/// fire check, and sustained fire never reaches `Overheated`. Lowering the
/// dissipation rate to zero, or shortening the cannon cooldown below the
/// time it takes to shed `heat_per_shot`, makes overheating bite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Weapon {
    pub mode: WeaponMode,
    /// Always within [0, heat_max].
    pub heat: f32,
    pub cooldown_ticks: u32,
}

impl Weapon {
    /// Reloading wins over Overheated when both apply.
    pub fn fire_state(&self, heat_max: f32) -> FireState {
        if self.cooldown_ticks > 0 {
            FireState::Reloading
        } else if self.heat >= heat_max {
            FireState::Overheated
        } else {
            FireState::Ready
        }
    }

    /// Fire at `cursor` if ready. Sets cooldown and heat for the mode.
    pub fn try_fire(
        &mut self,
        hull: &Pose,
        turret_rotation: f32,
        cursor: Vec2,
        damage_scale: f32,
        tuning: &SparkyTuning,
    ) -> Option<Shot> {
        if self.fire_state(tuning.heat_max) != FireState::Ready {
            return None;
        }

        let muzzle = hull.position + rotate(Vec2::new(0.0, tuning.muzzle_offset), turret_rotation);
        let muzzle_velocity = rotate(Vec2::new(0.0, tuning.muzzle_speed), turret_rotation);
        let range_factor = falloff(cursor.distance(muzzle), tuning.optimal_range);

        let shot = match self.mode {
            WeaponMode::Cannon => {
                self.cooldown_ticks = tuning.cannon_cooldown_ticks;
                self.heat = (self.heat + tuning.heat_per_shot).min(tuning.heat_max);
                Shot {
                    mode: WeaponMode::Cannon,
                    position: muzzle,
                    rotation: turret_rotation,
                    damage: tuning.cannon_damage * damage_scale * range_factor,
                    velocity: muzzle_velocity * range_factor,
                    // Recoil acts along the barrel as seen from the hull.
                    recoil: rotate(
                        Vec2::new(0.0, tuning.muzzle_speed),
                        turret_rotation - hull.rotation,
                    ) * tuning.recoil_factor,
                }
            }
            WeaponMode::MachineGun => {
                self.cooldown_ticks = tuning.machine_gun_cooldown_ticks;
                Shot {
                    mode: WeaponMode::MachineGun,
                    position: muzzle,
                    rotation: turret_rotation,
                    damage: tuning.machine_gun_damage * damage_scale,
                    velocity: muzzle_velocity * tuning.machine_gun_speed_factor,
                    recoil: Vec2::ZERO,
                }
            }
        };
        Some(shot)
    }

    /// Per-tick cooldown countdown.
    pub fn cool_down(&mut self) {
        self.cooldown_ticks = self.cooldown_ticks.saturating_sub(1);
    }

    /// Shed `amount` heat, floored at zero.
    pub fn dissipate(&mut self, amount: f32) {
        self.heat = (self.heat - amount).max(0.0);
    }

    pub fn toggle_mode(&mut self) -> WeaponMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}
