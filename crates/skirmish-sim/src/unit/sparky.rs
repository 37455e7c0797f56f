//! Sparky: a light tank with a free-spinning turret and a cannon /
//! machine-gun pair sharing one heat budget.
//!
//! Per tick: drive the hull, track the cursor with the turret, try to fire,
//! count the cooldown down, apply friction, dissipate heat, then handle the
//! weapon toggle. Without a controlling player only the passive steps run.

use glam::Vec2;

use skirmish_core::config::SparkyTuning;
use skirmish_core::constants::DT;
use skirmish_core::enums::{BulletKind, FireState};
use skirmish_core::events::ArenaEvent;
use skirmish_core::input::{InputSnapshot, Key};
use skirmish_core::types::Pose;

use crate::context::{BulletSpawn, UnitContext};
use crate::unit::turret::Turret;
use crate::unit::weapon::Weapon;
use crate::unit::{hull, kinematics, Unit, UnitFrame, UnitStatus};

#[derive(Debug, Clone)]
pub struct Sparky {
    pub tuning: SparkyTuning,
    /// Hull-local velocity.
    pub velocity: Vec2,
    pub turret: Turret,
    pub weapon: Weapon,
}

impl Sparky {
    pub fn new(tuning: SparkyTuning) -> Self {
        Self {
            tuning,
            velocity: Vec2::ZERO,
            turret: Turret::default(),
            weapon: Weapon::default(),
        }
    }

    pub fn fire_state(&self) -> FireState {
        self.weapon.fire_state(self.tuning.heat_max)
    }

    fn fire(&mut self, frame: &UnitFrame, input: &InputSnapshot, ctx: &mut dyn UnitContext) {
        let damage_scale = ctx.damage_scale(frame.unit_id);
        let Some(shot) = self.weapon.try_fire(
            &frame.pose,
            self.turret.rotation,
            input.cursor,
            damage_scale,
            &self.tuning,
        ) else {
            return;
        };

        self.velocity -= shot.recoil;
        ctx.spawn_bullet(BulletSpawn {
            kind: BulletKind::CannonBall,
            owner: frame.unit_id,
            position: shot.position,
            rotation: shot.rotation,
            damage: shot.damage,
            velocity: shot.velocity,
        });
        ctx.emit(ArenaEvent::ShotFired {
            unit_id: frame.unit_id,
            mode: shot.mode,
            damage: shot.damage,
        });
        tracing::trace!(
            unit_id = frame.unit_id,
            mode = ?shot.mode,
            damage = shot.damage,
            heat = self.weapon.heat,
            "fired"
        );
    }
}

impl Unit for Sparky {
    fn update(&mut self, frame: &UnitFrame, ctx: &mut dyn UnitContext) {
        let input = frame.player_id.and_then(|id| ctx.input(id).copied());

        if let Some(input) = &input {
            let speed_scale = ctx.speed_scale(frame.unit_id);
            kinematics::drive(
                &mut self.velocity,
                frame,
                input,
                &self.tuning,
                speed_scale,
                ctx,
            );
            self.turret.track(frame.pose.position, input.cursor, &self.tuning);
            if input.fire {
                self.fire(frame, input, ctx);
            }
        }

        self.weapon.cool_down();
        self.velocity *= self.tuning.friction;
        self.weapon.dissipate(self.tuning.heat_dissipation_rate * DT);

        if input.is_some_and(|i| i.was_pressed(Key::ToggleWeapon)) {
            let mode = self.weapon.toggle_mode();
            ctx.emit(ArenaEvent::WeaponToggled {
                unit_id: frame.unit_id,
                mode,
            });
        }
    }

    fn is_hit(&self, pose: &Pose, point: Vec2) -> bool {
        hull::contains(pose, point)
    }

    fn status(&self) -> UnitStatus {
        UnitStatus {
            velocity: self.velocity,
            turret_rotation: self.turret.rotation,
            heat: self.weapon.heat,
            heat_max: self.tuning.heat_max,
            cooldown_ticks: self.weapon.cooldown_ticks,
            weapon_mode: self.weapon.mode,
            fire_state: self.fire_state(),
        }
    }

    fn name(&self) -> &'static str {
        "Sparky"
    }

    fn author(&self) -> &'static str {
        "Mini Pekka"
    }
}
