//! Snapshot system: queries the world and builds an `ArenaSnapshot`.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use skirmish_core::components::{Bullet, Controller, UnitTag};
use skirmish_core::enums::ArenaPhase;
use skirmish_core::events::ArenaEvent;
use skirmish_core::state::{ArenaSnapshot, BulletView, UnitView};
use skirmish_core::types::{Pose, SimTime};

use crate::map::ArenaMap;
use crate::unit::{Unit, UnitBody};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: ArenaPhase,
    map: &ArenaMap,
    events: Vec<ArenaEvent>,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        phase,
        units: build_units(world),
        bullets: build_bullets(world),
        obstacles: map.obstacles.clone(),
        events,
    }
}

/// Build UnitView list, ordered by unit id.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitTag, &Pose, Option<&Controller>, &UnitBody)>()
        .iter()
        .map(|(_, (tag, pose, controller, body))| {
            let status = body.status();
            UnitView {
                unit_id: tag.unit_id,
                player_id: controller.map(|c| c.player_id),
                archetype: tag.archetype,
                name: body.name().to_string(),
                author: body.author().to_string(),
                pose: *pose,
                velocity: status.velocity,
                turret_rotation: status.turret_rotation,
                heat: status.heat,
                heat_max: status.heat_max,
                cooldown_ticks: status.cooldown_ticks,
                weapon_mode: status.weapon_mode,
                fire_state: status.fire_state,
            }
        })
        .collect();
    units.sort_by_key(|u| u.unit_id);
    units
}

/// Build BulletView list, ordered by bullet id.
fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&Bullet, &Pose)>()
        .iter()
        .map(|(_, (bullet, pose))| BulletView {
            bullet_id: bullet.bullet_id,
            owner: bullet.owner,
            kind: bullet.kind,
            pose: *pose,
            damage: bullet.damage,
        })
        .collect();
    bullets.sort_by_key(|b| b.bullet_id);
    bullets
}
