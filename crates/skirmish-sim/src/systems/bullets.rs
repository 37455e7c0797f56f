//! Bullet flight and hit detection.
//!
//! Bullets fly straight, expire after their lifetime, and are removed when
//! they enter an obstacle or leave the arena. A bullet inside any unit other
//! than its owner reports a hit and is removed. Damage bookkeeping belongs
//! to the host.

use hecs::{Entity, World};

use skirmish_core::components::{Bullet, UnitTag};
use skirmish_core::constants::DT;
use skirmish_core::events::ArenaEvent;
use skirmish_core::types::Pose;

use crate::map::ArenaMap;
use crate::unit::{Unit, UnitBody};

/// Advance all bullets one tick and resolve hits.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    map: &ArenaMap,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<ArenaEvent>,
) {
    despawn_buffer.clear();

    for (entity, (bullet, pose)) in world.query_mut::<(&mut Bullet, &mut Pose)>() {
        pose.position += bullet.velocity * DT;
        bullet.ticks_remaining = bullet.ticks_remaining.saturating_sub(1);
        if bullet.ticks_remaining == 0 || map.is_blocked(pose.position) {
            despawn_buffer.push(entity);
        }
    }

    {
        let mut unit_query = world.query::<(&UnitTag, &Pose, &UnitBody)>();
        let targets: Vec<(u32, &Pose, &UnitBody)> = unit_query
            .iter()
            .map(|(_, (tag, pose, body))| (tag.unit_id, pose, body))
            .collect();

        let mut bullet_query = world.query::<(&Bullet, &Pose)>();
        for (entity, (bullet, pose)) in bullet_query.iter() {
            if despawn_buffer.contains(&entity) {
                continue;
            }
            let hit = targets.iter().find(|(unit_id, unit_pose, body)| {
                *unit_id != bullet.owner && body.is_hit(unit_pose, pose.position)
            });
            if let Some((target, _, _)) = hit {
                tracing::debug!(
                    bullet_id = bullet.bullet_id,
                    shooter = bullet.owner,
                    target_id = *target,
                    damage = bullet.damage,
                    "bullet hit"
                );
                events.push(ArenaEvent::BulletHit {
                    bullet_id: bullet.bullet_id,
                    shooter: bullet.owner,
                    target: *target,
                    damage: bullet.damage,
                });
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
