//! Entity spawn factories for the arena world.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Bullet, Controller, Modifiers, UnitTag};
use skirmish_core::config::SparkyTuning;
use skirmish_core::constants::{
    BULLET_LIFETIME_TICKS, SPAWN_ATTEMPTS, SPAWN_CLEARANCE, UNIT_SPAWN_SPACING,
};
use skirmish_core::enums::UnitArchetype;
use skirmish_core::types::Pose;

use crate::context::BulletSpawn;
use crate::map::ArenaMap;
use crate::unit::UnitBody;

/// Spawn a unit with zeroed transient state and default modifiers.
pub fn spawn_unit(
    world: &mut World,
    unit_id: u32,
    archetype: UnitArchetype,
    player_id: Option<u32>,
    pose: Pose,
    tuning: &SparkyTuning,
) -> hecs::Entity {
    let tag = UnitTag { unit_id, archetype };
    let body = UnitBody::new(archetype, *tuning);

    match player_id {
        Some(player_id) => world.spawn((
            tag,
            pose,
            Modifiers::default(),
            body,
            Controller { player_id },
        )),
        None => world.spawn((tag, pose, Modifiers::default(), body)),
    }
}

/// Spawn a bullet from a unit's fire request.
pub fn spawn_bullet(world: &mut World, bullet_id: u32, spawn: &BulletSpawn) -> hecs::Entity {
    world.spawn((
        Bullet {
            bullet_id,
            owner: spawn.owner,
            kind: spawn.kind,
            damage: spawn.damage,
            velocity: spawn.velocity,
            ticks_remaining: BULLET_LIFETIME_TICKS,
        },
        Pose::new(spawn.position, spawn.rotation),
    ))
}

/// Pick a random point with clearance from walls, obstacles and the units
/// at `occupied`. Falls back to the arena center if none is found.
pub fn pick_spawn_point(rng: &mut ChaCha8Rng, map: &ArenaMap, occupied: &[Vec2]) -> Vec2 {
    let inner = map.bounds.inflate(-SPAWN_CLEARANCE);

    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = Vec2::new(
            rng.gen_range(inner.min.x..=inner.max.x),
            rng.gen_range(inner.min.y..=inner.max.y),
        );
        let crowded = occupied
            .iter()
            .any(|unit| unit.distance(candidate) < UNIT_SPAWN_SPACING);
        if !crowded && !map.is_blocked_with_margin(candidate, SPAWN_CLEARANCE) {
            return candidate;
        }
    }

    tracing::warn!("no free spawn point found, using arena center");
    (map.bounds.min + map.bounds.max) * 0.5
}
