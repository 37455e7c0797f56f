//! Unit update pass.
//!
//! Every unit updates against the pose committed at the start of the tick.
//! Their proposals, bullet spawns and events are buffered here and applied
//! by later systems, so no unit sees another's partial update.

use std::collections::HashMap;

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Controller, Modifiers, UnitTag};
use skirmish_core::events::{ArenaEvent, PoseProposal};
use skirmish_core::input::InputSnapshot;
use skirmish_core::types::Pose;

use crate::context::{BulletSpawn, UnitContext};
use crate::map::ArenaMap;
use crate::systems::input::PlayerSlot;
use crate::unit::{Unit, UnitBody, UnitFrame};

/// `UnitContext` backed by the engine's buffers for one tick.
pub struct TickContext<'a> {
    pub players: &'a HashMap<u32, PlayerSlot>,
    pub map: &'a ArenaMap,
    pub modifiers: &'a HashMap<u32, Modifiers>,
    pub proposals: &'a mut Vec<PoseProposal>,
    pub bullet_spawns: &'a mut Vec<BulletSpawn>,
    pub events: &'a mut Vec<ArenaEvent>,
}

impl UnitContext for TickContext<'_> {
    fn input(&self, player_id: u32) -> Option<&InputSnapshot> {
        self.players.get(&player_id).and_then(|slot| slot.snapshot.as_ref())
    }

    fn is_blocked(&self, position: Vec2) -> bool {
        self.map.is_blocked(position)
    }

    fn propose_move(&mut self, unit_id: u32, position: Vec2) {
        self.proposals.push(PoseProposal::Move { unit_id, position });
    }

    fn propose_rotate(&mut self, unit_id: u32, rotation: f32) {
        self.proposals.push(PoseProposal::Rotate { unit_id, rotation });
    }

    fn spawn_bullet(&mut self, spawn: BulletSpawn) {
        self.bullet_spawns.push(spawn);
    }

    fn damage_scale(&self, unit_id: u32) -> f32 {
        self.modifiers.get(&unit_id).map_or(1.0, |m| m.damage_scale)
    }

    fn speed_scale(&self, unit_id: u32) -> f32 {
        self.modifiers.get(&unit_id).map_or(1.0, |m| m.speed_scale)
    }

    fn emit(&mut self, event: ArenaEvent) {
        self.events.push(event);
    }
}

/// Run every unit's update for one tick.
pub fn run(
    world: &mut World,
    players: &HashMap<u32, PlayerSlot>,
    map: &ArenaMap,
    proposals: &mut Vec<PoseProposal>,
    bullet_spawns: &mut Vec<BulletSpawn>,
    events: &mut Vec<ArenaEvent>,
) {
    // Read modifiers up front; the update pass holds the world mutably.
    let modifiers: HashMap<u32, Modifiers> = world
        .query::<(&UnitTag, &Modifiers)>()
        .iter()
        .map(|(_, (tag, m))| (tag.unit_id, *m))
        .collect();

    let mut ctx = TickContext {
        players,
        map,
        modifiers: &modifiers,
        proposals,
        bullet_spawns,
        events,
    };

    for (_entity, (tag, pose, controller, body)) in
        world.query_mut::<(&UnitTag, &Pose, Option<&Controller>, &mut UnitBody)>()
    {
        let frame = UnitFrame {
            unit_id: tag.unit_id,
            player_id: controller.map(|c| c.player_id),
            pose: *pose,
        };
        body.update(&frame, &mut ctx);
    }
}
