//! Commits buffered pose proposals.
//!
//! Moves are re-validated against the map and arbitrated against the other
//! units' hulls in proposal order. A unit may not enter another hull, and a
//! unit already inside one may only move away from its center. A rejected
//! move leaves the pose untouched (the unit keeps its velocity). Rotations
//! always apply.

use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};

use skirmish_core::components::UnitTag;
use skirmish_core::events::{ArenaEvent, PoseProposal};
use skirmish_core::types::Pose;

use crate::map::ArenaMap;
use crate::unit::{Unit, UnitBody};

pub fn run(
    world: &mut World,
    units: &HashMap<u32, Entity>,
    map: &ArenaMap,
    proposals: &mut Vec<PoseProposal>,
    events: &mut Vec<ArenaEvent>,
) {
    for proposal in proposals.drain(..) {
        match proposal {
            PoseProposal::Move { unit_id, position } => {
                let Some(&entity) = units.get(&unit_id) else {
                    continue;
                };
                let Ok(from) = world.get::<&Pose>(entity).map(|pose| pose.position) else {
                    continue;
                };
                if map.is_blocked(position) || collides_with_unit(world, unit_id, from, position) {
                    tracing::debug!(unit_id, ?position, "move rejected");
                    events.push(ArenaEvent::MoveRejected { unit_id, position });
                    continue;
                }
                if let Ok(mut pose) = world.get::<&mut Pose>(entity) {
                    pose.position = position;
                }
            }
            PoseProposal::Rotate { unit_id, rotation } => {
                let Some(&entity) = units.get(&unit_id) else {
                    continue;
                };
                if let Ok(mut pose) = world.get::<&mut Pose>(entity) {
                    pose.rotation = rotation;
                }
            }
        }
    }
}

/// Whether moving `unit_id` from `from` to `to` pushes into another unit,
/// using the poses committed so far this pass.
fn collides_with_unit(world: &World, unit_id: u32, from: Vec2, to: Vec2) -> bool {
    world
        .query::<(&UnitTag, &Pose, &UnitBody)>()
        .iter()
        .any(|(_, (tag, pose, body))| {
            if tag.unit_id == unit_id || !body.is_hit(pose, to) {
                return false;
            }
            // Already overlapping: only separating moves are allowed.
            !body.is_hit(pose, from) || to.distance(pose.position) < from.distance(pose.position)
        })
}
