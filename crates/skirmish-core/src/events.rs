//! Events emitted by the arena for UI and audio feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{UnitArchetype, WeaponMode};

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// A unit entered the arena.
    UnitSpawned {
        unit_id: u32,
        archetype: UnitArchetype,
        position: Vec2,
    },
    /// A unit was removed by its owner.
    UnitRemoved { unit_id: u32 },
    /// A unit fired and spawned a bullet.
    ShotFired {
        unit_id: u32,
        mode: WeaponMode,
        damage: f32,
    },
    /// A unit switched weapons.
    WeaponToggled { unit_id: u32, mode: WeaponMode },
    /// A move proposal was rejected at commit time.
    MoveRejected { unit_id: u32, position: Vec2 },
    /// A bullet struck a unit.
    BulletHit {
        bullet_id: u32,
        shooter: u32,
        target: u32,
        damage: f32,
    },
}

/// Pose change requested by a unit, committed by the arena after all units
/// have updated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PoseProposal {
    Move { unit_id: u32, position: Vec2 },
    Rotate { unit_id: u32, rotation: f32 },
}
