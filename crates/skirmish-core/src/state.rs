//! Arena state snapshot: the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::ArenaEvent;
use crate::types::{Pose, Rect, SimTime};

/// Complete arena state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: ArenaPhase,
    pub units: Vec<UnitView>,
    pub bullets: Vec<BulletView>,
    pub obstacles: Vec<Rect>,
    pub events: Vec<ArenaEvent>,
}

/// A unit as drawn by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub player_id: Option<u32>,
    pub archetype: UnitArchetype,
    pub name: String,
    pub author: String,
    pub pose: Pose,
    /// Hull-local velocity.
    pub velocity: Vec2,
    /// World-space turret angle.
    pub turret_rotation: f32,
    pub heat: f32,
    pub heat_max: f32,
    pub cooldown_ticks: u32,
    pub weapon_mode: WeaponMode,
    pub fire_state: FireState,
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub bullet_id: u32,
    pub owner: u32,
    pub kind: BulletKind,
    pub pose: Pose,
    pub damage: f32,
}
