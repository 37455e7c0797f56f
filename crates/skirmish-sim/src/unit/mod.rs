//! Unit archetypes and the capability interface they share.
//!
//! The archetype set is closed, so the arena stores a `UnitBody` enum and
//! dispatches by variant. Each variant implements `Unit`.

pub mod falloff;
pub mod hull;
pub mod kinematics;
pub mod sparky;
pub mod turret;
pub mod weapon;

use glam::Vec2;

use skirmish_core::config::SparkyTuning;
use skirmish_core::enums::{FireState, UnitArchetype, WeaponMode};
use skirmish_core::types::Pose;

use crate::context::UnitContext;

pub use sparky::Sparky;

/// What a unit knows about itself at the start of a tick.
#[derive(Debug, Clone, Copy)]
pub struct UnitFrame {
    pub unit_id: u32,
    /// Controlling player, if any.
    pub player_id: Option<u32>,
    /// Pose committed at the start of this tick.
    pub pose: Pose,
}

/// Unit-owned state exposed for snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStatus {
    pub velocity: Vec2,
    pub turret_rotation: f32,
    pub heat: f32,
    pub heat_max: f32,
    pub cooldown_ticks: u32,
    pub weapon_mode: WeaponMode,
    pub fire_state: FireState,
}

/// Behavior every unit archetype provides.
pub trait Unit {
    /// Advance one tick.
    fn update(&mut self, frame: &UnitFrame, ctx: &mut dyn UnitContext);

    /// Whether a world-space point lies inside the unit's silhouette.
    fn is_hit(&self, pose: &Pose, point: Vec2) -> bool;

    fn status(&self) -> UnitStatus;

    fn name(&self) -> &'static str;

    fn author(&self) -> &'static str;
}

/// ECS component holding a unit's archetype-specific state.
#[derive(Debug, Clone)]
pub enum UnitBody {
    Sparky(Sparky),
}

impl UnitBody {
    /// Fresh unit of the given archetype.
    pub fn new(archetype: UnitArchetype, sparky_tuning: SparkyTuning) -> Self {
        match archetype {
            UnitArchetype::Sparky => UnitBody::Sparky(Sparky::new(sparky_tuning)),
        }
    }
}

impl Unit for UnitBody {
    fn update(&mut self, frame: &UnitFrame, ctx: &mut dyn UnitContext) {
        match self {
            UnitBody::Sparky(unit) => unit.update(frame, ctx),
        }
    }

    fn is_hit(&self, pose: &Pose, point: Vec2) -> bool {
        match self {
            UnitBody::Sparky(unit) => unit.is_hit(pose, point),
        }
    }

    fn status(&self) -> UnitStatus {
        match self {
            UnitBody::Sparky(unit) => unit.status(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            UnitBody::Sparky(unit) => unit.name(),
        }
    }

    fn author(&self) -> &'static str {
        match self {
            UnitBody::Sparky(unit) => unit.author(),
        }
    }
}
