//! ECS components for hecs entities.
//!
//! Components are plain data structs. Unit behavior lives in the sim crate;
//! the pose component is `types::Pose`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BulletKind, UnitArchetype};

/// Identity of a unit entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitTag {
    pub unit_id: u32,
    pub archetype: UnitArchetype,
}

/// Binds a unit to the player whose input drives it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Controller {
    pub player_id: u32,
}

/// Externally supplied multipliers (buffs / debuffs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub damage_scale: f32,
    pub speed_scale: f32,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            damage_scale: 1.0,
            speed_scale: 1.0,
        }
    }
}

/// In-flight projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub bullet_id: u32,
    /// Unit that fired it; never hits its owner.
    pub owner: u32,
    pub kind: BulletKind,
    pub damage: f32,
    /// World-space velocity (units/s).
    pub velocity: Vec2,
    pub ticks_remaining: u32,
}
