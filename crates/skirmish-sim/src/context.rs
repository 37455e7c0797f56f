//! The seam between a unit and the world around it.
//!
//! Units never write their own pose or touch other entities. Everything
//! they need from outside (input, obstacle queries, pose commits, bullet
//! spawning, buff multipliers) goes through `UnitContext`.

use glam::Vec2;

use skirmish_core::enums::BulletKind;
use skirmish_core::events::ArenaEvent;
use skirmish_core::input::InputSnapshot;

/// Parameters for a bullet a unit wants spawned. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletSpawn {
    pub kind: BulletKind,
    pub owner: u32,
    pub position: Vec2,
    pub rotation: f32,
    pub damage: f32,
    /// World-space velocity.
    pub velocity: Vec2,
}

/// Services a unit may call during its update.
pub trait UnitContext {
    /// Input for the given player this tick. `None` means no input.
    fn input(&self, player_id: u32) -> Option<&InputSnapshot>;

    /// Whether `position` lies inside an obstacle or outside the arena.
    fn is_blocked(&self, position: Vec2) -> bool;

    /// Request a move. Committed after all units have updated; may still be
    /// rejected then.
    fn propose_move(&mut self, unit_id: u32, position: Vec2);

    /// Request a new body rotation. Always committed.
    fn propose_rotate(&mut self, unit_id: u32, rotation: f32);

    fn spawn_bullet(&mut self, spawn: BulletSpawn);

    fn damage_scale(&self, unit_id: u32) -> f32;

    fn speed_scale(&self, unit_id: u32) -> f32;

    /// Report something observable. Ignored by default.
    fn emit(&mut self, _event: ArenaEvent) {}
}
