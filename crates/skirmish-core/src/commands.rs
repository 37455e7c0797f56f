//! Commands sent to the arena from the host.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::UnitArchetype;
use crate::input::InputFrame;
use crate::types::Rect;

/// All host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Units ---
    /// Spawn a unit. Without a position, a free spawn point is picked.
    SpawnUnit {
        archetype: UnitArchetype,
        player_id: Option<u32>,
        position: Option<Vec2>,
        #[serde(default)]
        rotation: f32,
    },
    /// Remove a unit from the arena.
    RemoveUnit { unit_id: u32 },
    /// Set buff / debuff multipliers on a unit.
    SetModifiers {
        unit_id: u32,
        damage_scale: f32,
        speed_scale: f32,
    },

    // --- Input ---
    /// Latest input frame for a player. Persists until replaced or cleared.
    SetInput { player_id: u32, frame: InputFrame },
    /// Drop a player's input (the player's units go idle).
    ClearInput { player_id: u32 },

    // --- World ---
    /// Add a rectangular obstacle.
    AddObstacle { rect: Rect },

    // --- Simulation control ---
    Pause,
    Resume,
}
