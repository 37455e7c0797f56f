//! Player registry: latches each player's latest frame into the snapshot
//! units read this tick.

use std::collections::HashMap;

use skirmish_core::input::{InputFrame, InputSnapshot, KeySet};

#[derive(Debug, Clone, Default)]
pub struct PlayerSlot {
    /// Most recent frame from the host. Persists until replaced or cleared.
    pub frame: Option<InputFrame>,
    /// Keys held when the previous tick was latched.
    pub previous_held: KeySet,
    /// What units see this tick.
    pub snapshot: Option<InputSnapshot>,
}

/// Latch every player's frame, deriving key-press edges against the last
/// latched tick.
pub fn latch(players: &mut HashMap<u32, PlayerSlot>) {
    for slot in players.values_mut() {
        match slot.frame {
            Some(frame) => {
                slot.snapshot = Some(frame.latch(slot.previous_held));
                slot.previous_held = frame.held;
            }
            None => {
                slot.snapshot = None;
                slot.previous_held = KeySet::EMPTY;
            }
        }
    }
}
