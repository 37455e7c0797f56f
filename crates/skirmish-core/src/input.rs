//! Per-tick player input.
//!
//! Input arrives as an `InputFrame` (held keys, trigger, cursor). The player
//! registry latches frames into `InputSnapshot`s, deriving the keys that went
//! down this tick so units can react to edges instead of held state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed key identifiers a unit reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    ToggleWeapon,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::Forward,
        Key::Backward,
        Key::TurnLeft,
        Key::TurnRight,
        Key::ToggleWeapon,
    ];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Small set of keys stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Key>", into = "Vec<Key>")]
pub struct KeySet(u8);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn with(mut self, key: Key) -> Self {
        self.insert(key);
        self
    }

    /// Keys in `self` that are not in `other`.
    pub fn difference(&self, other: KeySet) -> KeySet {
        KeySet(self.0 & !other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::EMPTY;
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl From<Vec<Key>> for KeySet {
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<KeySet> for Vec<Key> {
    fn from(set: KeySet) -> Self {
        set.iter().collect()
    }
}

/// Raw input submitted for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Keys currently held.
    #[serde(default)]
    pub held: KeySet,
    /// Primary trigger held.
    #[serde(default)]
    pub fire: bool,
    /// Cursor position in arena space.
    #[serde(default)]
    pub cursor: Vec2,
}

impl InputFrame {
    /// Latch this frame against the keys held on the previous tick.
    pub fn latch(self, previous_held: KeySet) -> InputSnapshot {
        InputSnapshot {
            held: self.held,
            pressed: self.held.difference(previous_held),
            fire: self.fire,
            cursor: self.cursor,
        }
    }
}

/// Input as seen by a unit during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub held: KeySet,
    /// Keys that went down this tick.
    pub pressed: KeySet,
    pub fire: bool,
    pub cursor: Vec2,
}

impl InputSnapshot {
    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(key)
    }

    /// +1 / 0 / -1 from a pair of opposing keys.
    pub fn axis(&self, positive: Key, negative: Key) -> f32 {
        let mut value = 0.0;
        if self.is_down(positive) {
            value += 1.0;
        }
        if self.is_down(negative) {
            value -= 1.0;
        }
        value
    }
}
