//! Systems that operate on the arena world each tick.
//!
//! Systems are functions over `&mut World` plus whatever engine-owned
//! buffers they need. They do not own state.

pub mod bullets;
pub mod commit;
pub mod input;
pub mod snapshot;
pub mod units;
