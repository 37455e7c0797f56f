//! Simulation engine for SKIRMISH.
//!
//! Hosts the per-tick unit behavior (`unit`), the collaborator seam units
//! talk through (`context`), and a headless `ArenaEngine` that owns the
//! hecs world, commits pose proposals and produces `ArenaSnapshot`s.

pub mod context;
pub mod engine;
pub mod map;
pub mod scenario;
pub mod systems;
pub mod unit;
pub mod world_setup;

pub use engine::ArenaEngine;
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
