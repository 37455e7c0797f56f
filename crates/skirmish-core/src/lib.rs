//! Core types and definitions for the SKIRMISH arena simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! poses, input snapshots, components, commands, events, snapshots,
//! tuning and constants. It has no dependency on the entity store or
//! any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
