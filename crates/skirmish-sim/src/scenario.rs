//! Scripted scenarios: a config plus a timeline of commands.
//!
//! Used by the headless runner and by determinism tests.

use serde::{Deserialize, Serialize};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::config::ArenaConfig;
use skirmish_core::state::ArenaSnapshot;

use crate::engine::ArenaEngine;

/// A command queued before the given tick runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedCommand {
    pub tick: u64,
    pub command: PlayerCommand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: ArenaConfig,
    /// Number of ticks to run.
    pub ticks: u64,
    #[serde(default)]
    pub script: Vec<ScriptedCommand>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Run the scenario, handing every snapshot to `on_tick`. Returns the
    /// final snapshot.
    pub fn run(&self, mut on_tick: impl FnMut(&ArenaSnapshot)) -> ArenaSnapshot {
        let mut engine = ArenaEngine::new(self.config.clone());
        let mut script = self.script.clone();
        script.sort_by_key(|entry| entry.tick);
        let mut pending = script.into_iter().peekable();

        let mut last = ArenaSnapshot::default();
        for tick in 0..self.ticks {
            while let Some(entry) = pending.next_if(|entry| entry.tick <= tick) {
                engine.queue_command(entry.command);
            }
            last = engine.tick();
            on_tick(&last);
        }
        last
    }
}
