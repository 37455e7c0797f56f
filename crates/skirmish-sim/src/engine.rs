//! Arena engine: the authoritative world around the units.
//!
//! `ArenaEngine` owns the hecs world, processes host commands, runs all
//! systems in a fixed order and produces `ArenaSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Controller, Modifiers, UnitTag};
use skirmish_core::config::ArenaConfig;
use skirmish_core::enums::ArenaPhase;
use skirmish_core::events::{ArenaEvent, PoseProposal};
use skirmish_core::input::InputFrame;
use skirmish_core::state::ArenaSnapshot;
use skirmish_core::types::{Pose, SimTime};

use crate::context::BulletSpawn;
use crate::map::ArenaMap;
use crate::systems;
use crate::systems::input::PlayerSlot;
use crate::unit::{Unit, UnitBody, UnitStatus};
use crate::world_setup;

/// The arena engine. Owns the ECS world and all sim state.
pub struct ArenaEngine {
    world: World,
    time: SimTime,
    phase: ArenaPhase,
    config: ArenaConfig,
    rng: ChaCha8Rng,
    map: ArenaMap,
    players: HashMap<u32, PlayerSlot>,
    units: HashMap<u32, Entity>,
    next_unit_id: u32,
    next_bullet_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    proposals: Vec<PoseProposal>,
    bullet_spawns: Vec<BulletSpawn>,
    despawn_buffer: Vec<Entity>,
    events: Vec<ArenaEvent>,
}

impl ArenaEngine {
    /// Create a new arena with the given config.
    pub fn new(config: ArenaConfig) -> Self {
        tracing::info!(seed = config.seed, "arena created");
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: ArenaPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            map: ArenaMap::new(config.bounds),
            config,
            players: HashMap::new(),
            units: HashMap::new(),
            next_unit_id: 0,
            next_bullet_id: 0,
            command_queue: VecDeque::new(),
            proposals: Vec::new(),
            bullet_spawns: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the arena by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        self.process_commands();

        if self.phase == ArenaPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.map, events)
    }

    /// Get the current arena phase.
    pub fn phase(&self) -> ArenaPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn map(&self) -> &ArenaMap {
        &self.map
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ids of live units, ascending.
    pub fn unit_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.units.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Committed pose of a unit.
    pub fn unit_pose(&self, unit_id: u32) -> Option<Pose> {
        let entity = *self.units.get(&unit_id)?;
        self.world.get::<&Pose>(entity).ok().map(|pose| *pose)
    }

    /// Unit-owned state of a unit.
    pub fn unit_status(&self, unit_id: u32) -> Option<UnitStatus> {
        let entity = *self.units.get(&unit_id)?;
        self.world
            .get::<&UnitBody>(entity)
            .ok()
            .map(|body| body.status())
    }

    /// Hit-test a world point against a unit's silhouette.
    pub fn hit_test(&self, unit_id: u32, point: Vec2) -> bool {
        let Some(&entity) = self.units.get(&unit_id) else {
            return false;
        };
        let Ok(mut query) = self.world.query_one::<(&Pose, &UnitBody)>(entity) else {
            return false;
        };
        query
            .get()
            .is_some_and(|(pose, body)| body.is_hit(pose, point))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SpawnUnit {
                archetype,
                player_id,
                position,
                rotation,
            } => {
                let position = position.unwrap_or_else(|| {
                    let occupied: Vec<Vec2> = self
                        .world
                        .query::<(&UnitTag, &Pose)>()
                        .iter()
                        .map(|(_, (_, pose))| pose.position)
                        .collect();
                    world_setup::pick_spawn_point(&mut self.rng, &self.map, &occupied)
                });
                let unit_id = self.next_unit_id;
                self.next_unit_id += 1;

                let entity = world_setup::spawn_unit(
                    &mut self.world,
                    unit_id,
                    archetype,
                    player_id,
                    Pose::new(position, rotation),
                    &self.config.sparky,
                );
                self.units.insert(unit_id, entity);
                if let Some(player_id) = player_id {
                    self.players.entry(player_id).or_default();
                }
                tracing::debug!(unit_id, ?archetype, ?player_id, ?position, "unit spawned");
                self.events.push(ArenaEvent::UnitSpawned {
                    unit_id,
                    archetype,
                    position,
                });
            }
            PlayerCommand::RemoveUnit { unit_id } => match self.units.remove(&unit_id) {
                Some(entity) => {
                    let _ = self.world.despawn(entity);
                    tracing::debug!(unit_id, "unit removed");
                    self.events.push(ArenaEvent::UnitRemoved { unit_id });
                }
                None => tracing::warn!(unit_id, "remove for unknown unit ignored"),
            },
            PlayerCommand::SetModifiers {
                unit_id,
                damage_scale,
                speed_scale,
            } => {
                let updated = self.units.get(&unit_id).is_some_and(|&entity| {
                    self.world
                        .get::<&mut Modifiers>(entity)
                        .map(|mut m| {
                            m.damage_scale = damage_scale;
                            m.speed_scale = speed_scale;
                        })
                        .is_ok()
                });
                if !updated {
                    tracing::warn!(unit_id, "modifiers for unknown unit ignored");
                }
            }
            PlayerCommand::SetInput { player_id, frame } => {
                self.set_input(player_id, Some(frame));
            }
            PlayerCommand::ClearInput { player_id } => {
                self.set_input(player_id, None);
            }
            PlayerCommand::AddObstacle { rect } => {
                tracing::debug!(?rect, "obstacle added");
                self.map.add_obstacle(rect);
            }
            PlayerCommand::Pause => {
                if self.phase == ArenaPhase::Active {
                    self.phase = ArenaPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == ArenaPhase::Paused {
                    self.phase = ArenaPhase::Active;
                }
            }
        }
    }

    fn set_input(&mut self, player_id: u32, frame: Option<InputFrame>) {
        let controls_unit = self
            .world
            .query::<&Controller>()
            .iter()
            .any(|(_, c)| c.player_id == player_id);
        if !controls_unit {
            tracing::warn!(player_id, "input for player without a unit ignored");
            return;
        }
        self.players.entry(player_id).or_default().frame = frame;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Latch player input (derive key-press edges)
        systems::input::latch(&mut self.players);
        // 2. Unit updates against start-of-tick poses
        systems::units::run(
            &mut self.world,
            &self.players,
            &self.map,
            &mut self.proposals,
            &mut self.bullet_spawns,
            &mut self.events,
        );
        // 3. Commit move / rotate proposals
        systems::commit::run(
            &mut self.world,
            &self.units,
            &self.map,
            &mut self.proposals,
            &mut self.events,
        );
        // 4. Existing bullets: flight, expiry, hits
        systems::bullets::run(
            &mut self.world,
            &self.map,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 5. Bullets fired this tick enter the world
        for spawn in self.bullet_spawns.drain(..) {
            world_setup::spawn_bullet(&mut self.world, self.next_bullet_id, &spawn);
            self.next_bullet_id += 1;
        }
    }
}
