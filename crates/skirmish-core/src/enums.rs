//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Playable unit archetypes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitArchetype {
    /// Light tank with a free turret and a cannon / machine-gun pair.
    #[default]
    Sparky,
}

/// Active weapon on a dual-mode turret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponMode {
    /// Slow, heat-generating, range-sensitive shell with recoil.
    #[default]
    Cannon,
    /// Rapid low-damage rounds, no heat.
    MachineGun,
}

impl WeaponMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            WeaponMode::Cannon => WeaponMode::MachineGun,
            WeaponMode::MachineGun => WeaponMode::Cannon,
        }
    }
}

/// Weapon readiness, derived from cooldown and heat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireState {
    /// Cooldown elapsed and heat below the limit.
    #[default]
    Ready,
    /// Cooldown ticks remaining.
    Reloading,
    /// Heat at or above the limit.
    Overheated,
}

/// Projectile types a unit can spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    #[default]
    CannonBall,
}

/// Arena run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaPhase {
    #[default]
    Active,
    Paused,
}
