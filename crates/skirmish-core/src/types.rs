//! Fundamental geometric and simulation types.
//!
//! The arena is a 2D plane. Rotations are counter-clockwise radians and an
//! entity at rotation 0 faces +y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rotate `v` counter-clockwise by `angle` radians.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Authoritative body pose: position plus facing.
///
/// Only the arena commits changes to a pose. Units read it and submit
/// proposals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: f32,
}

impl Pose {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Map a world-space point into this pose's local frame.
    pub fn world_to_local(&self, point: Vec2) -> Vec2 {
        rotate(point - self.position, -self.rotation)
    }

    /// Map a local-frame point into world space.
    pub fn local_to_world(&self, point: Vec2) -> Vec2 {
        self.position + rotate(point, self.rotation)
    }

    /// Rotate a local-frame direction into world space (no translation).
    pub fn local_dir_to_world(&self, dir: Vec2) -> Vec2 {
        rotate(dir, self.rotation)
    }
}

/// Axis-aligned rectangle in arena space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Square centered on the origin.
    pub fn centered(half_extent: f32) -> Self {
        Self::new(Vec2::splat(-half_extent), Vec2::splat(half_extent))
    }

    /// Closed containment: points on the edge count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Rectangle grown by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
