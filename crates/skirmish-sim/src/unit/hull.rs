//! Sparky silhouette: a hexagon, wide at the rear with the two front
//! corners bevelled. Local frame, +y forward.

use glam::Vec2;

use skirmish_core::constants::{HULL_BEVEL, HULL_FRONT, HULL_HALF_WIDTH, HULL_REAR};
use skirmish_core::types::Pose;

/// Strict containment in local coordinates. Points on an edge or vertex are
/// outside.
pub fn contains_local(p: Vec2) -> bool {
    p.x > -HULL_HALF_WIDTH
        && p.x < HULL_HALF_WIDTH
        && p.y > HULL_REAR
        && p.y < HULL_FRONT
        && p.x + p.y < HULL_BEVEL
        && p.y - p.x < HULL_BEVEL
}

/// Containment of a world-space point for a hull at `pose`.
pub fn contains(pose: &Pose, point: Vec2) -> bool {
    contains_local(pose.world_to_local(point))
}
