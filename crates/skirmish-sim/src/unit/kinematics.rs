//! Hull motion: spring-toward-input velocity and pose proposals.
//!
//! Velocity lives in the hull's local frame (+y forward). It is owned by the
//! unit and survives rejected moves; only the position commit is skipped.

use glam::Vec2;

use skirmish_core::config::SparkyTuning;
use skirmish_core::constants::DT;
use skirmish_core::input::{InputSnapshot, Key};

use crate::context::UnitContext;
use crate::unit::UnitFrame;

/// Local-frame velocity the player is asking for.
pub fn desired_velocity(input: &InputSnapshot, move_speed: f32, speed_scale: f32) -> Vec2 {
    Vec2::new(0.0, input.axis(Key::Forward, Key::Backward)) * (move_speed * speed_scale)
}

/// One explicit Euler step of `a = (desired - v) * gain`.
pub fn spring_toward(velocity: Vec2, desired: Vec2, gain: f32) -> Vec2 {
    let acceleration = (desired - velocity) * gain;
    velocity + acceleration * DT
}

/// Body rotation offset for this tick. Not accumulated across ticks.
pub fn turn_offset(input: &InputSnapshot, tuning: &SparkyTuning, speed_scale: f32) -> f32 {
    input.axis(Key::TurnLeft, Key::TurnRight) * tuning.turn_step * tuning.turn_speed * speed_scale
}

/// Update `velocity` from input and submit move / rotate proposals.
pub fn drive(
    velocity: &mut Vec2,
    frame: &UnitFrame,
    input: &InputSnapshot,
    tuning: &SparkyTuning,
    speed_scale: f32,
    ctx: &mut dyn UnitContext,
) {
    let desired = desired_velocity(input, tuning.move_speed, speed_scale);
    *velocity = spring_toward(*velocity, desired, tuning.accel_gain);

    let candidate = frame.pose.position + frame.pose.local_dir_to_world(*velocity * DT);
    if ctx.is_blocked(candidate) {
        tracing::trace!(unit_id = frame.unit_id, ?candidate, "move blocked");
    } else {
        ctx.propose_move(frame.unit_id, candidate);
    }

    let offset = turn_offset(input, tuning, speed_scale);
    ctx.propose_rotate(frame.unit_id, frame.pose.rotation + offset);
}
