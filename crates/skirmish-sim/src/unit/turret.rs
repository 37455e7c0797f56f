//! Turret aim controller.
//!
//! The turret angle is owned by the unit (no proposal round-trip). Each tick
//! it closes a fraction `angular_speed * dt` of the remaining shortest-path
//! angle, and `angular_speed` ramps up slowly while off target and bleeds
//! off quickly once settled.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use skirmish_core::config::SparkyTuning;
use skirmish_core::constants::{DT, TURRET_AIM_EPSILON};

/// Shortest signed rotation from `current` to `target`, in [-pi, pi).
pub fn shortest_delta(target: f32, current: f32) -> f32 {
    (target - current + PI).rem_euclid(TAU) - PI
}

/// World angle at which the turret points from `origin` at `cursor`.
/// Returns `None` when the two are too close for a stable direction.
pub fn aim_angle(origin: Vec2, cursor: Vec2) -> Option<f32> {
    let diff = cursor - origin;
    if diff.length() < TURRET_AIM_EPSILON {
        return None;
    }
    // Turret forward is local +y, so subtract a quarter turn from atan2.
    Some(diff.y.atan2(diff.x) - FRAC_PI_2)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Turret {
    /// World-space angle.
    pub rotation: f32,
    /// Fraction-per-second of the remaining delta closed each tick.
    pub angular_speed: f32,
}

impl Turret {
    /// Step toward the cursor. A degenerate cursor holds the current angle.
    pub fn track(&mut self, origin: Vec2, cursor: Vec2, tuning: &SparkyTuning) {
        let target = aim_angle(origin, cursor).unwrap_or(self.rotation);
        self.step_toward(target, tuning);
    }

    /// One controller step toward a fixed target angle. Returns the delta
    /// that was being closed.
    pub fn step_toward(&mut self, target: f32, tuning: &SparkyTuning) -> f32 {
        let delta = shortest_delta(target, self.rotation);

        if delta.abs() < tuning.turret_settle_angle {
            self.angular_speed = (self.angular_speed - tuning.turret_end_decel * DT).max(0.0);
        } else {
            self.angular_speed =
                (self.angular_speed + tuning.turret_start_accel * DT).min(tuning.turret_max_speed);
        }

        self.rotation += delta * (self.angular_speed * DT);
        delta
    }
}
