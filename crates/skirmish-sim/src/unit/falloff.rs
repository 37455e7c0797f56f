//! Range falloff for cannon shots.

use skirmish_core::constants::FALLOFF_SHARPNESS;

/// Gaussian falloff peaking at `optimal`: exp(-k * ((d - opt) / opt)^2).
///
/// Returns exactly 1.0 at the optimal range and is symmetric in
/// `distance - optimal`, so `falloff(0, opt) == falloff(2 * opt, opt)`.
/// Non-positive `optimal` is clamped to `f32::EPSILON`.
pub fn falloff(distance: f32, optimal: f32) -> f32 {
    let optimal = optimal.max(f32::EPSILON);
    let offset = (distance - optimal) / optimal;
    (-FALLOFF_SHARPNESS * offset * offset).exp()
}
