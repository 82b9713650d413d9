//! Frame-rate independent exponential smoothing.

use std::f32::consts::{PI, TAU};

/// Move `current` toward `target` with time constant `tau` seconds.
///
/// The step is `1 - exp(-dt/tau)` of the remaining distance, so repeated
/// calls converge without ever snapping, regardless of frame pacing.
#[inline]
pub fn damp(current: f32, target: f32, tau: f32, dt: f32) -> f32 {
    if tau <= 0.0 {
        return target;
    }
    if dt <= 0.0 {
        return current;
    }
    current + (target - current) * (1.0 - (-dt / tau).exp())
}

/// Like [`damp`] but follows the shortest arc between two angles in radians.
#[inline]
pub fn damp_angle(current: f32, target: f32, tau: f32, dt: f32) -> f32 {
    damp(current, current + shortest_arc(target - current), tau, dt)
}

/// Wrap an angular delta into `(-PI, PI]`.
#[inline]
pub fn shortest_arc(delta: f32) -> f32 {
    let wrapped = (delta + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps an exact +PI delta to -PI; keep the positive arm
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}
