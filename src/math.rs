//! Small vector helpers shared by the force field.
//!
//! Positions and velocities are `glam::Vec2` in surface pixels, with the
//! origin at the top-left corner and y growing downward.

use glam::Vec2;

/// Minimum distance used as a divisor when normalizing directions.
///
/// Two entities can land on the exact same point; dividing the offset by the
/// raw distance would produce NaN and poison every later position update.
/// Clamping the divisor keeps the direction finite (zero for coincident
/// points) while leaving it unchanged for any real separation.
pub const MIN_DISTANCE: f32 = 1e-4;

/// Unit direction from `from` toward `to`, plus the true distance between them.
///
/// The returned distance is unclamped; only the normalization divisor is
/// clamped to [`MIN_DISTANCE`], so coincident points yield a zero direction
/// rather than NaN.
#[inline]
pub fn direction_and_distance(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let dist = delta.length();
    (delta / dist.max(MIN_DISTANCE), dist)
}

/// Linear falloff: 1 at distance 0, 0 at `radius`, negative beyond.
///
/// Callers gate on `dist < radius` first; the falloff itself is not clamped.
#[inline]
pub fn linear_falloff(dist: f32, radius: f32) -> f32 {
    (radius - dist) / radius
}
