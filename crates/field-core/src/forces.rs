//! Force building blocks shared by every field variant.

use crate::constants::EPSILON;
use glam::Vec3;
use rand::Rng;

/// Proximity weight in [0, 1]: 1 at the center, 0 at or beyond `radius`.
///
/// Forces scale with the square of this value, giving a soft core/halo
/// falloff instead of a hard cutoff.
#[inline]
pub fn influence(distance: f32, radius: f32) -> f32 {
    (1.0 - (distance / radius.max(EPSILON)).clamp(0.0, 1.0)).max(0.0)
}

/// Offset from `from` to `to` and its guarded length.
#[inline]
pub fn offset(from: Vec3, to: Vec3) -> (Vec3, f32) {
    let d = to - from;
    (d, d.length() + EPSILON)
}

/// Tangent of `d` rotated a quarter turn in the XY plane, scaled by `1/dist`.
#[inline]
pub fn swirl_xy(d: Vec3, dist: f32) -> Vec3 {
    Vec3::new(-d.y, d.x, 0.0) / (dist + EPSILON)
}

/// Isotropic jitter with each axis in `[-scale/2, scale/2)`.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, scale: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    ) * scale
}
