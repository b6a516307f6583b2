use bevy::prelude::*;
use libnoise::Generator;

/// End-inclusive sample parameter: the first sample lands on 0, the last
/// exactly on 1, so rings always reach the curve end. Single-sample runs
/// collapse to the curve start.
pub fn end_inclusive_t(index: usize, steps: usize) -> f32 {
    if steps > 1 {
        (index as f32 / (steps - 1) as f32).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Orientation aligning +Z with `direction`, up hint +Y. Falls back to an
/// +X up hint when the direction is (anti)parallel to +Y.
pub fn look_along(direction: Vec3) -> Quat {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let up_hint = if forward.dot(Vec3::Y).abs() > 0.999 {
        Vec3::X
    } else {
        Vec3::Y
    };

    let right = up_hint.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Deterministic 2D Perlin sample mapped onto `[0, 1]`. Same generator and
/// coordinates always produce the same value, so repeated bakes match.
pub fn perlin01(generator: &impl Generator<2>, x: f32, y: f32) -> f32 {
    ((generator.sample([x as f64, y as f64]) + 1.0) * 0.5) as f32
}
