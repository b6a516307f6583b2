use bevy::prelude::*;

/// Cross-section of the tunnel at a fixed curve parameter. Produced fresh
/// per sample and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDescriptor {
    pub center: Vec3,
    /// Unit tangent of the curve at the ring's parameter.
    pub direction: Vec3,
    pub radius: f32,
    /// Second noise coordinate shared by every instance of this ring.
    pub noise_coordinate: f32,
}
