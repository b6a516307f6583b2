use bevy_rapier3d::prelude::*;
use itertools::Itertools;
use crate::core::radius_profile::RadiusProfile;
use crate::core::tunnel_config::MeshDetail;
use crate::core::tunnel_error::TunnelError;
use crate::mesh::tube_builder::{build_tube_geometry, TubeGeometry};
use crate::spline::SplinePath;

/// Low-detail tube buffers for collision: same construction as the render
/// tube but without UVs, at the collider's coarser detail settings.
pub fn build_collider_geometry(
    spline: &dyn SplinePath,
    profile: &RadiusProfile,
    density_x: f32,
    detail: &MeshDetail,
) -> Result<TubeGeometry, TunnelError> {
    build_tube_geometry(spline, profile, density_x, detail, false)
}

/// Rapier trimesh collider over the collider-detail tube.
pub fn build_collider(
    spline: &dyn SplinePath,
    profile: &RadiusProfile,
    density_x: f32,
    detail: &MeshDetail,
) -> Result<Collider, TunnelError> {
    let geometry = build_collider_geometry(spline, profile, density_x, detail)?;
    collider_from_geometry(&geometry)
}

pub fn collider_from_geometry(geometry: &TubeGeometry) -> Result<Collider, TunnelError> {
    let triangles: Vec<[u32; 3]> = geometry
        .indices
        .iter()
        .copied()
        .tuples()
        .map(|(a, b, c)| [a, b, c])
        .collect();

    Ok(Collider::trimesh(geometry.positions.clone(), triangles))
}
