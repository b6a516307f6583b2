use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use crate::core::radius_profile::RadiusProfile;
use crate::core::tunnel_config::MeshDetail;
use crate::core::tunnel_error::TunnelError;
use crate::spawning::helpers::{end_inclusive_t, look_along};
use crate::spawning::ring_sampler;
use crate::spline::SplinePath;

/// Raw tube buffers. Built fresh per bake; comparing two builds of the same
/// inputs compares equal.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub ring_count: usize,
    pub radial_segments: usize,
}

/// Number of rings for a tube over `spline` at the given density and
/// precision.
pub fn ring_count(spline: &dyn SplinePath, density_x: f32, precision: f32) -> usize {
    (spline.distance() * density_x * precision).round() as usize
}

/// Builds the tube buffers: ring-major vertex grid, quad strip indices with
/// a modulo-wrapped seam, analytic interior-facing normals, and (for the
/// render variant) the checkerboard strip UVs.
pub fn build_tube_geometry(
    spline: &dyn SplinePath,
    profile: &RadiusProfile,
    density_x: f32,
    detail: &MeshDetail,
    generate_uvs: bool,
) -> Result<TubeGeometry, TunnelError> {
    if density_x <= 0.0 || detail.precision <= 0.0 {
        return Err(TunnelError::DegenerateConfiguration(format!(
            "density {} / precision {} must both be positive",
            density_x, detail.precision
        )));
    }

    let required = spline.curve_count() + 1;
    if profile.len() != required {
        return Err(TunnelError::StaleProfile {
            required,
            actual: profile.len(),
        });
    }

    let ring_count = ring_count(spline, density_x, detail.precision);
    let radial_segments = detail.radial_segments;
    if ring_count < 2 || radial_segments < 2 {
        return Err(TunnelError::DegenerateConfiguration(format!(
            "tube needs at least 2 rings and 2 radial segments, got {} x {}",
            ring_count, radial_segments
        )));
    }

    let mut positions = Vec::with_capacity(ring_count * radial_segments);
    let mut normals = Vec::with_capacity(ring_count * radial_segments);

    for ring_index in 0..ring_count {
        let t = end_inclusive_t(ring_index, ring_count);
        let ring = ring_sampler::sample(spline, profile, t, 0.0)?;
        let orientation = look_along(ring.direction);

        for column in 0..radial_segments {
            // End-inclusive: the last column repeats the first one's angle,
            // duplicating the seam for a hard UV break.
            let angle = end_inclusive_t(column, radial_segments) * 360.0;
            let radial = orientation * Quat::from_rotation_z(angle.to_radians()) * Vec3::Y;
            positions.push(radial * (ring.radius + detail.inner_offset) + ring.center);
            normals.push(-radial);
        }
    }

    let indices = tube_indices(ring_count, radial_segments);
    debug_assert!(
        indices.iter().all(|&index| (index as usize) < positions.len()),
        "tube index out of range"
    );

    let uvs = if generate_uvs {
        tube_uvs(ring_count, radial_segments)
    } else {
        Vec::new()
    };

    Ok(TubeGeometry {
        positions,
        normals,
        uvs,
        indices,
        ring_count,
        radial_segments,
    })
}

/// Two triangles per quad between consecutive rings, one closed-form loop
/// over every (ring, column) pair with the seam wrapped by modulo. Every
/// index stays below `ring_count * radial_segments` by construction.
fn tube_indices(ring_count: usize, radial_segments: usize) -> Vec<u32> {
    let stride = radial_segments as u32;
    let mut indices = Vec::with_capacity((ring_count - 1) * radial_segments * 6);

    for ring in 0..(ring_count as u32 - 1) {
        for column in 0..stride {
            let near = ring * stride + column;
            let next = ring * stride + (column + 1) % stride;
            let far = near + stride;
            let far_next = next + stride;

            indices.extend_from_slice(&[far, next, near]);
            indices.extend_from_slice(&[far_next, next, far]);
        }
    }

    indices
}

/// Checkerboard-flip strip: even rings carry `(0,1)/(0,0)` column pairs,
/// odd rings `(1,1)/(1,0)`, with the final unpaired column left at its
/// pair-leading value. Lets a tiling texture alternate along the tube.
fn tube_uvs(ring_count: usize, radial_segments: usize) -> Vec<Vec2> {
    let mut uvs = vec![Vec2::ZERO; ring_count * radial_segments];

    for ring in 0..ring_count {
        let u = if ring % 2 == 0 { 0.0 } else { 1.0 };
        for column in (0..radial_segments).step_by(2) {
            uvs[ring * radial_segments + column] = Vec2::new(u, 1.0);
            if column + 1 < radial_segments {
                uvs[ring * radial_segments + column + 1] = Vec2::new(u, 0.0);
            }
        }
    }

    uvs
}

/// Assembles the buffers into a renderable mesh.
pub fn tube_mesh(geometry: TubeGeometry) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, geometry.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, geometry.normals);
    if !geometry.uvs.is_empty() {
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, geometry.uvs);
    }
    mesh.insert_indices(Indices::U32(geometry.indices));
    mesh
}
