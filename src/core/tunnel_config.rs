use bevy::prelude::*;
use serde::{Serialize, Deserialize};
use crate::core::tmaterial::TMaterial;
use crate::core::tunnel_error::TunnelError;

/// Periodic noise applied to instance placement. `seed` feeds the Perlin
/// generator, `size` scales the sample coordinates, `amount` scales the
/// resulting radial perturbation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NoiseParams {
    pub seed: u64,
    pub size: f32,
    pub amount: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        NoiseParams {
            seed: 132,
            size: 0.5,
            amount: 0.3,
        }
    }
}

/// Resolution of a generated tube mesh. `precision` multiplies the ring
/// density along the curve; `radial_segments` counts vertex columns around
/// the circumference, seam column included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeshDetail {
    pub inner_offset: f32,
    pub precision: f32,
    pub radial_segments: usize,
}

impl MeshDetail {
    pub fn render_default() -> Self {
        MeshDetail {
            inner_offset: 0.3,
            precision: 0.2,
            radial_segments: 12,
        }
    }

    pub fn collider_default() -> Self {
        MeshDetail {
            inner_offset: 0.3,
            precision: 0.1,
            radial_segments: 8,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TunnelConfig {
    /// x: rings per unit of curve length, y: instances per unit of ring
    /// circumference radius.
    pub density: Vec2,
    pub default_ring_size: f32,
    pub noise: NoiseParams,
    /// Additional instance rotation, XYZ euler degrees.
    pub rotation_offset: Vec3,
    /// Template scene instantiated at every placement record.
    pub instance_scene: Option<String>,
    pub material: TMaterial,
    pub mesh_detail: MeshDetail,
    pub collider_detail: MeshDetail,
    pub override_existing: bool,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        TunnelConfig {
            density: Vec2::ONE,
            default_ring_size: 2.5,
            noise: NoiseParams::default(),
            rotation_offset: Vec3::ZERO,
            instance_scene: None,
            material: TMaterial::default(),
            mesh_detail: MeshDetail::render_default(),
            collider_detail: MeshDetail::collider_default(),
            override_existing: true,
        }
    }
}

impl TunnelConfig {
    /// Rejects configurations that would produce empty or unbounded buffers
    /// before anything is allocated.
    pub fn validate(&self) -> Result<(), TunnelError> {
        if self.density.x <= 0.0 || self.density.y <= 0.0 {
            return Err(TunnelError::DegenerateConfiguration(format!(
                "density must be positive, got {:?}",
                self.density
            )));
        }
        if self.default_ring_size <= 0.0 {
            return Err(TunnelError::DegenerateConfiguration(format!(
                "default ring size must be positive, got {}",
                self.default_ring_size
            )));
        }
        if !(0.0..=1.0).contains(&self.noise.size) {
            return Err(TunnelError::DegenerateConfiguration(format!(
                "noise size must lie in [0, 1], got {}",
                self.noise.size
            )));
        }
        for detail in [&self.mesh_detail, &self.collider_detail] {
            if detail.precision <= 0.0 {
                return Err(TunnelError::DegenerateConfiguration(format!(
                    "mesh precision must be positive, got {}",
                    detail.precision
                )));
            }
            if detail.radial_segments < 2 {
                return Err(TunnelError::DegenerateConfiguration(format!(
                    "at least 2 radial segments required, got {}",
                    detail.radial_segments
                )));
            }
        }
        Ok(())
    }
}
