use serde::{Serialize, Deserialize};
use crate::core::tunnel_error::TunnelError;

/// Per-control-point tunnel radii, one entry per curve segment boundary.
/// A profile is valid for a spline with `len() - 1` segments; anything else
/// is stale and must be resized before indexed access.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RadiusProfile {
    sizes: Vec<f32>,
}

impl RadiusProfile {
    pub fn new(sizes: Vec<f32>) -> Self {
        RadiusProfile { sizes }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.sizes.get(index).copied()
    }

    pub fn set(&mut self, index: usize, size: f32) -> Result<(), TunnelError> {
        match self.sizes.get_mut(index) {
            Some(entry) => {
                *entry = size;
                Ok(())
            }
            None => Err(TunnelError::IndexOutOfRange(format!(
                "control point {} out of range ({} sizes)",
                index,
                self.sizes.len()
            ))),
        }
    }

    /// Radius at curve parameter `t` in `[0, 1]`, linearly interpolated
    /// between the two enclosing control points. `t >= 1` clamps onto the
    /// last segment so the final control point is never read past.
    pub fn interpolate(&self, t: f32) -> Result<f32, TunnelError> {
        if self.sizes.len() < 2 {
            return Err(TunnelError::StaleProfile {
                required: 2,
                actual: self.sizes.len(),
            });
        }

        let (index, local) = if t >= 1.0 {
            (self.sizes.len() - 2, 1.0)
        } else {
            let scaled = t.clamp(0.0, 1.0) * (self.sizes.len() - 1) as f32;
            let index = scaled as usize;
            (index, scaled - index as f32)
        };

        Ok(self.sizes[index] + (self.sizes[index + 1] - self.sizes[index]) * local)
    }

    /// New profile sized for `segment_count` curve segments: the overlapping
    /// prefix is preserved, new entries are filled with `default`. Returns
    /// the resized profile together with the number of trailing entries that
    /// were dropped, so callers can report data loss instead of hiding it.
    pub fn resized(&self, segment_count: usize, default: f32) -> (RadiusProfile, usize) {
        let new_len = segment_count + 1;
        let dropped = self.sizes.len().saturating_sub(new_len);

        let sizes = (0..new_len)
            .map(|i| self.sizes.get(i).copied().unwrap_or(default))
            .collect();

        (RadiusProfile { sizes }, dropped)
    }
}
