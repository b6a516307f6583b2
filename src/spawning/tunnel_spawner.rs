use bevy::prelude::*;
use crate::core::radius_profile::RadiusProfile;
use crate::core::tunnel_config::TunnelConfig;
use crate::core::tunnel_error::TunnelError;
use crate::modifiers::pipeline::{ModifierPipeline, RingModifier};
use crate::spline::SplinePath;

/// Owner of one tunnel: the spline, the bake configuration, the modifier
/// pipeline, and the per-control-point radius profile. Bake events target
/// the entity carrying this component.
#[derive(Component)]
pub struct TunnelSpawner {
    pub spline: Option<Box<dyn SplinePath + Send + Sync>>,
    pub config: TunnelConfig,
    pub modifiers: ModifierPipeline,
    profile: RadiusProfile,
}

impl TunnelSpawner {
    pub fn new(spline: impl SplinePath + Send + Sync + 'static, config: TunnelConfig) -> Self {
        let profile = RadiusProfile::default()
            .resized(spline.curve_count(), config.default_ring_size)
            .0;
        TunnelSpawner {
            spline: Some(Box::new(spline)),
            config,
            modifiers: ModifierPipeline::new(),
            profile,
        }
    }

    /// A spawner with no curve attached; every bake no-ops until one is set.
    pub fn detached(config: TunnelConfig) -> Self {
        TunnelSpawner {
            spline: None,
            config,
            modifiers: ModifierPipeline::new(),
            profile: RadiusProfile::default(),
        }
    }

    pub fn with_modifier(mut self, stage: impl RingModifier + 'static) -> Self {
        self.modifiers.push(stage);
        self
    }

    pub fn set_spline(&mut self, spline: impl SplinePath + Send + Sync + 'static) {
        self.spline = Some(Box::new(spline));
        self.heal_profile();
    }

    pub fn profile(&self) -> &RadiusProfile {
        &self.profile
    }

    /// Resizes the profile to match the current curve, preserving edited
    /// sizes where control points survived. Returns how many trailing sizes
    /// were dropped, so callers can surface the data loss.
    pub fn regenerate_control_point_sizes(&mut self) -> usize {
        match &self.spline {
            Some(spline) => {
                let (profile, dropped) = self
                    .profile
                    .resized(spline.curve_count(), self.config.default_ring_size);
                self.profile = profile;
                dropped
            }
            None => {
                let dropped = self.profile.len();
                self.profile = RadiusProfile::default();
                dropped
            }
        }
    }

    pub fn control_point_size_count(&mut self) -> usize {
        self.heal_profile();
        self.profile.len()
    }

    pub fn get_control_point_size(&mut self, index: usize) -> Result<f32, TunnelError> {
        self.heal_profile();
        self.profile.get(index).ok_or_else(|| {
            TunnelError::IndexOutOfRange(format!(
                "control point {} out of range ({} sizes)",
                index,
                self.profile.len()
            ))
        })
    }

    pub fn set_control_point_size(&mut self, index: usize, size: f32) -> Result<(), TunnelError> {
        self.heal_profile();
        self.profile.set(index, size)
    }

    /// Brings a stale profile back in sync with the curve's segment count.
    /// Safe to call at any time; does nothing when already in sync.
    pub fn heal_profile(&mut self) -> usize {
        match &self.spline {
            Some(spline) if self.profile.len() == spline.curve_count() + 1 => 0,
            Some(_) => self.regenerate_control_point_sizes(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawning::ring_sampler::tests::LineSpline;

    #[test]
    fn new_spawner_sizes_profile_to_curve() {
        let mut spawner = TunnelSpawner::new(LineSpline { length: 10.0 }, TunnelConfig::default());
        assert_eq!(spawner.control_point_size_count(), 2);
        assert_eq!(spawner.get_control_point_size(0).unwrap(), 2.5);
    }

    #[test]
    fn edited_sizes_survive_regeneration() {
        let mut spawner = TunnelSpawner::new(LineSpline { length: 10.0 }, TunnelConfig::default());
        spawner.set_control_point_size(0, 4.0).unwrap();
        let dropped = spawner.regenerate_control_point_sizes();
        assert_eq!(dropped, 0);
        assert_eq!(spawner.get_control_point_size(0).unwrap(), 4.0);
    }

    #[test]
    fn authoring_calls_self_heal_after_curve_swap() {
        let mut spawner = TunnelSpawner::new(LineSpline { length: 10.0 }, TunnelConfig::default());

        // A longer spline with more segments invalidates the stored profile.
        struct TwoSegment;
        impl SplinePath for TwoSegment {
            fn point_uniform(&self, t: f32) -> Vec3 {
                Vec3::new(0.0, 0.0, t * 20.0)
            }
            fn direction_uniform(&self, _t: f32) -> Vec3 {
                Vec3::Z
            }
            fn distance(&self) -> f32 {
                20.0
            }
            fn curve_count(&self) -> usize {
                2
            }
            fn control_point(&self, index: usize) -> Vec3 {
                Vec3::new(0.0, 0.0, index as f32 * 10.0)
            }
            fn control_point_direction(&self, _index: usize) -> Vec3 {
                Vec3::Z
            }
        }

        spawner.spline = Some(Box::new(TwoSegment));
        assert_eq!(spawner.control_point_size_count(), 3);
    }

    #[test]
    fn detached_spawner_has_no_profile() {
        let mut spawner = TunnelSpawner::detached(TunnelConfig::default());
        assert_eq!(spawner.control_point_size_count(), 0);
        assert!(spawner.get_control_point_size(0).is_err());
    }
}
