use std::f32::consts::PI;
use bevy::prelude::*;
use libnoise::{Generator, Source};
use crate::core::radius_profile::RadiusProfile;
use crate::core::ring::RingDescriptor;
use crate::core::tunnel_config::TunnelConfig;
use crate::core::tunnel_error::TunnelError;
use crate::modifiers::pipeline::{ModifierPipeline, PlacementCell};
use crate::spawning::helpers::{end_inclusive_t, look_along, perlin01};
use crate::spawning::ring_sampler;
use crate::spline::SplinePath;

/// One emitted instance, local to its ring's transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstancePlacement {
    pub ring_index: usize,
    pub instance_index: usize,
    pub translation: Vec3,
    pub rotation: Quat,
}

/// One placed ring: its transform plus the instances that survived the
/// modifier pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RingPlacement {
    pub index: usize,
    pub center: Vec3,
    pub orientation: Quat,
    pub instances: Vec<InstancePlacement>,
}

/// Places every ring along the spline. Pure: the output depends only on the
/// arguments, so repeated bakes with unchanged inputs are identical.
pub fn place_tunnel(
    spline: &dyn SplinePath,
    profile: &RadiusProfile,
    config: &TunnelConfig,
    modifiers: &ModifierPipeline,
) -> Result<Vec<RingPlacement>, TunnelError> {
    config.validate()?;

    let required = spline.curve_count() + 1;
    if profile.len() != required {
        return Err(TunnelError::StaleProfile {
            required,
            actual: profile.len(),
        });
    }

    let steps = (spline.distance() * config.density.x).round() as usize;
    if steps == 0 {
        return Err(TunnelError::DegenerateConfiguration(format!(
            "curve of length {} at density {} yields no rings",
            spline.distance(),
            config.density.x
        )));
    }

    let noise = Source::perlin(config.noise.seed);

    (0..steps)
        .map(|index| {
            let t = end_inclusive_t(index, steps);
            let noise_coordinate = index as f32 * config.noise.size;
            let ring = ring_sampler::sample(spline, profile, t, noise_coordinate)?;
            Ok(place_ring(&ring, index, steps, config, modifiers, &noise))
        })
        .collect()
}

/// Places the instances of a single ring: angular distribution, noise
/// perturbation, modifier veto, and final local offset.
pub fn place_ring(
    ring: &RingDescriptor,
    ring_index: usize,
    ring_count: usize,
    config: &TunnelConfig,
    modifiers: &ModifierPipeline,
    noise: &impl Generator<2>,
) -> RingPlacement {
    let amount = (PI * ring.radius * config.density.y).round() as usize;
    let mut instances = Vec::with_capacity(amount);

    for instance_index in 0..amount {
        let angle = instance_index as f32 / amount as f32 * 360.0;
        let perturbation = perlin01(
            noise,
            instance_index as f32 * config.noise.size,
            ring.noise_coordinate,
        ) * config.noise.amount;

        let cell = PlacementCell {
            x: ring_index,
            y: instance_index,
            width: ring_count,
            height: amount,
        };
        if !modifiers.evaluate_condition(cell) {
            continue;
        }

        let around_ring = Quat::from_rotation_z(angle.to_radians());
        let translation = modifiers.apply_position_offsets(
            around_ring * Vec3::Y * (ring.radius + perturbation),
            cell,
        );

        let twist = config.rotation_offset + Vec3::Y * perturbation * 360.0;
        let rotation = around_ring
            * Quat::from_euler(
                EulerRot::XYZ,
                twist.x.to_radians(),
                twist.y.to_radians(),
                twist.z.to_radians(),
            );

        instances.push(InstancePlacement {
            ring_index,
            instance_index,
            translation,
            rotation,
        });
    }

    RingPlacement {
        index: ring_index,
        center: ring.center,
        orientation: look_along(ring.direction),
        instances,
    }
}
