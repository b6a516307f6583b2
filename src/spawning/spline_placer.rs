use bevy::prelude::*;
use crate::spawning::helpers::look_along;
use crate::spawning::tunnel_spawner::TunnelSpawner;

/// Pins the owning entity to a point on a spawner's spline. Positioning
/// re-runs whenever the component changes.
#[derive(Component, Debug, Clone)]
pub struct SplineObjectPlacer {
    /// Entity carrying the [`TunnelSpawner`] whose spline to follow.
    pub spawner: Entity,
    /// Normalized distance along the spline in `[0, 1]`.
    pub position_on_spline: f32,
    pub follow_curve_direction: bool,
}

pub fn apply_spline_object_placers(
    mut placers: Query<(&SplineObjectPlacer, &mut Transform), Changed<SplineObjectPlacer>>,
    spawners: Query<&TunnelSpawner>,
) {
    for (placer, mut transform) in placers.iter_mut() {
        let Ok(spawner) = spawners.get(placer.spawner) else {
            warn!("SplineObjectPlacer targets entity {:?} without a TunnelSpawner", placer.spawner);
            continue;
        };
        let Some(spline) = spawner.spline.as_deref() else {
            continue;
        };

        let t = placer.position_on_spline.clamp(0.0, 1.0);
        transform.translation = spline.point_uniform(t);
        if placer.follow_curve_direction {
            transform.rotation = look_along(spline.direction_uniform(t));
        }
    }
}
