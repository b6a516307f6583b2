use crate::core::radius_profile::RadiusProfile;
use crate::core::ring::RingDescriptor;
use crate::core::tunnel_error::TunnelError;
use crate::spline::SplinePath;

/// Samples one tunnel cross-section: curve position and tangent at `t`,
/// interpolated radius, and the caller-supplied noise coordinate.
pub fn sample(
    spline: &dyn SplinePath,
    profile: &RadiusProfile,
    t: f32,
    noise_coordinate: f32,
) -> Result<RingDescriptor, TunnelError> {
    Ok(RingDescriptor {
        center: spline.point_uniform(t),
        direction: spline.direction_uniform(t),
        radius: profile.interpolate(t)?,
        noise_coordinate,
    })
}
