use bevy::prelude::*;
use bevy::math::cubic_splines::{CubicCardinalSpline, CubicCurve, CubicGenerator};
use itertools::Itertools;
use crate::core::tunnel_error::TunnelError;

/// Curve collaborator consumed by the samplers and builders. `t` is a
/// normalized distance along the curve in `[0, 1]`, so uniform queries are
/// uniform in arc length, not in curve parameter.
pub trait SplinePath {
    fn point_uniform(&self, t: f32) -> Vec3;
    fn direction_uniform(&self, t: f32) -> Vec3;
    /// Total arc length.
    fn distance(&self) -> f32;
    /// Number of curve segments; a matching radius profile holds
    /// `curve_count() + 1` entries.
    fn curve_count(&self) -> usize;
    fn control_point(&self, index: usize) -> Vec3;
    fn control_point_direction(&self, index: usize) -> Vec3;
}

// Samples per curve segment when building the arc-length table. Dense
// enough that linear interpolation between entries stays well under the
// ring spacing of any sane density setting.
const ARC_SAMPLES_PER_SEGMENT: usize = 32;

/// Cardinal-spline implementation of [`SplinePath`], built from control
/// points and a tension factor. A precomputed cumulative arc-length table
/// maps normalized distance back onto the curve parameter.
pub struct CardinalSplinePath {
    control_points: Vec<Vec3>,
    curve: CubicCurve<Vec3>,
    arc_lengths: Vec<f32>,
    total_length: f32,
}

impl CardinalSplinePath {
    pub fn new(control_points: Vec<Vec3>, tension: f32) -> Result<Self, TunnelError> {
        if control_points.len() < 2 {
            return Err(TunnelError::MissingSpline);
        }

        let curve = CubicCardinalSpline::new(tension, control_points.clone())
            .to_curve()
            .map_err(|e| TunnelError::Other(format!("spline construction failed: {e}")))?;

        let segment_count = curve.segments().len();
        let sample_count = segment_count * ARC_SAMPLES_PER_SEGMENT;

        let samples: Vec<Vec3> = (0..=sample_count)
            .map(|i| curve.position(i as f32 / sample_count as f32 * segment_count as f32))
            .collect();

        let mut arc_lengths = Vec::with_capacity(sample_count + 1);
        arc_lengths.push(0.0);
        let mut total_length = 0.0;
        for (a, b) in samples.iter().tuple_windows() {
            total_length += a.distance(*b);
            arc_lengths.push(total_length);
        }

        Ok(CardinalSplinePath {
            control_points,
            curve,
            arc_lengths,
            total_length,
        })
    }

    /// Maps normalized arc distance to the underlying curve parameter in
    /// `[0, segment_count]`.
    fn parameter_at(&self, t: f32) -> f32 {
        let segment_count = self.curve.segments().len() as f32;
        let target = t.clamp(0.0, 1.0) * self.total_length;

        let index = match self
            .arc_lengths
            .partition_point(|&length| length < target)
        {
            0 => return 0.0,
            i if i >= self.arc_lengths.len() => return segment_count,
            i => i - 1,
        };

        let below = self.arc_lengths[index];
        let above = self.arc_lengths[index + 1];
        let span = above - below;
        let local = if span > f32::EPSILON {
            (target - below) / span
        } else {
            0.0
        };

        (index as f32 + local) / (self.arc_lengths.len() - 1) as f32 * segment_count
    }
}

impl SplinePath for CardinalSplinePath {
    fn point_uniform(&self, t: f32) -> Vec3 {
        self.curve.position(self.parameter_at(t))
    }

    fn direction_uniform(&self, t: f32) -> Vec3 {
        self.curve.velocity(self.parameter_at(t)).normalize_or_zero()
    }

    fn distance(&self) -> f32 {
        self.total_length
    }

    fn curve_count(&self) -> usize {
        self.curve.segments().len()
    }

    fn control_point(&self, index: usize) -> Vec3 {
        self.control_points[index.min(self.control_points.len() - 1)]
    }

    fn control_point_direction(&self, index: usize) -> Vec3 {
        let parameter = index.min(self.curve_count()) as f32;
        self.curve.velocity(parameter).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_path() -> CardinalSplinePath {
        let points = (0..=4).map(|i| Vec3::new(0.0, 0.0, i as f32 * 2.5)).collect();
        CardinalSplinePath::new(points, 0.5).unwrap()
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        assert_eq!(
            CardinalSplinePath::new(vec![Vec3::ZERO], 0.5).err(),
            Some(TunnelError::MissingSpline)
        );
    }

    #[test]
    fn straight_spline_length_matches_chord() {
        let path = straight_path();
        assert!((path.distance() - 10.0).abs() < 0.05, "length {}", path.distance());
    }

    #[test]
    fn uniform_endpoints_land_on_curve_ends() {
        let path = straight_path();
        assert!(path.point_uniform(0.0).distance(Vec3::ZERO) < 1e-3);
        assert!(path.point_uniform(1.0).distance(Vec3::new(0.0, 0.0, 10.0)) < 1e-3);
    }

    #[test]
    fn direction_follows_the_curve() {
        let path = straight_path();
        for step in 0..=10 {
            let direction = path.direction_uniform(step as f32 / 10.0);
            assert!(direction.dot(Vec3::Z) > 0.99, "direction {:?}", direction);
        }
    }

    #[test]
    fn control_point_queries_match_the_inputs() {
        let path = straight_path();
        assert_eq!(path.curve_count() + 1, 5);
        assert_eq!(path.control_point(0), Vec3::ZERO);
        assert_eq!(path.control_point(4), Vec3::new(0.0, 0.0, 10.0));
        assert!(path.control_point_direction(2).dot(Vec3::Z) > 0.99);
    }

    #[test]
    fn uniform_sampling_is_uniform_in_distance() {
        let path = straight_path();
        let quarter = path.point_uniform(0.25);
        let half = path.point_uniform(0.5);
        assert!((quarter.z - 2.5).abs() < 0.1, "quarter {:?}", quarter);
        assert!((half.z - 5.0).abs() < 0.1, "half {:?}", half);
    }
}
