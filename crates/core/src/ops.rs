//! Free functions combining multiple vectors
//!
//! Everything here is built on the public `Vec3` contract: pure functions
//! that read their arguments and return fresh values.

use crate::vec3::Vec3;

/// Euclidean distance between `u` and `v`. Symmetric; zero iff `u == v`.
#[inline]
#[must_use]
pub fn distance(u: Vec3, v: Vec3) -> f64 {
    (u - v).magnitude()
}

/// Convert spherical coordinates to a Cartesian vector.
///
/// `polar` is the angle from the Z-axis in [0, π]; `azimuth` is the angle
/// from the X-axis within the XY-plane, periodic mod 2π. A zero `radius`
/// yields the zero vector for any angles.
#[inline]
#[must_use]
pub fn from_spherical(radius: f64, polar: f64, azimuth: f64) -> Vec3 {
    let (sp, cp) = polar.sin_cos();
    let (sa, ca) = azimuth.sin_cos();
    Vec3::new(radius * sp * ca, radius * sp * sa, radius * cp)
}

/// Linearly interpolate between `a` at `t = 0` and `b` at `t = 1`.
///
/// `t` is NOT clamped: values outside [0, 1] extrapolate along the same
/// line.
#[inline]
#[must_use]
pub fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    a + (b - a) * t
}

/// Arithmetic mean of the given vectors. An empty slice yields the zero
/// vector.
#[must_use]
pub fn average(vectors: &[Vec3]) -> Vec3 {
    if vectors.is_empty() {
        return Vec3::ZERO;
    }
    let sum = vectors.iter().fold(Vec3::ZERO, |acc, &v| acc + v);
    sum / vectors.len() as f64
}

/// Weighted mean of the given vectors.
///
/// Vectors and weights pair up by index up to the shorter of the two
/// slices; extra elements of the longer one are ignored. Weights at or
/// below machine epsilon (tiny or negative) are excluded from both the
/// numerator and the total-weight denominator. If no weight survives, the
/// result is the untouched accumulator: the zero vector.
#[must_use]
pub fn weighted_average(vectors: &[Vec3], weights: &[f64]) -> Vec3 {
    let mut accumulator = Vec3::ZERO;
    let mut total_weight = 0.0;

    for (&vec, &weight) in vectors.iter().zip(weights) {
        if weight > f64::EPSILON {
            total_weight += weight;
            accumulator = accumulator + vec * weight;
        }
    }

    if total_weight > f64::EPSILON {
        accumulator / total_weight
    } else {
        accumulator
    }
}

/// Projection of `v` onto the *unit* vector `n`, as a vector along `n`.
///
/// Caller contract: `n` must already be unit length — this function does
/// not normalize it, and a non-unit `n` silently produces a scaled result.
/// Orthogonal `v` and `n` yield the zero vector.
#[inline]
#[must_use]
pub fn project(v: Vec3, n: Vec3) -> Vec3 {
    n * v.dot(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, max_relative = 1e-12, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, max_relative = 1e-12, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, max_relative = 1e-12, epsilon = 1e-12);
    }

    #[test]
    fn test_distance() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(4.0, -2.0, 3.0);
        assert_eq!(distance(u, v), 5.0);
        assert_eq!(distance(u, v), distance(v, u));
        assert_eq!(distance(u, u), 0.0);
    }

    #[test]
    fn test_from_spherical_axes() {
        assert_vec_close(from_spherical(1.0, FRAC_PI_2, 0.0), Vec3::X);
        assert_vec_close(from_spherical(1.0, FRAC_PI_2, FRAC_PI_2), Vec3::Y);
        assert_vec_close(from_spherical(1.0, 0.0, 0.0), Vec3::Z);
        assert_vec_close(from_spherical(1.0, PI, 0.0), -Vec3::Z);
        assert_vec_close(from_spherical(2.5, FRAC_PI_2, PI), Vec3::X * -2.5);
    }

    #[test]
    fn test_from_spherical_zero_radius() {
        for angle in [0.0, 1.0, -2.0, PI, 123.456] {
            let v = from_spherical(0.0, angle, angle * 0.7);
            assert_eq!(v, Vec3::ZERO);
        }
    }

    #[test]
    fn test_from_spherical_azimuth_periodic() {
        let a = from_spherical(3.0, 1.1, 0.4);
        let b = from_spherical(3.0, 1.1, 0.4 + TAU);
        let c = from_spherical(3.0, 1.1, 0.4 - TAU);
        assert_vec_close(a, b);
        assert_vec_close(a, c);
    }

    #[test]
    fn test_lerp_boundaries() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-3.0, 6.0, 3.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec3::new(-1.0, 4.0, 3.0));
    }

    #[test]
    fn test_lerp_is_unclamped() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 2.0, -1.0);
        assert_eq!(lerp(a, b, 2.0), Vec3::new(2.0, 4.0, -2.0));
        assert_eq!(lerp(a, b, -1.0), Vec3::new(-1.0, -2.0, 1.0));
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), Vec3::ZERO);

        let v = Vec3::new(-2.0, 3.5, 0.4);
        assert_eq!(average(&[v]), v);

        let mean = average(&[
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(3.0, 2.0, 5.0),
            Vec3::new(2.0, 4.0, 2.0),
        ]);
        assert_eq!(mean, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_average_does_not_mutate_inputs() {
        let inputs = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let before = inputs;
        let _ = average(&inputs);
        assert_eq!(inputs, before);
    }

    #[test]
    fn test_weighted_average_equal_weights() {
        let result = weighted_average(
            &[Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0)],
            &[3.5, 3.5],
        );
        assert_eq!(result, Vec3::new(1.5, 2.0, 2.5));
    }

    #[test]
    fn test_weighted_average_excludes_non_positive_weights() {
        let vectors = [
            Vec3::new(10.0, 10.0, 10.0),
            Vec3::new(2.0, 3.0, 4.0),
            Vec3::new(-100.0, 0.0, 0.0),
        ];
        // Zero and negative weights drop the first and last vectors entirely.
        let result = weighted_average(&vectors, &[0.0, 2.0, -5.0]);
        assert_eq!(result, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_weighted_average_all_excluded_yields_zero() {
        let vectors = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        assert_eq!(weighted_average(&vectors, &[0.0, -1.0]), Vec3::ZERO);
        assert_eq!(weighted_average(&vectors, &[f64::EPSILON; 2]), Vec3::ZERO);
        assert_eq!(weighted_average(&[], &[]), Vec3::ZERO);
    }

    #[test]
    fn test_weighted_average_truncates_to_shorter_input() {
        let vectors = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        // Only the first two vectors pair with a weight.
        let result = weighted_average(&vectors, &[1.0, 1.0]);
        assert_eq!(result, Vec3::new(0.5, 0.5, 0.0));

        // Extra weights beyond the vector count are ignored too.
        let result = weighted_average(&vectors[..1], &[1.0, 99.0, 99.0]);
        assert_eq!(result, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_onto_axis() {
        let v = Vec3::new(-2.0, 3.5, 0.4);
        assert_eq!(project(v, Vec3::X), Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(project(v, Vec3::Y), Vec3::new(0.0, 3.5, 0.0));
        assert_eq!(project(v, Vec3::Z), Vec3::new(0.0, 0.0, 0.4));
    }

    #[test]
    fn test_project_orthogonal_is_zero() {
        assert_eq!(project(Vec3::Z * 7.0, Vec3::X), Vec3::ZERO);
    }

    #[test]
    fn test_project_residual_is_orthogonal() {
        let v = Vec3::new(-2.0, 3.5, 0.4);
        let n = Vec3::new(1.0, 2.0, -2.0).normalized();
        let residual = v - project(v, n);
        assert_relative_eq!(residual.dot(n), 0.0, epsilon = 1e-12);
    }
}
