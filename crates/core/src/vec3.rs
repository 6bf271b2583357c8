//! Immutable 3D vector value type
//!
//! `Vec3` is a plain `Copy` triple of `f64` components. Every transform
//! returns a new value and never mutates its receiver or arguments, so a
//! vector can be shared freely without defensive copying.
//!
//! Floating-point edge cases follow IEEE-754 rather than surfacing as
//! errors: dividing by zero or normalizing the zero vector produces
//! infinite/NaN components instead of panicking.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 3-component geometric vector with `f64` precision.
///
/// Equality is structural and exact: two vectors compare equal iff all three
/// components are bitwise-equal under `f64` comparison. Approximate
/// comparison belongs in the test harness, not here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector (0, 0, 0).
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// The all-ones vector (1, 1, 1).
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Unit vector along the positive X-axis.
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    /// Unit vector along the positive Y-axis.
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Unit vector along the positive Z-axis.
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Create a new vector from discrete components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Create a vector from a slice of exactly 3 components.
    /// Asserts `v.len() == 3`; use `From<[f64; 3]>` when the length is
    /// statically known.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn from_slice(v: &[f64]) -> Self {
        assert!(
            v.len() == 3,
            "Vec3::from_slice: expected 3 components, got {}",
            v.len()
        );
        Vec3::new(v[0], v[1], v[2])
    }

    /// The components as an array, in (x, y, z) order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product of `self` and `rhs`.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product `self` × `rhs`.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Squared Euclidean length. Cheaper than `magnitude` when only
    /// comparisons are needed.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// A unit-length copy of this vector.
    ///
    /// The zero vector has no direction: every component of
    /// `Vec3::ZERO.normalized()` is `0.0 / 0.0 = NaN`. Callers that may hold
    /// a zero vector must check before normalizing.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Vec3 {
        self / self.magnitude()
    }

    /// Azimuthal angle: the angle from the X-axis within the XY-plane,
    /// `atan2(y, x)`, in radians in (−π, π]. A vector on the Z-axis alone
    /// degenerates to 0.
    #[inline]
    #[must_use]
    pub fn azimuth(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Polar angle: the angle from the Z-axis, `atan2(√(x² + y²), z)`, in
    /// radians in [0, π].
    #[inline]
    #[must_use]
    pub fn polar(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt().atan2(self.z)
    }

    /// A copy of this vector, scaled down if needed so its magnitude is at
    /// most `max_length`.
    ///
    /// A `max_length` at or below machine epsilon yields `Vec3::ZERO`.
    /// Vectors already within the limit are returned unchanged.
    #[inline]
    #[must_use]
    pub fn capped(self, max_length: f64) -> Vec3 {
        if max_length <= f64::EPSILON {
            return Vec3::ZERO;
        }
        let mag = self.magnitude();
        if max_length < mag {
            self * (max_length / mag)
        } else {
            self
        }
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

// No divide-by-zero guard: `v / 0.0` propagates IEEE-754 infinities/NaN
// into the components.
impl Div<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        self * -1.0
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// NALGEBRA INTEROP
// ============================================================================

#[cfg(feature = "nalgebra")]
impl From<Vec3> for nalgebra::Vector3<f64> {
    #[inline]
    fn from(v: Vec3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f64>> for Vec3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}
