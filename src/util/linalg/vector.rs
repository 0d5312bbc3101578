#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::warn_every_seconds;
use crate::util::lt_float;
use serde::{Deserialize, Serialize};

/// A 3D vector of 32-bit floats.
///
/// Components live in a single `[f32; 3]`; `x()`/`y()`/`z()` and `v[0]`/`v[1]`/`v[2]` are two
/// views of the same storage.
///
/// # Equality
/// Two vectors are equal if every component differs by strictly less than
/// [`VECTOR_EPSILON`](crate::core::config::VECTOR_EPSILON). This absorbs rounding from chains of
/// transforms; it is not transitive, and any NaN component makes a vector unequal to everything.
///
/// # Examples
///
/// ```
/// use lintrans::core::prelude::*;
///
/// let mut v = Vector3::new(1.0, 2.0, 3.0);
/// v[1] = 5.0;
/// assert_eq!(v.y(), 5.0);
/// assert_eq!(v * 2.0, Vector3::new(2.0, 10.0, 6.0));
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3 {
    data: [f32; 3],
}

impl_flat_ops!(Vector3, 3, lt_float::within, VECTOR_EPSILON);
impl_componentwise_ops!(Vector3);
impl_named_components!(Vector3 {
    x, x_mut, set_x => 0,
    y, y_mut, set_y => 1,
    z, z_mut, set_z => 2,
});

impl Vector3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }
    #[must_use]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self { data: [v, v, v] }
    }
    #[must_use]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }
    #[must_use]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`magnitude`](Vector3::magnitude) when comparing lengths, to avoid the
    /// square root.
    #[must_use]
    pub fn magnitude_sqr(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_sqr().sqrt()
    }
    #[must_use]
    pub fn distance(&self, other: Vector3) -> f32 {
        (*self - other).magnitude()
    }

    /// Divides each component by the magnitude, in place.
    ///
    /// A zero-length vector has no direction: every component becomes NaN. This is reported
    /// through a rate-limited warning, not an error.
    pub fn normalise(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            warn_every_seconds!(1, "Vector3::normalise(): zero-length vector, result is NaN");
        }
        *self /= magnitude;
        self
    }
    /// Returns a normalised copy; see [`normalise`](Vector3::normalise).
    #[must_use]
    pub fn normalised(&self) -> Vector3 {
        let mut rv = *self;
        rv.normalise();
        rv
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use lintrans::core::prelude::*;
    /// let v1 = Vector3::new(1.0, 2.0, 3.0);
    /// let v2 = Vector3::new(4.0, -5.0, 6.0);
    /// assert_eq!(v1.dot(v2), 12.0); // 4 - 10 + 18
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vector3) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Computes the right-handed cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// use lintrans::core::prelude::*;
    /// assert_eq!(Vector3::unit_x().cross(Vector3::unit_y()), Vector3::unit_z());
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Returns `acos(self.normalised() · other)`.
    ///
    /// Note that `other` is used as given, not normalised, so the result is only the angle between
    /// the two vectors when `other` already has unit length. Callers wanting the angle between
    /// arbitrary vectors should pass `other.normalised()`. Arguments outside `acos`'s domain give
    /// NaN.
    #[must_use]
    pub fn angle_between(&self, other: Vector3) -> f32 {
        let rv = self.normalised().dot(other).acos();
        if rv.is_nan() {
            warn_every_seconds!(
                1,
                "Vector3::angle_between(): NaN for {} vs. {}",
                self,
                other
            );
        }
        rv
    }

    /// Lifts into homogeneous coordinates with the given `w`.
    #[must_use]
    pub fn extend(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }
}

/// A 4D vector of 32-bit floats, mostly used as a homogeneous point or direction.
///
/// Shares the contract of [`Vector3`]: `x()`/`y()`/`z()`/`w()` alias `v[0..4]`, and equality is
/// per-component within [`VECTOR_EPSILON`](crate::core::config::VECTOR_EPSILON).
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector4 {
    data: [f32; 4],
}

impl_flat_ops!(Vector4, 4, lt_float::within, VECTOR_EPSILON);
impl_componentwise_ops!(Vector4);
impl_named_components!(Vector4 {
    x, x_mut, set_x => 0,
    y, y_mut, set_y => 1,
    z, z_mut, set_z => 2,
    w, w_mut, set_w => 3,
});

impl Vector4 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }
    #[must_use]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self { data: [v, v, v, v] }
    }

    #[must_use]
    pub fn dot(&self, other: Vector4) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Drops `w`.
    #[must_use]
    pub fn truncate(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }
}
