#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{Vector3, Vector4};
use crate::util::lt_float;
use serde::{Deserialize, Serialize};

// Behaviour common to both square matrices, written against the column-major backing array:
// element (col, row) lives at `data[col * $n + row]`.
macro_rules! impl_square_matrix {
    ($ty:ident, $vec:ident, $n:literal) => {
        impl $ty {
            #[must_use]
            pub fn zero() -> Self {
                Self {
                    data: [0.0; $n * $n],
                }
            }

            /// Returns the multiplicative identity.
            pub fn identity() -> Self {
                let mut rv = Self::zero();
                for i in 0..$n {
                    rv[(i, i)] = 1.0;
                }
                rv
            }

            /// Builds a matrix from its columns.
            pub fn from_cols(cols: [$vec; $n]) -> Self {
                let mut rv = Self::zero();
                for (col, v) in cols.into_iter().enumerate() {
                    rv.set_axis(col, v);
                }
                rv
            }

            /// Returns column `col` as a vector.
            #[must_use]
            pub fn axis(&self, col: usize) -> $vec {
                let mut rv = $vec::zero();
                rv.as_mut_slice()
                    .copy_from_slice(&self.data[col * $n..(col + 1) * $n]);
                rv
            }
            /// Overwrites column `col`.
            pub fn set_axis(&mut self, col: usize, value: $vec) -> &mut Self {
                self.data[col * $n..(col + 1) * $n].copy_from_slice(value.as_slice());
                self
            }
            #[must_use]
            pub fn axes(&self) -> [$vec; $n] {
                std::array::from_fn(|col| self.axis(col))
            }

            /// Returns row `row`, gathered with one component from each column.
            #[must_use]
            pub fn row(&self, row: usize) -> $vec {
                let mut rv = $vec::zero();
                for col in 0..$n {
                    rv[col] = self[(col, row)];
                }
                rv
            }

            /// Returns a copy with rows and columns swapped.
            pub fn transposed(&self) -> Self {
                let mut rv = Self::zero();
                for col in 0..$n {
                    rv.set_axis(col, self.row(col));
                }
                rv
            }

            /// Returns `identity() * rotate_x(radians)`.
            pub fn rotated_identity(radians: f32) -> Self {
                let mut rv = Self::identity();
                rv *= Self::rotate_x(radians);
                rv
            }

            /// Composes `rotate_z(roll) * rotate_y(yaw) * rotate_x(pitch)`.
            ///
            /// Applied to a vector, the pitch rotation happens first and the roll rotation last.
            pub fn euler(pitch: f32, yaw: f32, roll: f32) -> Self {
                let x = Self::rotate_x(pitch);
                let y = Self::rotate_y(yaw);
                let z = Self::rotate_z(roll);
                z * y * x
            }
            /// Like [`euler`](Self::euler), reading (pitch, yaw, roll) from (x, y, z).
            pub fn euler_vec(rotation: Vector3) -> Self {
                Self::euler(rotation.x(), rotation.y(), rotation.z())
            }

            pub fn scale_vec(scale: Vector3) -> Self {
                Self::scale(scale.x(), scale.y(), scale.z())
            }
            pub fn translation_vec(offset: Vector3) -> Self {
                Self::translation(offset.x(), offset.y(), offset.z())
            }
        }

        /// Grid access by `(col, row)`.
        impl std::ops::Index<(usize, usize)> for $ty {
            type Output = f32;

            fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
                &self.data[col * $n + row]
            }
        }
        impl std::ops::IndexMut<(usize, usize)> for $ty {
            fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
                &mut self.data[col * $n + row]
            }
        }

        impl num_traits::One for $ty {
            fn one() -> Self {
                Self::identity()
            }
        }

        impl std::ops::Mul<$ty> for $ty {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> Self::Output {
                let mut rv = Self::zero();
                for i in 0..$n {
                    let row = self.row(i);
                    for j in 0..$n {
                        rv[(j, i)] = row.dot(rhs.axis(j));
                    }
                }
                rv
            }
        }
        /// `a *= b` is `a = a * b`: `b` becomes the first transform applied to a vector.
        impl std::ops::MulAssign<$ty> for $ty {
            fn mul_assign(&mut self, rhs: $ty) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Mul<$vec> for $ty {
            type Output = $vec;

            fn mul(self, rhs: $vec) -> Self::Output {
                let mut rv = $vec::zero();
                for i in 0..$n {
                    rv[i] = self.row(i).dot(rhs);
                }
                rv
            }
        }
    };
}

/// A 3x3 matrix of 32-bit floats, stored column-major.
///
/// The nine elements `m1..m9` are laid out as:
/// ```text
/// | m1 m4 m7 |
/// | m2 m5 m8 |
/// | m3 m6 m9 |
/// ```
/// and can be reached as named elements (`m5()`), a flat index (`m[4]`), a grid index
/// (`m[(1, 1)]`, column first) or column vectors (`m.axis(1)`), all backed by one array.
///
/// Used for 3D rotation and scale, or as a 2D affine transform acting on `(x, y, 1)` with the
/// translation in the last column.
///
/// Equality holds when every element differs by at most
/// [`MATRIX_EPSILON`](crate::core::config::MATRIX_EPSILON).
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct Matrix3 {
    data: [f32; 9],
}

impl_flat_ops!(Matrix3, 9, lt_float::within_inclusive, MATRIX_EPSILON);
impl_square_matrix!(Matrix3, Vector3, 3);
impl_named_components!(Matrix3 {
    m1, m1_mut, set_m1 => 0,
    m2, m2_mut, set_m2 => 1,
    m3, m3_mut, set_m3 => 2,
    m4, m4_mut, set_m4 => 3,
    m5, m5_mut, set_m5 => 4,
    m6, m6_mut, set_m6 => 5,
    m7, m7_mut, set_m7 => 6,
    m8, m8_mut, set_m8 => 7,
    m9, m9_mut, set_m9 => 8,
});

impl Matrix3 {
    /// Creates a matrix from its elements in storage (column-major) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lintrans::core::prelude::*;
    ///
    /// let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    /// assert_eq!(m.axis(0), Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(m.row(0), Vector3::new(1.0, 4.0, 7.0));
    /// assert_eq!(m[(2, 1)], m.m8());
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m1: f32,
        m2: f32,
        m3: f32,
        m4: f32,
        m5: f32,
        m6: f32,
        m7: f32,
        m8: f32,
        m9: f32,
    ) -> Self {
        Self {
            data: [m1, m2, m3, m4, m5, m6, m7, m8, m9],
        }
    }

    /// Rotation about the x-axis, counter-clockwise when looking down the axis towards the
    /// origin (right-handed).
    ///
    /// ```text
    /// | 1  0       0      |
    /// | 0  cos(θ)  -sin(θ) |
    /// | 0  sin(θ)  cos(θ)  |
    /// ```
    pub fn rotate_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
    }
    /// Rotation about the y-axis, right-handed:
    /// ```text
    /// | cos(θ)   0  sin(θ) |
    /// | 0        1  0      |
    /// | -sin(θ)  0  cos(θ) |
    /// ```
    pub fn rotate_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
    }
    /// Rotation about the z-axis, right-handed:
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)  cos(θ)   0 |
    /// | 0       0        1 |
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use lintrans::core::prelude::*;
    ///
    /// let rot = Matrix3::rotate_z(std::f32::consts::FRAC_PI_2);
    /// assert_eq!(rot * Vector3::unit_x(), Vector3::unit_y());
    /// ```
    pub fn rotate_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, z)
    }
    /// A 2D scale; the third axis keeps a scale of 1.
    pub fn scale_2d(x: f32, y: f32) -> Self {
        Self::scale(x, y, 1.0)
    }

    /// Returns the identity with its last column replaced by `(x, y, z)`.
    ///
    /// For a 2D affine transform pass `z = 1.0`; then `translation(x, y, 1.0) * (px, py, 1)`
    /// is `(px + x, py + y, 1)`.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut rv = Self::identity();
        rv.set_m7(x).set_m8(y).set_m9(z);
        rv
    }
}

/// A 4x4 matrix of 32-bit floats, stored column-major.
///
/// ```text
/// | m1 m5 m9  m13 |
/// | m2 m6 m10 m14 |
/// | m3 m7 m11 m15 |
/// | m4 m8 m12 m16 |
/// ```
/// The same views as [`Matrix3`] are available, with [`Vector4`] columns. Affine transforms keep
/// their translation in `m13..m15` and act on homogeneous points `(x, y, z, 1)`.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct Matrix4 {
    data: [f32; 16],
}

impl_flat_ops!(Matrix4, 16, lt_float::within_inclusive, MATRIX_EPSILON);
impl_square_matrix!(Matrix4, Vector4, 4);
impl_named_components!(Matrix4 {
    m1, m1_mut, set_m1 => 0,
    m2, m2_mut, set_m2 => 1,
    m3, m3_mut, set_m3 => 2,
    m4, m4_mut, set_m4 => 3,
    m5, m5_mut, set_m5 => 4,
    m6, m6_mut, set_m6 => 5,
    m7, m7_mut, set_m7 => 6,
    m8, m8_mut, set_m8 => 7,
    m9, m9_mut, set_m9 => 8,
    m10, m10_mut, set_m10 => 9,
    m11, m11_mut, set_m11 => 10,
    m12, m12_mut, set_m12 => 11,
    m13, m13_mut, set_m13 => 12,
    m14, m14_mut, set_m14 => 13,
    m15, m15_mut, set_m15 => 14,
    m16, m16_mut, set_m16 => 15,
});

impl Matrix4 {
    /// Creates a matrix from its elements in storage (column-major) order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m1: f32,
        m2: f32,
        m3: f32,
        m4: f32,
        m5: f32,
        m6: f32,
        m7: f32,
        m8: f32,
        m9: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m15: f32,
        m16: f32,
    ) -> Self {
        Self {
            data: [
                m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15, m16,
            ],
        }
    }

    /// See [`Matrix3::rotate_x`].
    #[rustfmt::skip]
    pub fn rotate_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
    /// See [`Matrix3::rotate_y`].
    #[rustfmt::skip]
    pub fn rotate_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
    /// See [`Matrix3::rotate_z`].
    #[rustfmt::skip]
    pub fn rotate_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[rustfmt::skip]
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
    pub fn scale_2d(x: f32, y: f32) -> Self {
        Self::scale(x, y, 1.0)
    }

    /// Returns the identity with `(x, y, z)` in the translation column (`m13..m15`).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut rv = Self::identity();
        rv.set_m13(x).set_m14(y).set_m15(z);
        rv
    }

    /// Transforms a point, i.e. `(x, y, z, 1)`, and drops the resulting `w`.
    ///
    /// No perspective divide is performed.
    #[must_use]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        (*self * point.extend(1.0)).truncate()
    }
    /// Transforms a direction, i.e. `(x, y, z, 0)`, so translation has no effect.
    #[must_use]
    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        (*self * direction.extend(0.0)).truncate()
    }
}
