//! Fixed-size vectors and column-major matrices.
//!
//! Every type here stores its components in one flat `[f32; N]`. Named accessors, flat indexing,
//! grid indexing and column views all read and write that single array.

// Operators shared by every flat-array type: component-wise add/sub, scalar mul/div, negation,
// flat indexing, slice views, array conversions, tolerance equality and `Display`.
macro_rules! impl_flat_ops {
    ($ty:ident, $n:literal, $within:path, $epsilon:expr) => {
        impl $ty {
            /// The components in storage order.
            pub fn as_slice(&self) -> &[f32] {
                &self.data
            }
            pub fn as_mut_slice(&mut self) -> &mut [f32] {
                &mut self.data
            }
            pub fn to_array(&self) -> [f32; $n] {
                self.data
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.data
                    .iter()
                    .zip(other.data.iter())
                    .all(|(&a, &b)| $within(a, b, $epsilon))
            }
        }

        impl std::ops::Index<usize> for $ty {
            type Output = f32;

            fn index(&self, index: usize) -> &Self::Output {
                &self.data[index]
            }
        }
        impl std::ops::IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.data[index]
            }
        }

        impl AsRef<[f32]> for $ty {
            fn as_ref(&self) -> &[f32] {
                &self.data
            }
        }
        impl AsMut<[f32]> for $ty {
            fn as_mut(&mut self) -> &mut [f32] {
                &mut self.data
            }
        }

        impl From<[f32; $n]> for $ty {
            fn from(value: [f32; $n]) -> Self {
                Self { data: value }
            }
        }
        impl From<$ty> for [f32; $n] {
            fn from(value: $ty) -> Self {
                value.data
            }
        }
        impl TryFrom<&[f32]> for $ty {
            type Error = anyhow::Error;

            fn try_from(value: &[f32]) -> anyhow::Result<Self> {
                if value.len() != $n {
                    anyhow::bail!(
                        "{}: expected {} components, got {}",
                        stringify!($ty),
                        $n,
                        value.len()
                    );
                }
                let mut data = [0.0; $n];
                data.copy_from_slice(value);
                Ok(Self { data })
            }
        }

        impl std::ops::Add<$ty> for $ty {
            type Output = $ty;

            fn add(mut self, rhs: $ty) -> Self::Output {
                self += rhs;
                self
            }
        }
        impl std::ops::AddAssign<$ty> for $ty {
            fn add_assign(&mut self, rhs: $ty) {
                for (a, b) in self.data.iter_mut().zip(rhs.data) {
                    *a += b;
                }
            }
        }

        impl std::ops::Sub<$ty> for $ty {
            type Output = $ty;

            fn sub(mut self, rhs: $ty) -> Self::Output {
                self -= rhs;
                self
            }
        }
        impl std::ops::SubAssign<$ty> for $ty {
            fn sub_assign(&mut self, rhs: $ty) {
                for (a, b) in self.data.iter_mut().zip(rhs.data) {
                    *a -= b;
                }
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = $ty;

            fn mul(self, rhs: f32) -> Self::Output {
                rhs * self
            }
        }
        impl std::ops::Mul<$ty> for f32 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> Self::Output {
                $ty {
                    data: rhs.data.map(|x| self * x),
                }
            }
        }
        impl std::ops::MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                for x in &mut self.data {
                    *x *= rhs;
                }
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = $ty;

            fn div(mut self, rhs: f32) -> Self::Output {
                self /= rhs;
                self
            }
        }
        impl std::ops::DivAssign<f32> for $ty {
            fn div_assign(&mut self, rhs: f32) {
                for x in &mut self.data {
                    *x /= rhs;
                }
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> Self::Output {
                $ty {
                    data: self.data.map(|x| -x),
                }
            }
        }

        impl std::iter::Sum<$ty> for $ty {
            fn sum<I: Iterator<Item = $ty>>(iter: I) -> Self {
                iter.fold(Self::zero(), std::ops::Add::add)
            }
        }

        impl num_traits::Zero for $ty {
            fn zero() -> Self {
                Self::zero()
            }

            fn is_zero(&self) -> bool {
                *self == Self::zero()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::util::linalg::write_components(f, &self.data)
            }
        }
    };
}

// Component-wise products between two vectors of the same arity.
macro_rules! impl_componentwise_ops {
    ($ty:ident) => {
        impl std::ops::Mul<$ty> for $ty {
            type Output = $ty;

            fn mul(mut self, rhs: $ty) -> Self::Output {
                self *= rhs;
                self
            }
        }
        impl std::ops::MulAssign<$ty> for $ty {
            fn mul_assign(&mut self, rhs: $ty) {
                for (a, b) in self.data.iter_mut().zip(rhs.data) {
                    *a *= b;
                }
            }
        }

        impl std::ops::Div<$ty> for $ty {
            type Output = $ty;

            fn div(mut self, rhs: $ty) -> Self::Output {
                self /= rhs;
                self
            }
        }
        impl std::ops::DivAssign<$ty> for $ty {
            fn div_assign(&mut self, rhs: $ty) {
                for (a, b) in self.data.iter_mut().zip(rhs.data) {
                    *a /= b;
                }
            }
        }
    };
}

// Named getters, mutable references and chaining setters aliasing slots of the backing array.
macro_rules! impl_named_components {
    ($ty:ident { $($get:ident, $get_mut:ident, $set:ident => $index:literal),+ $(,)? }) => {
        impl $ty {
            $(
                pub fn $get(&self) -> f32 {
                    self.data[$index]
                }
                pub fn $get_mut(&mut self) -> &mut f32 {
                    &mut self.data[$index]
                }
                pub fn $set(&mut self, value: f32) -> &mut Self {
                    self.data[$index] = value;
                    self
                }
            )+
        }
    };
}

mod matrix;
mod vector;

pub use matrix::{Matrix3, Matrix4};
pub use vector::{Vector3, Vector4};

use crate::core::config::DISPLAY_PRECISION;
use itertools::Itertools;
use std::fmt;

/// Writes `values` as comma-separated fixed-point decimals.
///
/// Uses the formatter's precision if one was given (`{:.2}`), otherwise
/// [`DISPLAY_PRECISION`](crate::core::config::DISPLAY_PRECISION) digits.
pub(crate) fn write_components(f: &mut fmt::Formatter<'_>, values: &[f32]) -> fmt::Result {
    let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
    write!(
        f,
        "{}",
        values
            .iter()
            .map(|x| format!("{x:.precision$}"))
            .join(", ")
    )
}
