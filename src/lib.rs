//! Linear-algebra primitives for geometric transforms: [`Vector3`](util::linalg::Vector3),
//! [`Vector4`](util::linalg::Vector4), column-major [`Matrix3`](util::linalg::Matrix3) and
//! [`Matrix4`](util::linalg::Matrix4), and a packed RGBA [`Colour`](util::colour::Colour).
//!
//! ```
//! use lintrans::core::prelude::*;
//!
//! let m = Matrix4::translation(3.0, 4.0, 5.0);
//! let p = m * Vector4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(p, Vector4::new(3.0, 4.0, 5.0, 1.0));
//! ```

pub mod core;
pub mod util;
