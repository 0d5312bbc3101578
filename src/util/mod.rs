pub mod colour;
pub mod linalg;
pub mod log;

pub mod lt_float {
    use anyhow::{bail, Result};

    /// Returns true if `a` and `b` differ by strictly less than `epsilon`.
    ///
    /// NaN on either side never compares within tolerance.
    pub fn within(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Like [`within`], but inclusive of `epsilon` itself.
    pub fn within_inclusive(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() <= epsilon
    }

    /// Converts a unit-range channel value to a byte, rounding to nearest.
    pub fn unit_to_u8(x: f32) -> Result<u8> {
        if !x.is_finite() || !(0.0..=1.0).contains(&x) {
            bail!("{x} is not a unit-range channel value");
        }
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        Ok((x * 255.0).round() as u8)
    }

}
