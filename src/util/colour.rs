use crate::util::lt_float;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const RED_SHIFT: u32 = 24;
const GREEN_SHIFT: u32 = 16;
const BLUE_SHIFT: u32 = 8;
const ALPHA_SHIFT: u32 = 0;

/// An RGBA colour packed into a single `u32`.
///
/// The most significant byte holds red, followed by green, blue and alpha. Channels are only
/// reachable through the accessors, so the packed value and the four channels can never disagree.
///
/// # Examples
///
/// ```
/// use lintrans::core::prelude::*;
///
/// let mut c = Colour::new(255, 0, 0, 255);
/// assert_eq!(c.red(), 255);
/// c.set_green(128);
/// assert_eq!(c.packed(), 0xff80_00ff);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colour(u32);

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0, 255);
    pub const WHITE: Colour = Colour::new(255, 255, 255, 255);
    pub const RED: Colour = Colour::new(255, 0, 0, 255);
    pub const GREEN: Colour = Colour::new(0, 255, 0, 255);
    pub const BLUE: Colour = Colour::new(0, 0, 255, 255);
    pub const YELLOW: Colour = Colour::new(255, 255, 0, 255);
    pub const MAGENTA: Colour = Colour::new(255, 0, 255, 255);
    pub const CYAN: Colour = Colour::new(0, 255, 255, 255);
    pub const EMPTY: Colour = Colour::new(0, 0, 0, 0);

    /// Packs all four channels at once.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            ((red as u32) << RED_SHIFT)
                | ((green as u32) << GREEN_SHIFT)
                | ((blue as u32) << BLUE_SHIFT)
                | ((alpha as u32) << ALPHA_SHIFT),
        )
    }
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }
    pub const fn packed(&self) -> u32 {
        self.0
    }

    /// Builds a colour from unit-range floats, e.g. the output of a shader.
    ///
    /// Fails if any channel is non-finite or outside `[0, 1]`.
    pub fn from_f32(rgba: [f32; 4]) -> Result<Self> {
        let [r, g, b, a] = rgba;
        Ok(Self::new(
            lt_float::unit_to_u8(r).context("red")?,
            lt_float::unit_to_u8(g).context("green")?,
            lt_float::unit_to_u8(b).context("blue")?,
            lt_float::unit_to_u8(a).context("alpha")?,
        ))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn channel(&self, shift: u32) -> u8 {
        (self.0 >> shift) as u8
    }
    fn set_channel(&mut self, shift: u32, value: u8) {
        self.0 = (self.0 & !(0xff << shift)) | (u32::from(value) << shift);
    }

    pub fn red(&self) -> u8 {
        self.channel(RED_SHIFT)
    }
    pub fn green(&self) -> u8 {
        self.channel(GREEN_SHIFT)
    }
    pub fn blue(&self) -> u8 {
        self.channel(BLUE_SHIFT)
    }
    pub fn alpha(&self) -> u8 {
        self.channel(ALPHA_SHIFT)
    }

    /// Replaces the red channel, leaving the other three bytes untouched.
    pub fn set_red(&mut self, red: u8) -> &mut Self {
        self.set_channel(RED_SHIFT, red);
        self
    }
    pub fn set_green(&mut self, green: u8) -> &mut Self {
        self.set_channel(GREEN_SHIFT, green);
        self
    }
    pub fn set_blue(&mut self, blue: u8) -> &mut Self {
        self.set_channel(BLUE_SHIFT, blue);
        self
    }
    pub fn set_alpha(&mut self, alpha: u8) -> &mut Self {
        self.set_channel(ALPHA_SHIFT, alpha);
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.set_alpha(alpha);
        self
    }

    pub fn as_bytes(&self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
    pub fn as_f32(&self) -> [f32; 4] {
        self.as_bytes().map(|c| f32::from(c) / 255.0)
    }
}

impl Default for Colour {
    fn default() -> Self {
        let mut rv = Self(0);
        rv.set_red(0).set_blue(0).set_green(0).set_alpha(255);
        rv
    }
}

impl From<Colour> for u32 {
    fn from(value: Colour) -> Self {
        value.packed()
    }
}

impl From<[u8; 4]> for Colour {
    fn from(value: [u8; 4]) -> Self {
        let [r, g, b, a] = value;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for [u8; 4] {
    fn from(value: Colour) -> Self {
        value.as_bytes()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        let c = Colour::default();
        assert_eq!(c.as_bytes(), [0, 0, 0, 255]);
        assert_eq!(c, Colour::BLACK);
        assert_eq!(c.packed(), 0x0000_00ff);
    }

    #[test]
    fn new_reads_back() {
        let c = Colour::new(255, 0, 0, 255);
        assert_eq!(c.red(), 255);
        assert_eq!(c.green(), 0);
        assert_eq!(c.blue(), 0);
        assert_eq!(c.alpha(), 255);

        let c = Colour::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.packed(), 0x1234_5678);
        assert_eq!(c.as_bytes(), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn set_red_round_trip_keeps_other_channels() {
        let mut c = Colour::new(10, 20, 30, 40);
        for x in 0..=u8::MAX {
            c.set_red(x);
            assert_eq!(c.red(), x);
            assert_eq!(c.green(), 20);
            assert_eq!(c.blue(), 30);
            assert_eq!(c.alpha(), 40);
        }
    }

    #[test]
    fn setters_touch_one_byte_each() {
        let mut c = Colour::from_packed(0xffff_ffff);
        c.set_green(0);
        assert_eq!(c.packed(), 0xff00_ffff);
        c.set_blue(0);
        assert_eq!(c.packed(), 0xff00_00ff);
        c.set_alpha(0x0f);
        assert_eq!(c.packed(), 0xff00_000f);
        c.set_red(0);
        assert_eq!(c.packed(), 0x0000_000f);
    }

    #[test]
    fn setters_chain() {
        let mut c = Colour::EMPTY;
        c.set_red(1).set_green(2).set_blue(3).set_alpha(4);
        assert_eq!(c, Colour::new(1, 2, 3, 4));
        assert_eq!(Colour::RED.with_alpha(0), Colour::new(255, 0, 0, 0));
    }

    #[test]
    fn conversions() {
        let c: Colour = [1, 2, 3, 4].into();
        let packed: u32 = c.into();
        assert_eq!(packed, 0x0102_0304);
        let bytes: [u8; 4] = c.into();
        assert_eq!(bytes, [1, 2, 3, 4]);
        assert_eq!(Colour::WHITE.as_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Colour::EMPTY.as_f32(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn from_f32() {
        assert_eq!(Colour::from_f32([1.0, 0.0, 1.0, 1.0]).unwrap(), Colour::MAGENTA);
        let err = Colour::from_f32([0.0, 2.0, 0.0, 1.0]).unwrap_err();
        assert_eq!(err.to_string(), "green");
        assert!(Colour::from_f32([0.0, 0.0, f32::NAN, 1.0]).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Colour::CYAN.to_string(), "0, 255, 255, 255");
    }

    #[test]
    fn serialises_as_packed_u32() {
        let bytes = bincode::serialize(&Colour::YELLOW).unwrap();
        assert_eq!(bytes.len(), 4);
        let c: Colour = bincode::deserialize(&bytes).unwrap();
        assert_eq!(c, Colour::YELLOW);
    }
}
