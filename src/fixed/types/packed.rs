// src/fixed/types/packed.rs
use num_complex::Complex;

/// Largest value a packed channel can hold.
pub const CHANNEL_MAX: i32 = i8::MAX as i32;
/// Smallest value a packed channel can hold.
pub const CHANNEL_MIN: i32 = i8::MIN as i32;

/// Clamps a working-width value into the signed byte range of a packed channel.
#[inline]
pub fn saturate(value: i32) -> i8 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX) as i8
}

/// A complex sample packed into 16 bits: the high byte holds the signed real
/// part and the low byte the signed imaginary part.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedComplex(u16);

impl PackedComplex {
    pub const ZERO: Self = Self(0);

    /// Creates a PackedComplex from the raw 16-bit word.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw word.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Builds a word from two channels that are already in range.
    #[inline]
    pub const fn from_parts(re: i8, im: i8) -> Self {
        Self(((re as u8 as u16) << 8) | im as u8 as u16)
    }

    #[inline]
    pub const fn re(self) -> i8 {
        (self.0 >> 8) as u8 as i8
    }

    #[inline]
    pub const fn im(self) -> i8 {
        self.0 as u8 as i8
    }

    /// Sign-extends both channels to the 16-bit working width.
    #[inline]
    pub fn unpack(self) -> Complex<i16> {
        Complex::new(i16::from(self.re()), i16::from(self.im()))
    }

    /// Saturates each channel independently and packs the result.
    #[inline]
    pub fn pack(re: i32, im: i32) -> Self {
        Self::from_parts(saturate(re), saturate(im))
    }

    #[inline]
    pub fn saturating_from(value: Complex<i32>) -> Self {
        Self::pack(value.re, value.im)
    }
}

impl From<(i8, i8)> for PackedComplex {
    fn from((re, im): (i8, i8)) -> Self {
        Self::from_parts(re, im)
    }
}

use core::fmt;

impl fmt::Display for PackedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im() < 0 {
            write!(f, "{}-{}i", self.re(), -i16::from(self.im()))
        } else {
            write!(f, "{}+{}i", self.re(), self.im())
        }
    }
}

impl fmt::Debug for PackedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the channels and the raw word in parentheses
        write!(f, "({}, {}) (raw: {:#06x})", self.re(), self.im(), self.0)
    }
}
