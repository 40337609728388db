// src/fixed/types/twiddle.rs
use super::packed::PackedComplex;
use crate::common::FabricError;
use crate::fabric::Select;
use crate::fixed::core::rotation_word;

/// Number of twiddle words a fabric run is configured with.
pub const TWIDDLE_COUNT: usize = 4;

/// The four rotation constants `W0..W3`, fixed for the lifetime of an engine.
///
/// Entry `i` is the twiddle applied by every butterfly on cycles whose
/// select field is `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwiddleSet([PackedComplex; TWIDDLE_COUNT]);

impl TwiddleSet {
    pub const fn new(words: [PackedComplex; TWIDDLE_COUNT]) -> Self {
        Self(words)
    }

    /// Every entry at full positive scale `(127, 0)`.
    pub const fn identity() -> Self {
        Self([PackedComplex::from_parts(127, 0); TWIDDLE_COUNT])
    }

    /// The first four rotations of a 16-point transform, `W16^0..W16^3`.
    pub fn dif16() -> Self {
        Self(core::array::from_fn(|k| rotation_word(k, 16)))
    }

    pub fn from_slice(words: &[PackedComplex]) -> Result<Self, FabricError> {
        let words: [PackedComplex; TWIDDLE_COUNT] =
            words.try_into().map_err(|_| FabricError::SizeMismatch)?;
        Ok(Self(words))
    }

    #[inline]
    pub fn get(&self, select: Select) -> PackedComplex {
        self.0[select.twiddle_index()]
    }

    pub fn words(&self) -> &[PackedComplex; TWIDDLE_COUNT] {
        &self.0
    }
}

impl Default for TwiddleSet {
    fn default() -> Self {
        Self::identity()
    }
}
