// src/fabric/mode.rs
use crate::common::FabricError;

/// The final-layer selector of a cycle.
///
/// The same value picks the routing layer and the twiddle every butterfly
/// applies, so the two can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Select {
    /// Fresh inputs, paired for the first stride-8 stage.
    #[default]
    Bypass = 0,
    LayerA = 1,
    LayerB = 2,
    LayerC = 3,
}

impl Select {
    pub const ALL: [Select; 4] = [Select::Bypass, Select::LayerA, Select::LayerB, Select::LayerC];

    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Select::Bypass),
            1 => Some(Select::LayerA),
            2 => Some(Select::LayerB),
            3 => Some(Select::LayerC),
            _ => None,
        }
    }

    #[inline]
    pub const fn twiddle_index(self) -> usize {
        self as usize
    }
}

/// Per-cycle control of the routing fabric.
///
/// Packed as a 7-bit control word: `sel[6:5] s3[4:3] s2[2:1] s1[0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModeVector {
    s1: u8,
    s2: u8,
    s3: u8,
    select: Select,
}

impl ModeVector {
    pub fn new(s1: u8, s2: u8, s3: u8, select: Select) -> Result<Self, FabricError> {
        if s1 > 1 || s2 > 3 || s3 > 3 {
            return Err(FabricError::SelectorOutOfRange);
        }
        Ok(Self { s1, s2, s3, select })
    }

    /// Decodes a control word; bit 7 must be clear.
    pub fn from_bits(word: u8) -> Result<Self, FabricError> {
        let select = Select::from_bits(word >> 5).ok_or(FabricError::SelectorOutOfRange)?;
        Ok(Self {
            s1: word & 0b1,
            s2: (word >> 1) & 0b11,
            s3: (word >> 3) & 0b11,
            select,
        })
    }

    pub const fn to_bits(self) -> u8 {
        ((self.select as u8) << 5) | (self.s3 << 3) | (self.s2 << 1) | self.s1
    }

    /// Fresh inputs straight into the butterflies.
    pub const fn bypass() -> Self {
        Self { s1: 0, s2: 0, s3: 0, select: Select::Bypass }
    }

    // Callers keep `s2 <= 3`.
    pub(crate) const fn layer_a(s2: u8) -> Self {
        Self { s1: 0, s2, s3: 0, select: Select::LayerA }
    }

    pub(crate) const fn layer_b(s1: u8) -> Self {
        Self { s1, s2: 0, s3: 0, select: Select::LayerB }
    }

    pub(crate) const fn layer_c(s3: u8) -> Self {
        Self { s1: 0, s2: 0, s3, select: Select::LayerC }
    }

    #[inline]
    pub const fn s1(self) -> u8 {
        self.s1
    }

    #[inline]
    pub const fn s2(self) -> u8 {
        self.s2
    }

    #[inline]
    pub const fn s3(self) -> u8 {
        self.s3
    }

    #[inline]
    pub const fn select(self) -> Select {
        self.select
    }

    #[inline]
    pub const fn twiddle_index(self) -> usize {
        self.select.twiddle_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_widths() {
        assert!(ModeVector::new(1, 3, 3, Select::LayerC).is_ok());
        assert_eq!(ModeVector::new(2, 0, 0, Select::Bypass), Err(FabricError::SelectorOutOfRange));
        assert_eq!(ModeVector::new(0, 4, 0, Select::LayerA), Err(FabricError::SelectorOutOfRange));
        assert_eq!(ModeVector::new(0, 0, 4, Select::LayerC), Err(FabricError::SelectorOutOfRange));
    }

    #[test]
    fn test_control_word_layout() {
        let mode = ModeVector::new(1, 2, 3, Select::LayerB).unwrap();
        assert_eq!(mode.to_bits(), 0b0101_1101);
        assert_eq!(ModeVector::from_bits(0b0101_1101), Ok(mode));
    }

    #[test]
    fn test_from_bits_rejects_high_bit() {
        assert_eq!(ModeVector::from_bits(0x80), Err(FabricError::SelectorOutOfRange));
    }

    #[test]
    fn test_every_control_word_decodes_back() {
        for word in 0u8..0x80 {
            let mode = ModeVector::from_bits(word).unwrap();
            assert_eq!(mode.to_bits(), word);
        }
    }

    #[test]
    fn test_twiddle_index_is_select() {
        for select in Select::ALL {
            let mode = ModeVector::new(0, 0, 0, select).unwrap();
            assert_eq!(mode.twiddle_index(), select as usize);
        }
        assert_eq!(ModeVector::default(), ModeVector::bypass());
    }
}
