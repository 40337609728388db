// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FabricError {
    SizeMismatch,
    NotPowerOfTwo,
    BufferTooSmall,
    SelectorOutOfRange,
}

use core::fmt;

impl fmt::Display for FabricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FabricError::SizeMismatch => write!(f, "Data buffer size does not match transform size"),
            FabricError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FabricError::BufferTooSmall => write!(f, "Auxiliary buffers are too small"),
            FabricError::SelectorOutOfRange => write!(f, "Selector value exceeds its bit width"),
        }
    }
}

/// A transform that runs in-place over a buffer of samples.
pub trait FftProcess<T> {
    fn process(&mut self, buffer: &mut [T]) -> Result<(), FabricError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FabricError {}
