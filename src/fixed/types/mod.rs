pub mod packed;
pub mod twiddle;

pub use packed::{saturate, PackedComplex};
pub use twiddle::TwiddleSet;
