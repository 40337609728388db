pub mod types;
pub mod core;
pub mod reference;

pub use self::core::{butterfly, complex_multiply, radix_2_dif_butterfly, rotation_word};
pub use reference::ReferenceFft;
pub use types::{saturate, PackedComplex, TwiddleSet};
