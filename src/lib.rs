#![no_std]

// Enables the standard library for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fabric;
pub mod fixed;

pub use common::{FabricError, FftProcess};
pub use fabric::{Engine, FeedbackStore, FoldedFft, ModeVector, Schedule, Select, StageSequencer};
pub use fixed::{PackedComplex, ReferenceFft, TwiddleSet};
