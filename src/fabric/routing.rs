// src/fabric/routing.rs
//
// Butterfly `b` consumes slots `2b` (x0) and `2b + 1` (x1). Each table below
// lists, per destination slot, the source behind every selector value.

use super::mode::{ModeVector, Select};
use super::SLOTS;
use crate::fixed::PackedComplex;

/// Where a destination slot reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// Primary input bus, by index.
    Fresh(u8),
    /// Feedback register, by index (last cycle's butterfly outputs).
    Feedback(u8),
    /// Reserved selector encodings resolve here.
    Zero,
}

use Source::{Feedback as Fb, Fresh as In, Zero};

/// `sel = 0`: fresh inputs paired `(n, n + 8)` for the first stage.
#[rustfmt::skip]
pub const BYPASS: [Source; SLOTS] = [
    In(0), In(8), In(1), In(9), In(2), In(10), In(3), In(11),
    In(4), In(12), In(5), In(13), In(6), In(14), In(7), In(15),
];

/// Layer A, indexed by `s2`: fresh, stride-4 regroup, stride-2 regroup, reserved.
pub const LAYER_A: [[Source; 4]; SLOTS] = [
    [In(0), Fb(0), Fb(0), Zero],
    [In(1), Fb(8), Fb(4), Zero],
    [In(2), Fb(2), Fb(2), Zero],
    [In(3), Fb(10), Fb(6), Zero],
    [In(4), Fb(4), Fb(1), Zero],
    [In(5), Fb(12), Fb(5), Zero],
    [In(6), Fb(6), Fb(3), Zero],
    [In(7), Fb(14), Fb(7), Zero],
    [In(8), Fb(1), Fb(8), Zero],
    [In(9), Fb(9), Fb(12), Zero],
    [In(10), Fb(3), Fb(10), Zero],
    [In(11), Fb(11), Fb(14), Zero],
    [In(12), Fb(5), Fb(9), Zero],
    [In(13), Fb(13), Fb(13), Zero],
    [In(14), Fb(7), Fb(11), Zero],
    [In(15), Fb(15), Fb(15), Zero],
];

/// Layer B, indexed by `s1`: fresh, or the stride-1 regroup of the last stage.
pub const LAYER_B: [[Source; 2]; SLOTS] = [
    [In(0), Fb(0)],
    [In(1), Fb(2)],
    [In(2), Fb(1)],
    [In(3), Fb(3)],
    [In(4), Fb(4)],
    [In(5), Fb(6)],
    [In(6), Fb(5)],
    [In(7), Fb(7)],
    [In(8), Fb(8)],
    [In(9), Fb(10)],
    [In(10), Fb(9)],
    [In(11), Fb(11)],
    [In(12), Fb(12)],
    [In(13), Fb(14)],
    [In(14), Fb(13)],
    [In(15), Fb(15)],
];

/// Layer C, indexed by `s3`: fresh, then the stride-4, stride-2 and stride-1
/// regroups.
pub const LAYER_C: [[Source; 4]; SLOTS] = [
    [In(0), Fb(0), Fb(0), Fb(0)],
    [In(1), Fb(8), Fb(4), Fb(2)],
    [In(2), Fb(2), Fb(2), Fb(1)],
    [In(3), Fb(10), Fb(6), Fb(3)],
    [In(4), Fb(4), Fb(1), Fb(4)],
    [In(5), Fb(12), Fb(5), Fb(6)],
    [In(6), Fb(6), Fb(3), Fb(5)],
    [In(7), Fb(14), Fb(7), Fb(7)],
    [In(8), Fb(1), Fb(8), Fb(8)],
    [In(9), Fb(9), Fb(12), Fb(10)],
    [In(10), Fb(3), Fb(10), Fb(9)],
    [In(11), Fb(11), Fb(14), Fb(11)],
    [In(12), Fb(5), Fb(9), Fb(12)],
    [In(13), Fb(13), Fb(13), Fb(14)],
    [In(14), Fb(7), Fb(11), Fb(13)],
    [In(15), Fb(15), Fb(15), Fb(15)],
];

/// The source a destination slot reads under `mode`.
#[inline]
pub fn select_source(slot: usize, mode: ModeVector) -> Source {
    match mode.select() {
        Select::Bypass => BYPASS[slot],
        Select::LayerA => LAYER_A[slot][usize::from(mode.s2())],
        Select::LayerB => LAYER_B[slot][usize::from(mode.s1())],
        Select::LayerC => LAYER_C[slot][usize::from(mode.s3())],
    }
}

#[inline]
fn resolve(
    source: Source,
    fresh: &[PackedComplex; SLOTS],
    feedback: &[PackedComplex; SLOTS],
) -> PackedComplex {
    match source {
        Source::Fresh(i) => fresh[usize::from(i)],
        Source::Feedback(i) => feedback[usize::from(i)],
        Source::Zero => PackedComplex::ZERO,
    }
}

/// Fills the 16 butterfly input slots. Purely combinational.
pub fn route(
    fresh: &[PackedComplex; SLOTS],
    feedback: &[PackedComplex; SLOTS],
    mode: ModeVector,
) -> [PackedComplex; SLOTS] {
    core::array::from_fn(|slot| resolve(select_source(slot, mode), fresh, feedback))
}

#[cfg(test)]
#[path = "routing_tests.rs"]
mod tests;
