// src/fixed/core.rs

use super::types::{PackedComplex, TwiddleSet};
use crate::fabric::Select;
use core::f64::consts::PI;
use num_complex::Complex;

/// Fractional bits of the coefficient the multiplier scales by.
pub const TWIDDLE_FRAC: u32 = 15;

/// Packed value of a twiddle channel at full positive scale (+1.0).
pub const TWIDDLE_UNITY: i32 = 127;

/// Widens one Q7 twiddle channel (127 = +1.0) to a Q15 coefficient.
///
/// Full positive scale widens to exactly `1 << 15`, so the identity twiddle
/// passes operands through the multiplier unchanged.
#[inline]
pub fn widen_twiddle(channel: i16) -> i32 {
    let full = 1i32 << TWIDDLE_FRAC;
    ((i32::from(channel) << TWIDDLE_FRAC) / TWIDDLE_UNITY).clamp(-full, full)
}

/// Decodes a twiddle word into the Q15 coefficient the multiplier consumes.
#[inline]
pub fn twiddle_coefficient(word: PackedComplex) -> Complex<i32> {
    let w = word.unpack();
    Complex::new(widen_twiddle(w.re), widen_twiddle(w.im))
}

/// Fixed-point complex product `a * w` scaled down by `2^15`.
///
/// The shift is arithmetic and truncating; no saturation happens here.
/// `w` must be a Q15 coefficient (each channel within `±2^15`).
#[inline]
pub fn complex_multiply(a: Complex<i16>, w: Complex<i32>) -> Complex<i32> {
    let (ar, ai) = (i64::from(a.re), i64::from(a.im));
    let (wr, wi) = (i64::from(w.re), i64::from(w.im));

    // (ac - bd)
    let re = (ar * wr - ai * wi) >> TWIDDLE_FRAC;
    // (ad + bc)
    let im = (ar * wi + ai * wr) >> TWIDDLE_FRAC;

    Complex::new(re as i32, im as i32)
}

/// Radix-2 decimation-in-frequency butterfly with an explicit twiddle word.
///
/// Returns `(x0 + x1, (x0 - x1) * w)`, each channel saturated on its own.
#[inline]
pub fn radix_2_dif_butterfly(
    x0: PackedComplex,
    x1: PackedComplex,
    twiddle: PackedComplex,
) -> (PackedComplex, PackedComplex) {
    let a = x0.unpack();
    let b = x1.unpack();

    // Both fit the working width: |a|, |b| <= 128.
    let sum = a + b;
    let diff = a - b;

    let product = complex_multiply(diff, twiddle_coefficient(twiddle));

    let y0 = PackedComplex::pack(i32::from(sum.re), i32::from(sum.im));
    let y1 = PackedComplex::saturating_from(product);
    (y0, y1)
}

/// One butterfly unit of the fabric: the twiddle comes from the set entry
/// named by the cycle's select field.
#[inline]
pub fn butterfly(
    x0: PackedComplex,
    x1: PackedComplex,
    select: Select,
    twiddles: &TwiddleSet,
) -> (PackedComplex, PackedComplex) {
    radix_2_dif_butterfly(x0, x1, twiddles.get(select))
}

/// Quantizes the rotation `e^{-j 2 pi k / n}` to a packed Q7 word.
pub fn rotation_word(k: usize, n: usize) -> PackedComplex {
    let angle = -2.0 * PI * (k as f64) / (n as f64);
    let scale = TWIDDLE_UNITY as f64;
    PackedComplex::pack(
        libm::round(libm::cos(angle) * scale) as i32,
        libm::round(libm::sin(angle) * scale) as i32,
    )
}

/// Computes the rotation factors (Twiddle Factors) for a DIF FFT of size N.
pub(crate) fn precompute_rotations(rotations: &mut [PackedComplex], n: usize) {
    // Only N/2 factors are needed for Radix-2
    for (k, slot) in rotations.iter_mut().take(n / 2).enumerate() {
        *slot = rotation_word(k, n);
    }
}

/// Fills the bit-reversal table.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for entry in bitrev.iter_mut().take(n).skip(1) {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        *entry = j;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
