use crate::common::{FabricError, FftProcess};
use super::types::PackedComplex;
use super::core::{precompute_bitrev, precompute_rotations, radix_2_dif_butterfly};

/// Exact radix-2 DIF transform with one twiddle per butterfly.
///
/// Uses the same packed butterfly arithmetic as the folded fabric, so it is
/// the model the fabric's routing and schedules are validated against.
/// Rotation words are Q7, quantized once from `e^{-j 2 pi k / N}`.
pub struct ReferenceFft<'a> {
    rotations: &'a mut [PackedComplex],
    bitrev: &'a mut [usize],
    n: usize,
}

impl<'a> ReferenceFft<'a> {
    /// Initializes the tables.
    pub fn new(
        rotations: &'a mut [PackedComplex],
        bitrev: &'a mut [usize],
        n: usize,
    ) -> Result<Self, FabricError> {
        if !n.is_power_of_two() || n < 2 {
            return Err(FabricError::NotPowerOfTwo);
        }
        if rotations.len() < n / 2 || bitrev.len() < n {
            return Err(FabricError::BufferTooSmall);
        }

        let mut fft = Self { rotations, bitrev, n };
        fft.precompute();
        Ok(fft)
    }

    /// Precomputes Twiddle Factors and Bit Reverse Table
    fn precompute(&mut self) {
        precompute_bitrev(self.bitrev, self.n);
        precompute_rotations(self.rotations, self.n);
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Runs the butterfly stages in place, leaving bins in bit-reversed order.
    pub fn stages(&self, buffer: &mut [PackedComplex]) -> Result<(), FabricError> {
        if buffer.len() != self.n {
            return Err(FabricError::SizeMismatch);
        }
        radix_2_dif_stages(buffer, self.rotations);
        Ok(())
    }

    /// Executes the transform in-place; bins come out in natural order.
    pub fn transform(&self, buffer: &mut [PackedComplex]) -> Result<(), FabricError> {
        self.stages(buffer)?;

        for i in 1..(self.n - 1) {
            let j = self.bitrev[i];
            if i < j {
                buffer.swap(i, j);
            }
        }
        Ok(())
    }
}

/// Decimation-in-frequency butterfly stages over `buffer`.
/// `rotations` holds `W_N^k` for `k < N/2`.
fn radix_2_dif_stages(buffer: &mut [PackedComplex], rotations: &[PackedComplex]) {
    let n = buffer.len();
    let mut span = n >> 1;
    let mut tw_step = 1;

    while span > 0 {
        for group in (0..n).step_by(span << 1) {
            for i in 0..span {
                let w = rotations[i * tw_step];
                let index = group + i;
                let (y0, y1) = radix_2_dif_butterfly(buffer[index], buffer[index + span], w);
                buffer[index] = y0;
                buffer[index + span] = y1;
            }
        }
        span >>= 1;
        tw_step <<= 1;
    }
}

impl<'a> FftProcess<PackedComplex> for ReferenceFft<'a> {
    fn process(&mut self, buffer: &mut [PackedComplex]) -> Result<(), FabricError> {
        self.transform(buffer)
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
