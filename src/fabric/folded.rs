use super::engine::Engine;
use super::sequencer::{Schedule, StageSequencer};
use super::SLOTS;
use crate::common::{FabricError, FftProcess};
use crate::fixed::core::precompute_bitrev;
use crate::fixed::{PackedComplex, TwiddleSet};
use tracing::debug;

/// A 16-point transform driven through the folded fabric.
///
/// Each call resets the engine, clocks the schedule with the samples held on
/// the primary input bus, and reads the bins back in natural order.
pub struct FoldedFft {
    engine: Engine,
    schedule: Schedule,
    bitrev: [usize; SLOTS],
}

impl FoldedFft {
    pub fn new(twiddles: TwiddleSet) -> Self {
        Self::with_schedule(twiddles, Schedule::default())
    }

    pub fn with_schedule(twiddles: TwiddleSet, schedule: Schedule) -> Self {
        let mut bitrev = [0; SLOTS];
        precompute_bitrev(&mut bitrev, SLOTS);
        Self {
            engine: Engine::new(twiddles),
            schedule,
            bitrev,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Output bus after the schedule: slot `p` holds bin `bitrev(p)`.
    pub fn transform_raw(&mut self, samples: &[PackedComplex; SLOTS]) -> [PackedComplex; SLOTS] {
        self.engine.reset();

        let mut sequencer = StageSequencer::new(self.schedule);
        for mode in sequencer.by_ref() {
            self.engine.clock(samples, mode);
        }
        debug!(
            schedule = ?self.schedule,
            cycles = self.engine.cycles(),
            complete = sequencer.is_complete(),
            "folded transform done"
        );
        *self.engine.outputs()
    }

    /// Transform with bins in natural frequency order.
    pub fn transform(&mut self, samples: &[PackedComplex; SLOTS]) -> [PackedComplex; SLOTS] {
        let raw = self.transform_raw(samples);
        core::array::from_fn(|k| raw[self.bitrev[k]])
    }
}

impl FftProcess<PackedComplex> for FoldedFft {
    fn process(&mut self, buffer: &mut [PackedComplex]) -> Result<(), FabricError> {
        let samples: &[PackedComplex; SLOTS] =
            (&*buffer).try_into().map_err(|_| FabricError::SizeMismatch)?;
        let bins = self.transform(samples);
        buffer.copy_from_slice(&bins);
        Ok(())
    }
}

#[cfg(test)]
#[path = "folded_tests.rs"]
mod tests;
