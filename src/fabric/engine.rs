use super::feedback::FeedbackStore;
use super::mode::ModeVector;
use super::routing::route;
use super::{BUTTERFLIES, SLOTS};
use crate::fixed::core::butterfly;
use crate::fixed::{PackedComplex, TwiddleSet};
use tracing::{debug, trace};

/// Folded transform engine: routing fabric, eight butterfly units and the
/// feedback registers, advanced one clock edge at a time.
///
/// The engine does not know how many stages make up a transform; the
/// mode-vector sequence driven into [`Engine::clock`] decides that.
#[derive(Clone, Debug)]
pub struct Engine {
    twiddles: TwiddleSet,
    feedback: FeedbackStore,
    outputs: [PackedComplex; SLOTS],
    cycles: u64,
}

impl Engine {
    /// Creates an engine in its reset state.
    pub fn new(twiddles: TwiddleSet) -> Self {
        Self {
            twiddles,
            feedback: FeedbackStore::new(),
            outputs: [PackedComplex::ZERO; SLOTS],
            cycles: 0,
        }
    }

    pub fn twiddles(&self) -> &TwiddleSet {
        &self.twiddles
    }

    /// Registered output bus: the butterfly results of the last active edge.
    pub fn outputs(&self) -> &[PackedComplex; SLOTS] {
        &self.outputs
    }

    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    /// Active edges since construction or the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Zeroes the output bus and every feedback slot.
    pub fn reset(&mut self) {
        self.feedback.reset();
        self.outputs = [PackedComplex::ZERO; SLOTS];
        self.cycles = 0;
        debug!("fabric reset");
    }

    /// What the butterflies produce this cycle, without latching anything.
    pub fn evaluate(&self, fresh: &[PackedComplex; SLOTS], mode: ModeVector) -> [PackedComplex; SLOTS] {
        let inputs = route(fresh, self.feedback.slots(), mode);
        let select = mode.select();

        let mut outputs = [PackedComplex::ZERO; SLOTS];
        for b in 0..BUTTERFLIES {
            let (y0, y1) = butterfly(inputs[2 * b], inputs[2 * b + 1], select, &self.twiddles);
            outputs[2 * b] = y0;
            outputs[2 * b + 1] = y1;
        }
        outputs
    }

    /// One active clock edge: evaluate against the current feedback, then
    /// latch the results into the output bus and the feedback registers.
    pub fn clock(&mut self, fresh: &[PackedComplex; SLOTS], mode: ModeVector) -> &[PackedComplex; SLOTS] {
        let outputs = self.evaluate(fresh, mode);
        trace!(
            cycle = self.cycles,
            select = ?mode.select(),
            twiddle = mode.twiddle_index(),
            control = mode.to_bits(),
            "fabric clock edge"
        );

        self.feedback.advance(&outputs);
        self.outputs = outputs;
        self.cycles += 1;
        &self.outputs
    }

    /// One clock edge with a reset line. Reset takes priority over the update.
    pub fn edge(
        &mut self,
        reset: bool,
        fresh: &[PackedComplex; SLOTS],
        mode: ModeVector,
    ) -> &[PackedComplex; SLOTS] {
        if reset {
            self.reset();
            return &self.outputs;
        }
        self.clock(fresh, mode)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(TwiddleSet::default())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
