use super::mode::ModeVector;

/// Cycles one 16-point transform takes on the fabric.
pub const DIF16_STAGES: usize = 4;

/// A stage-by-stage mode-vector plan for a 16-point radix-2 DIF transform.
///
/// Every entry after the first reads the feedback written one cycle
/// earlier, so the plan must be driven on consecutive active edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Schedule {
    /// Stage 1 from fresh inputs, stages 2 and 3 through layer A, stage 4
    /// through layer B. Twiddle indices 0, 1, 1, 2.
    #[default]
    Dif16,
    /// Stage 1 from fresh inputs, stages 2 to 4 through layer C.
    /// Twiddle indices 0, 3, 3, 3.
    Dif16LayerC,
}

static DIF16: [ModeVector; DIF16_STAGES] = [
    ModeVector::bypass(),
    ModeVector::layer_a(1),
    ModeVector::layer_a(2),
    ModeVector::layer_b(1),
];

static DIF16_LAYER_C: [ModeVector; DIF16_STAGES] = [
    ModeVector::bypass(),
    ModeVector::layer_c(1),
    ModeVector::layer_c(2),
    ModeVector::layer_c(3),
];

impl Schedule {
    pub fn stages(self) -> &'static [ModeVector; DIF16_STAGES] {
        match self {
            Schedule::Dif16 => &DIF16,
            Schedule::Dif16LayerC => &DIF16_LAYER_C,
        }
    }

    /// Twiddle entry applied on each stage.
    pub fn twiddle_indices(self) -> [usize; DIF16_STAGES] {
        core::array::from_fn(|stage| self.stages()[stage].twiddle_index())
    }
}

/// Emits one mode vector per active cycle and reports when the plan is done.
#[derive(Clone, Debug)]
pub struct StageSequencer {
    schedule: Schedule,
    next: usize,
}

impl StageSequencer {
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule, next: 0 }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Stage the next emitted vector belongs to.
    pub fn stage(&self) -> usize {
        self.next
    }

    pub fn is_complete(&self) -> bool {
        self.next >= DIF16_STAGES
    }

    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl Iterator for StageSequencer {
    type Item = ModeVector;

    fn next(&mut self) -> Option<ModeVector> {
        let mode = self.schedule.stages().get(self.next).copied()?;
        self.next += 1;
        Some(mode)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = DIF16_STAGES.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for StageSequencer {}
