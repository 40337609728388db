use super::SLOTS;
use crate::fixed::PackedComplex;

/// One-cycle register file holding the previous cycle's butterfly outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackStore {
    slots: [PackedComplex; SLOTS],
}

impl FeedbackStore {
    pub const fn new() -> Self {
        Self { slots: [PackedComplex::ZERO; SLOTS] }
    }

    pub fn reset(&mut self) {
        self.slots = [PackedComplex::ZERO; SLOTS];
    }

    /// Latches this cycle's outputs. They are read back on the next cycle.
    pub fn advance(&mut self, outputs: &[PackedComplex; SLOTS]) {
        self.slots = *outputs;
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<PackedComplex> {
        self.slots.get(slot).copied()
    }

    #[inline]
    pub fn slots(&self) -> &[PackedComplex; SLOTS] {
        &self.slots
    }

    pub fn is_zero(&self) -> bool {
        self.slots.iter().all(|w| *w == PackedComplex::ZERO)
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_zero() {
        let store = FeedbackStore::new();
        assert!(store.is_zero());
        assert_eq!(store.get(15), Some(PackedComplex::ZERO));
        assert_eq!(store.get(16), None);
    }

    #[test]
    fn test_advance_overwrites_every_slot() {
        let mut store = FeedbackStore::new();
        let first: [PackedComplex; SLOTS] =
            core::array::from_fn(|i| PackedComplex::from_parts(i as i8, 1));
        store.advance(&first);
        assert_eq!(store.slots(), &first);

        let second = [PackedComplex::from_parts(-5, 5); SLOTS];
        store.advance(&second);
        assert_eq!(store.slots(), &second);
    }

    #[test]
    fn test_reset_clears_all_slots() {
        let mut store = FeedbackStore::new();
        store.advance(&[PackedComplex::from_parts(1, 2); SLOTS]);
        assert!(!store.is_zero());

        store.reset();
        assert!(store.is_zero());
    }
}
