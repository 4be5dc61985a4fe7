//! Sources of randomness for subject-variant selection.

use rand::Rng;

/// Chooses an index in `0..len`. Callers never pass `len == 0`.
pub trait VariantPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl VariantPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping around at the end.
///
/// Each value is reduced modulo `len`, so the same sequence works for lists
/// of any size.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    sequence: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self {
            sequence,
            cursor: 0,
        }
    }
}

impl VariantPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.sequence.is_empty() {
            return 0;
        }
        let value = self.sequence[self.cursor % self.sequence.len()];
        self.cursor += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let mut picker = ThreadRngPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn sequence_wraps_and_reduces() {
        let mut picker = SequencePicker::new(vec![0, 4]);
        assert_eq!(picker.pick(3), 0);
        assert_eq!(picker.pick(3), 1);
        assert_eq!(picker.pick(3), 0);
    }

    #[test]
    fn empty_sequence_always_picks_first() {
        let mut picker = SequencePicker::new(Vec::new());
        assert_eq!(picker.pick(5), 0);
    }
}
