use std::ops::AddAssign;

use crate::game::globals::NUM_SQUARES;

/// The number of histogram slots: one per board square, plus one that
/// counts jail entries separately from the "just visiting" square.
pub const SLOTS: usize = NUM_SQUARES as usize + 1;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Per-square landing counts for a simulation run.
///
/// Slots 0 to 39 are the board squares in board order; slot 40 is the
/// jail slot. The sum of all counts always equals the number of turns
/// recorded into the histogram.
pub struct Histogram {
    counts: [u64; SLOTS],
}

impl Histogram {
    /// Create an all-zero histogram.
    pub fn new() -> Histogram {
        Histogram { counts: [0; SLOTS] }
    }

    /// Count one landing on the given slot.
    pub fn record(&mut self, slot: usize) {
        self.counts[slot] += 1;
    }

    /// All the counts, in slot order.
    pub fn counts(&self) -> &[u64; SLOTS] {
        &self.counts
    }

    /// The total number of landings recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Default for Histogram {
    fn default() -> Histogram {
        Histogram::new()
    }
}

impl AddAssign<&Histogram> for Histogram {
    /// Merge another histogram into this one, elementwise.
    fn add_assign(&mut self, other: &Histogram) {
        for (count, other_count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += other_count;
        }
    }
}
