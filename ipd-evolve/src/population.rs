//! Population state - head counts per strategy kind
//!
//! Counts are indexed like the strategy pool. An extinct strategy keeps its
//! slot with a count of zero.

use serde::{Deserialize, Serialize};

/// Number of individuals holding each strategy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    counts: Vec<usize>,
}

impl Population {
    /// Split `total` individuals evenly over `kinds` strategies.
    ///
    /// The remainder of the integer division is dropped, so the initial
    /// population can be short of `total` by up to `kinds - 1`.
    pub fn even_split(total: usize, kinds: usize) -> Self {
        let share = if kinds == 0 { 0 } else { total / kinds };
        Self {
            counts: vec![share; kinds],
        }
    }

    pub fn from_counts(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn into_counts(self) -> Vec<usize> {
        self.counts
    }

    /// Count for strategy `index`
    pub fn get(&self, index: usize) -> usize {
        self.counts[index]
    }

    /// Number of strategy slots (populated or not)
    pub fn kinds(&self) -> usize {
        self.counts.len()
    }

    /// Total number of individuals
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_populated(&self, index: usize) -> bool {
        self.counts[index] > 0
    }

    /// Indices of strategies with at least one individual
    pub fn populated_indices(&self) -> Vec<usize> {
        (0..self.counts.len()).filter(|&i| self.is_populated(i)).collect()
    }

    /// Strategy slot of the individual at position `individual`, counting
    /// through the slots in order.
    pub fn bucket_of(&self, individual: usize) -> Option<usize> {
        let mut cumulative = 0;
        for (index, &count) in self.counts.iter().enumerate() {
            cumulative += count;
            if individual < cumulative {
                return Some(index);
            }
        }
        None
    }

    /// Move one individual between slots
    ///
    /// # Panics
    /// Panics if `from` is empty.
    pub fn transfer(&mut self, from: usize, to: usize) {
        assert!(self.counts[from] > 0, "cannot move an individual out of empty slot {}", from);
        self.counts[from] -= 1;
        self.counts[to] += 1;
    }

    pub(crate) fn counts_mut(&mut self) -> &mut [usize] {
        &mut self.counts
    }
}
