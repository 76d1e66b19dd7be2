//! Strategy pool - the strategy instances owned by one run

use rustc_hash::FxHashSet;

use crate::error::ConfigError;
use crate::strategy::{create_strategy, Strategy};

/// One distinct strategy kind in the pool.
///
/// `mirror` is an independent second instance of the same kind, used only
/// as the opponent in self-play so both sides keep separate decision state.
struct PoolEntry {
    primary: Box<dyn Strategy>,
    mirror: Box<dyn Strategy>,
}

/// Distinct strategy kinds participating in a run, in configuration order
pub struct StrategyPool {
    entries: Vec<PoolEntry>,
}

impl StrategyPool {
    /// Resolve every identifier through the registry.
    ///
    /// Fails on an empty list, an unknown identifier, or the same kind listed twice.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, ConfigError> {
        if ids.is_empty() {
            return Err(ConfigError::EmptyStrategyList);
        }

        let mut seen = FxHashSet::default();
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            let primary = create_strategy(id.as_ref())?;
            let mirror = create_strategy(id.as_ref())?;
            if !seen.insert(primary.name().to_string()) {
                return Err(ConfigError::DuplicateStrategy(primary.name().to_string()));
            }
            entries.push(PoolEntry { primary, mirror });
        }

        Ok(Self { entries })
    }

    /// Number of distinct strategy kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the strategy at `index`
    pub fn name(&self, index: usize) -> &str {
        self.entries[index].primary.name()
    }

    /// Names in pool order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.primary.name().to_string()).collect()
    }

    /// Index of the strategy with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.primary.name() == name)
    }

    /// Both participants of the pairing (i, j), i <= j.
    ///
    /// For i == j the second handle is the mirror instance of the same kind.
    ///
    /// # Panics
    /// Panics if `i > j` or `j` is out of range.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut dyn Strategy, &mut dyn Strategy) {
        assert!(i <= j, "pairings are unordered with i <= j, got ({}, {})", i, j);

        if i == j {
            let entry = &mut self.entries[i];
            (entry.primary.as_mut(), entry.mirror.as_mut())
        } else {
            let (left, right) = self.entries.split_at_mut(j);
            (left[i].primary.as_mut(), right[0].primary.as_mut())
        }
    }
}

impl std::fmt::Debug for StrategyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyPool").field("strategies", &self.names()).finish()
    }
}
