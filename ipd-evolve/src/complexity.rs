//! Strategic complexity costs
//!
//! A flat per-strategy fitness deduction modeling the behavioral overhead of
//! running a strategy. Unrelated to raw payoff; only applied when enabled.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-strategy cost table. Strategies missing from the table cost nothing.
///
/// Serialized as a plain `{ "NAME": cost }` object; names are uppercased on
/// the way in, whichever path builds the table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FxHashMap<String, f64>", into = "FxHashMap<String, f64>")]
pub struct ComplexityCosts {
    costs: FxHashMap<String, f64>,
}

impl ComplexityCosts {
    /// The standard table: memoryless rules cost 1, one-step reactive rules 2,
    /// rules reading their own last move 3, the multi-phase prober 4.
    pub fn standard() -> Self {
        let table: [(&str, f64); 10] = [
            ("ALLC", 1.0),
            ("ALLD", 1.0),
            ("RND", 1.0),
            ("TFT", 2.0),
            ("GRIM", 2.0),
            ("SUS_TFT", 2.0),
            ("PAVLOV", 3.0),
            ("CONTRITE", 3.0),
            ("ADAPT_PUNISH", 3.0),
            ("PROBER", 4.0),
        ];
        table.into_iter().collect()
    }

    /// Load a custom table from a JSON object `{ "NAME": cost, ... }`.
    /// Names are matched case-insensitively.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let raw: FxHashMap<String, f64> = serde_json::from_str(content)?;
        if let Some((name, cost)) = raw.iter().find(|(_, c)| !c.is_finite()) {
            anyhow::bail!("complexity cost for {} is not finite: {}", name, cost);
        }
        Ok(raw.into())
    }

    /// Cost for a strategy name
    pub fn cost_for(&self, name: &str) -> f64 {
        self.costs.get(name).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for ComplexityCosts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            costs: iter
                .into_iter()
                .map(|(name, cost)| (name.as_ref().to_ascii_uppercase(), cost))
                .collect(),
        }
    }
}

impl From<FxHashMap<String, f64>> for ComplexityCosts {
    fn from(raw: FxHashMap<String, f64>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<ComplexityCosts> for FxHashMap<String, f64> {
    fn from(costs: ComplexityCosts) -> Self {
        costs.costs
    }
}
