//! Statistics aggregation - mean, spread and confidence interval of scores

use serde::{Deserialize, Serialize};

/// z-value for a two-sided 95% normal confidence interval
pub const Z_95: f64 = 1.96;

/// Summary statistics for one strategy
///
/// Tournament results carry `population == 0`; evolution snapshots carry
/// the strategy's head count for that generation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub name: String,
    pub mean_score: f64,
    /// Population (not sample-corrected) standard deviation
    pub stdev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub population: usize,
}

impl StrategyResult {
    /// Reduce raw scores to a result.
    ///
    /// Empty input yields inert zeros rather than an error. The interval is
    /// the normal approximation `mean ± 1.96·σ/√n`, which is loose for small n.
    pub fn compute(name: &str, scores: &[f64]) -> Self {
        let mut result = Self {
            name: name.to_string(),
            ..Default::default()
        };
        if scores.is_empty() {
            return result;
        }

        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let mean_sq = scores.iter().map(|x| x * x).sum::<f64>() / n;
        // Cancellation can push the difference slightly below zero
        let stdev = (mean_sq - mean * mean).max(0.0).sqrt();
        let se = stdev / n.sqrt();

        result.mean_score = mean;
        result.stdev = stdev;
        result.ci_lower = mean - Z_95 * se;
        result.ci_upper = mean + Z_95 * se;
        result
    }

    /// Attach a population count (evolution snapshots)
    pub fn with_population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    /// Width of the confidence interval
    pub fn ci_width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }
}
