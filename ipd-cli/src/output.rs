//! Result rendering for the terminal, CSV and JSON
//!
//! Engines return results in strategy order; everything here that ranks
//! results does so on a copy.

use std::cmp::Ordering;
use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use ipd_core::StrategyResult;

/// Output format for run results
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// Comma-separated rows with a header
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Sort by mean score, best first; ties keep strategy order
pub fn rank(results: &[StrategyResult]) -> Vec<StrategyResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| {
        b.mean_score
            .partial_cmp(&a.mean_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

// ============================================================================
// TOURNAMENT
// ============================================================================

/// Leaderboard table sorted by mean score
pub fn leaderboard_text(results: &[StrategyResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20}{:<15}{:<15}95% CI",
        "Strategy", "Mean Score", "Std Dev"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));

    for res in rank(results) {
        let _ = writeln!(
            out,
            "{:<20}{:<15.3}{:<15.3}[{:.3}, {:.3}]",
            res.name, res.mean_score, res.stdev, res.ci_lower, res.ci_upper
        );
    }
    out
}

pub fn leaderboard_csv(results: &[StrategyResult]) -> String {
    let mut out = String::from("strategy,mean,stdev,ci_lower,ci_upper\n");
    for res in rank(results) {
        let _ = writeln!(
            out,
            "{},{:.6},{:.6},{:.6},{:.6}",
            res.name, res.mean_score, res.stdev, res.ci_lower, res.ci_upper
        );
    }
    out
}

// ============================================================================
// EVOLUTION
// ============================================================================

/// One line per generation listing the surviving strategies
pub fn evolution_text(generations: &[Vec<StrategyResult>]) -> String {
    let mut out = String::from("--- Evolutionary Dynamics ---\n");
    for (gen, snapshot) in generations.iter().enumerate() {
        let survivors: Vec<String> = snapshot
            .iter()
            .filter(|res| res.population > 0)
            .map(|res| format!("{}({})", res.name, res.population))
            .collect();
        let _ = writeln!(out, "Generation {}: {}", gen + 1, survivors.join(" "));
    }
    out
}

/// One row per snapshot entry
pub fn evolution_csv(generations: &[Vec<StrategyResult>]) -> String {
    let mut out = String::from("generation,strategy,population,mean\n");
    for (gen, snapshot) in generations.iter().enumerate() {
        for res in snapshot {
            let _ = writeln!(
                out,
                "{},{},{},{:.6}",
                gen + 1,
                res.name,
                res.population,
                res.mean_score
            );
        }
    }
    out
}

// ============================================================================
// SHARED
// ============================================================================

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize results")
}
