//! Duel command - one recorded match between two strategies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: create_players(), play_duel(), report_results()
//! - Level 3: text_results(), csv_results()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ipd_core::{create_strategy, play_match_recorded, Action, MatchScore, RoundRecord, Strategy};

use crate::output::{self, OutputFormat};
use crate::params::{create_rng, MatchParams};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug)]
pub struct DuelArgs {
    /// First strategy identifier
    pub first: String,

    /// Second strategy identifier
    pub second: String,

    #[command(flatten)]
    pub match_params: MatchParams,

    /// Output format (csv prints one row per round)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// A finished duel with its round-by-round log
#[derive(Clone, Debug, Serialize)]
struct DuelRecord {
    first: String,
    second: String,
    score: MatchScore,
    noise_events: usize,
    rounds: Vec<RoundRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run duel command
///
/// 1. Create both players
/// 2. Play the match, keeping the log
/// 3. Report results
pub fn run(args: DuelArgs, seed: Option<u64>) -> Result<()> {
    let (mut first, mut second) = create_players(&args)?;

    tracing::info!(
        "Starting duel: {} vs {} ({} rounds, epsilon={})",
        first.name(),
        second.name(),
        args.match_params.rounds,
        args.match_params.epsilon
    );

    let record = play_duel(first.as_mut(), second.as_mut(), &args, seed)?;

    report_results(&record, args.format)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn create_players(args: &DuelArgs) -> Result<(Box<dyn Strategy>, Box<dyn Strategy>)> {
    let first = create_strategy(&args.first)
        .with_context(|| format!("Failed to create first strategy: {}", args.first))?;
    let second = create_strategy(&args.second)
        .with_context(|| format!("Failed to create second strategy: {}", args.second))?;
    Ok((first, second))
}

fn play_duel(
    first: &mut dyn Strategy,
    second: &mut dyn Strategy,
    args: &DuelArgs,
    seed: Option<u64>,
) -> Result<DuelRecord> {
    let config = args.match_params.to_config();
    config.validate().context("Invalid match configuration")?;

    let mut rng = create_rng(seed);
    let (score, rounds) = play_match_recorded(first, second, &config, &mut rng);

    Ok(DuelRecord {
        first: first.name().to_string(),
        second: second.name().to_string(),
        score,
        noise_events: rounds.iter().filter(|r| r.had_noise()).count(),
        rounds,
    })
}

fn report_results(record: &DuelRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text_results(record)),
        OutputFormat::Csv => print!("{}", csv_results(record)),
        OutputFormat::Json => println!("{}", output::to_json(record)?),
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn text_results(record: &DuelRecord) -> String {
    let mut out = format!("{} vs {}\n", record.first, record.second);
    out.push_str(&format!(
        "{:>6}  {:<4}{:<4}{:>8}{:>8}\n",
        "Round", "A", "B", "+A", "+B"
    ));
    for round in &record.rounds {
        out.push_str(&format!(
            "{:>6}  {:<4}{:<4}{:>8.1}{:>8.1}\n",
            round.round + 1,
            action_cell(round.played_a, round.intended_a),
            action_cell(round.played_b, round.intended_b),
            round.payoff_a,
            round.payoff_b
        ));
    }
    out.push_str(&format!(
        "Final: {} {:.1} - {:.1} {} ({} noise events)\n",
        record.first, record.score.score_a, record.score.score_b, record.second, record.noise_events
    ));
    out
}

fn csv_results(record: &DuelRecord) -> String {
    let mut out = String::from("round,intended_a,played_a,intended_b,played_b,payoff_a,payoff_b\n");
    for r in &record.rounds {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            r.round + 1,
            r.intended_a,
            r.played_a,
            r.intended_b,
            r.played_b,
            r.payoff_a,
            r.payoff_b
        ));
    }
    out
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Played action, with a `*` when noise flipped the intended one
fn action_cell(played: Action, intended: Action) -> String {
    if played == intended {
        played.to_string()
    } else {
        format!("{}*", played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipd_core::PayoffMatrix;

    fn duel_args(first: &str, second: &str, epsilon: f64) -> DuelArgs {
        DuelArgs {
            first: first.to_string(),
            second: second.to_string(),
            match_params: MatchParams {
                rounds: 5,
                epsilon,
                payoffs: PayoffMatrix::default(),
            },
            format: OutputFormat::Text,
        }
    }

    fn duel(args: &DuelArgs) -> DuelRecord {
        let (mut first, mut second) = create_players(args).unwrap();
        play_duel(first.as_mut(), second.as_mut(), args, Some(42)).unwrap()
    }

    #[test]
    fn test_create_players_rejects_unknown() {
        let err = create_players(&duel_args("TFT", "NOPE", 0.0)).err().expect("expected error");
        assert!(format!("{:#}", err).contains("NOPE"));
    }

    #[test]
    fn test_alld_vs_allc_duel() {
        let record = duel(&duel_args("ALLD", "allc", 0.0));
        assert_eq!(record.first, "ALLD");
        assert_eq!(record.second, "ALLC");
        assert_eq!(record.score.score_a, 25.0);
        assert_eq!(record.score.score_b, 0.0);
        assert_eq!(record.noise_events, 0);

        let text = text_results(&record);
        assert!(text.starts_with("ALLD vs ALLC\n"));
        assert!(text.contains("Final: ALLD 25.0 - 0.0 ALLC"));
        assert!(!text.contains('*'));

        assert_eq!(csv_results(&record).lines().count(), 6);
    }

    #[test]
    fn test_full_noise_is_marked() {
        let record = duel(&duel_args("ALLC", "ALLC", 1.0));
        assert_eq!(record.noise_events, 5);
        // Every intended C was flipped to D
        assert_eq!(record.score.score_a, 5.0);
        assert!(text_results(&record).contains("D*"));
    }

    #[test]
    fn test_invalid_epsilon() {
        let args = duel_args("TFT", "TFT", 1.5);
        let (mut first, mut second) = create_players(&args).unwrap();
        assert!(play_duel(first.as_mut(), second.as_mut(), &args, None).is_err());
    }
}
