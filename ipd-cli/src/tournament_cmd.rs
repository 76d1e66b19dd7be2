//! Tournament command - round-robin over a strategy list
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), report_results()
//! - Level 3: render()
//! - Level 4: output module formatters

use anyhow::{Context, Result};
use clap::Args;

use ipd_tournament::{run_tournament, TournamentConfig, TournamentResult};

use crate::output::{self, OutputFormat};
use crate::params::{create_rng, MatchParams, StrategyList};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug)]
pub struct TournamentArgs {
    #[command(flatten)]
    pub match_params: MatchParams,

    #[command(flatten)]
    pub strategy_list: StrategyList,

    /// Times each pairing is played
    #[arg(long, default_value = "10")]
    pub repeats: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tournament command
///
/// 1. Build the strategy pool and configuration
/// 2. Play every pairing
/// 3. Print the leaderboard
pub fn run(args: TournamentArgs, seed: Option<u64>) -> Result<()> {
    let mut pool = args.strategy_list.build_pool()?;
    let config = build_config(&args);
    let mut rng = create_rng(seed);

    let result = run_tournament(&mut pool, &config, &mut rng)
        .context("Invalid tournament configuration")?;

    if let Some(winner) = result.winner() {
        tracing::info!(
            "Tournament complete: {} matches, winner {} ({:.3})",
            result.matches_played,
            winner.name,
            winner.mean_score
        );
    }

    report_results(&result, args.format)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_config(args: &TournamentArgs) -> TournamentConfig {
    TournamentConfig::round_robin(args.repeats).with_match_config(args.match_params.to_config())
}

fn report_results(result: &TournamentResult, format: OutputFormat) -> Result<()> {
    print!("{}", render(result, format)?);
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn render(result: &TournamentResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output::leaderboard_text(&result.results)),
        OutputFormat::Csv => Ok(output::leaderboard_csv(&result.results)),
        OutputFormat::Json => {
            let mut json = output::to_json(&output::rank(&result.results))?;
            json.push('\n');
            Ok(json)
        }
    }
}
