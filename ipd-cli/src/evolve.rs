//! Evolve command - replicator dynamics over a strategy population
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), run_with_progress(), report_results()
//! - Level 3: load_complexity_costs(), create_progress_bar(), render()
//! - Level 4: output module formatters

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand_chacha::ChaCha8Rng;

use ipd_core::StrategyPool;
use ipd_evolve::{run_evolution_with_callback, ComplexityCosts, EvolutionConfig, EvolutionHistory};

use crate::output::{self, OutputFormat};
use crate::params::{create_rng, MatchParams, StrategyList};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug)]
pub struct EvolveArgs {
    #[command(flatten)]
    pub match_params: MatchParams,

    #[command(flatten)]
    pub strategy_list: StrategyList,

    /// Total population size
    #[arg(long, default_value = "50")]
    pub population: usize,

    /// Maximum number of generations
    #[arg(long, default_value = "50")]
    pub generations: usize,

    /// Per-individual mutation probability each generation
    #[arg(long, default_value = "0.01")]
    pub mutation: f64,

    /// Deduct the standard strategic complexity costs from fitness
    #[arg(long)]
    pub scb: bool,

    /// Custom complexity cost table (JSON object of id -> cost); implies --scb
    #[arg(long, value_name = "FILE")]
    pub scb_table: Option<PathBuf>,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run evolve command
///
/// 1. Build the strategy pool and configuration
/// 2. Run every generation
/// 3. Print the population history
pub fn run(args: EvolveArgs, seed: Option<u64>) -> Result<()> {
    let mut pool = args.strategy_list.build_pool()?;
    let config = build_config(&args)?;
    let mut rng = create_rng(seed);

    let history = run_with_progress(&mut pool, &config, &mut rng, args.progress)?;

    tracing::info!(
        "Evolution complete: {} generations recorded{}, final population {:?}",
        history.len(),
        if history.halted_early { " (halted early)" } else { "" },
        history.final_population
    );
    if let Some(last) = history.final_generation() {
        let survivors: Vec<&str> = last.iter().map(|res| res.name.as_str()).collect();
        tracing::debug!("Survivors in last recorded generation: {:?}", survivors);
    }

    report_results(&history, args.format)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_config(args: &EvolveArgs) -> Result<EvolutionConfig> {
    let mut config = EvolutionConfig::new(args.population, args.generations)
        .with_match_config(args.match_params.to_config())
        .with_mutation_rate(args.mutation);

    if let Some(costs) = load_complexity_costs(args)? {
        config = config.with_complexity_costs(costs);
    }
    Ok(config)
}

fn run_with_progress(
    pool: &mut StrategyPool,
    config: &EvolutionConfig,
    rng: &mut ChaCha8Rng,
    show_progress: bool,
) -> Result<EvolutionHistory> {
    let bar = if show_progress {
        create_progress_bar(config.generations)?
    } else {
        ProgressBar::hidden()
    };

    let history = run_evolution_with_callback(pool, config, rng, |generation, snapshot| {
        let leader = snapshot.iter().max_by_key(|res| res.population);
        if let Some(leader) = leader {
            bar.set_message(format!("{} leads ({})", leader.name, leader.population));
        }
        tracing::debug!("Generation {} snapshot taken", generation + 1);
        bar.inc(1);
    })
    .context("Invalid evolution configuration")?;

    bar.finish_and_clear();
    Ok(history)
}

fn report_results(history: &EvolutionHistory, format: OutputFormat) -> Result<()> {
    print!("{}", render(history, format)?);
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn load_complexity_costs(args: &EvolveArgs) -> Result<Option<ComplexityCosts>> {
    match (&args.scb_table, args.scb) {
        (Some(path), _) => {
            let costs = ComplexityCosts::load(path).with_context(|| {
                format!("Failed to load complexity cost table: {}", path.display())
            })?;
            tracing::info!("Loaded {} complexity costs from {}", costs.len(), path.display());
            Ok(Some(costs))
        }
        (None, true) => Ok(Some(ComplexityCosts::standard())),
        (None, false) => Ok(None),
    }
}

fn create_progress_bar(generations: usize) -> Result<ProgressBar> {
    let bar = ProgressBar::new(generations as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} generations {msg} ({eta})")
            .context("Invalid progress bar template")?
            .progress_chars("=> "),
    );
    Ok(bar)
}

fn render(history: &EvolutionHistory, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output::evolution_text(history.generations())),
        OutputFormat::Csv => Ok(output::evolution_csv(history.generations())),
        OutputFormat::Json => {
            let mut json = output::to_json(history)?;
            json.push('\n');
            Ok(json)
        }
    }
}
