//! IPD Lab CLI - Command-line interface
//!
//! Commands:
//! - tournament: Round-robin tournament with a ranked leaderboard
//! - evolve: Replicator dynamics over a strategy population
//! - duel: One recorded match between two strategies
//! - strategies: List the strategy catalog

mod evolve;
mod match_cmd;
mod output;
mod params;
mod tournament_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ipd_core::{available_strategies, describe_strategy, DEFAULT_STRATEGIES};

#[derive(Parser)]
#[command(name = "ipd")]
#[command(about = "Iterated Prisoner's Dilemma tournaments and evolutionary dynamics")]
#[command(version)]
struct Cli {
    /// Seed for the shared random generator (drawn and logged if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round-robin tournament
    Tournament(tournament_cmd::TournamentArgs),
    /// Run the evolutionary simulation
    Evolve(evolve::EvolveArgs),
    /// Play one match and print every round
    Duel(match_cmd::DuelArgs),
    /// List available strategies
    Strategies,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Tournament(args) => tournament_cmd::run(args, cli.seed),
        Commands::Evolve(args) => evolve::run(args, cli.seed),
        Commands::Duel(args) => match_cmd::run(args, cli.seed),
        Commands::Strategies => {
            print_strategies();
            Ok(())
        }
    }
}

/// Log to stderr so stdout carries only results
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_strategies() {
    for id in available_strategies() {
        let marker = if DEFAULT_STRATEGIES.contains(id) { "*" } else { " " };
        println!("{} {:<10} {}", marker, id, describe_strategy(id).unwrap_or(""));
    }
    println!();
    println!("* included when --strategies is omitted");
}
