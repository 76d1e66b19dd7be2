//! IPD Tournament - round-robin scoring of strategies
//!
//! This crate provides tournament infrastructure:
//! - Round-robin pairings including self-play
//! - Repeated noisy matches per pairing
//! - Per-strategy score statistics
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_tournament (orchestration)
//! - Level 2: play_all_repetitions, compute_results (phases)
//! - Level 3: pairing generation, score recording (steps)
//! - Level 4: configuration

mod config;
mod tournament;

pub use config::TournamentConfig;
pub use tournament::{run_tournament, TournamentResult};
