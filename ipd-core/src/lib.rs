//! IPD Core - Iterated Prisoner's Dilemma engine primitives
//!
//! This crate provides the building blocks shared by tournament and
//! evolution runs:
//! - Actions and the payoff matrix
//! - The strategy contract, catalog and registry
//! - The strategy pool owned by a run
//! - Noisy match simulation
//! - Score statistics (mean, standard deviation, 95% CI)

pub mod action;
pub mod config;
pub mod error;
pub mod match_play;
pub mod payoff;
pub mod pool;
pub mod stats;
pub mod strategies;
pub mod strategy;

// Re-exports for convenient access
pub use action::{Action, History};
pub use config::MatchConfig;
pub use error::ConfigError;
pub use match_play::{play_match, play_match_recorded, MatchScore, RoundRecord};
pub use payoff::PayoffMatrix;
pub use pool::StrategyPool;
pub use stats::StrategyResult;
pub use strategy::{
    available_strategies, create_strategy, describe_strategy, Strategy, DEFAULT_STRATEGIES,
};
