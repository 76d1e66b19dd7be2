//! IPD Evolution - replicator dynamics over a population of strategies
//!
//! This crate provides the generational simulation:
//! - Population bookkeeping (even initial split, head counts)
//! - Fitness-proportional reproduction with randomized rounding correction
//! - Per-individual mutation
//! - Optional strategic complexity costs

mod complexity;
mod config;
mod evolution;
mod mutation;
mod population;
mod selection;

pub use complexity::ComplexityCosts;
pub use config::EvolutionConfig;
pub use evolution::{run_evolution, run_evolution_with_callback, EvolutionHistory};
pub use mutation::mutate;
pub use population::Population;
pub use selection::reproduce;
