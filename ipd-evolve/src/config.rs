//! Evolution configuration

use ipd_core::error::{check_positive, check_probability};
use ipd_core::{ConfigError, MatchConfig};
use serde::{Deserialize, Serialize};

use crate::complexity::ComplexityCosts;

/// Evolution configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Parameters of every representative match
    pub match_config: MatchConfig,
    /// Total population size N
    pub population_size: usize,
    /// Maximum number of generations
    pub generations: usize,
    /// Per-individual probability of reassignment each generation
    pub mutation_rate: f64,
    /// Complexity costs deducted from mean fitness (None = disabled)
    pub complexity_costs: Option<ComplexityCosts>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            population_size: 50,
            generations: 50,
            mutation_rate: 0.01,
            complexity_costs: None,
        }
    }
}

impl EvolutionConfig {
    /// Create config with the given population size and generation count
    pub fn new(population_size: usize, generations: usize) -> Self {
        Self {
            population_size,
            generations,
            ..Default::default()
        }
    }

    /// Set match parameters
    pub fn with_match_config(mut self, match_config: MatchConfig) -> Self {
        self.match_config = match_config;
        self
    }

    /// Set mutation rate
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Enable complexity costs
    pub fn with_complexity_costs(mut self, costs: ComplexityCosts) -> Self {
        self.complexity_costs = Some(costs);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("population", self.population_size)?;
        check_probability("mutation", self.mutation_rate)?;
        self.match_config.validate()
    }
}
