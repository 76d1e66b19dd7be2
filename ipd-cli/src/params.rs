//! Parameters shared by every simulation command

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ipd_core::{MatchConfig, PayoffMatrix, StrategyPool, DEFAULT_STRATEGIES};

/// Per-match parameters
#[derive(Args, Clone, Debug)]
pub struct MatchParams {
    /// Rounds per match
    #[arg(long, default_value = "100")]
    pub rounds: usize,

    /// Probability that each chosen action is flipped
    #[arg(long, default_value = "0.0")]
    pub epsilon: f64,

    /// Payoff matrix as T,R,P,S
    #[arg(long, default_value = "5,3,1,0", value_name = "T,R,P,S")]
    pub payoffs: PayoffMatrix,
}

impl MatchParams {
    pub fn to_config(&self) -> MatchConfig {
        MatchConfig::new(self.rounds)
            .with_epsilon(self.epsilon)
            .with_payoffs(self.payoffs)
    }
}

/// Strategy selection for multi-strategy runs
#[derive(Args, Clone, Debug)]
pub struct StrategyList {
    /// Comma-separated strategy identifiers
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_STRATEGIES.map(String::from)
    )]
    pub strategies: Vec<String>,
}

impl StrategyList {
    pub fn build_pool(&self) -> Result<StrategyPool> {
        StrategyPool::from_ids(&self.strategies)
            .with_context(|| format!("Invalid strategy list: {}", self.strategies.join(",")))
    }
}

/// Create RNG from seed, drawing and logging a fresh seed when none is given
/// so every run can be replayed.
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!("Using seed {}", seed);
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_create_rng_with_seed() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }

    #[test]
    fn test_match_params_to_config() {
        let params = MatchParams {
            rounds: 20,
            epsilon: 0.1,
            payoffs: PayoffMatrix::default(),
        };
        let config = params.to_config();
        assert_eq!(config.rounds, 20);
        assert_eq!(config.epsilon, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_pool_reports_unknown_strategy() {
        let list = StrategyList {
            strategies: vec!["TFT".to_string(), "BOGUS".to_string()],
        };
        let err = list.build_pool().unwrap_err();
        assert!(format!("{:#}", err).contains("BOGUS"));
    }
}
