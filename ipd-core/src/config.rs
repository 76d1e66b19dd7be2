//! Match configuration shared by tournament and evolution runs
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::error::{check_positive, check_probability, ConfigError};
use crate::payoff::PayoffMatrix;

/// Parameters for a single match
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds per match
    pub rounds: usize,
    /// Probability that an intended action is flipped before it is played
    pub epsilon: f64,
    /// Payoff matrix
    pub payoffs: PayoffMatrix,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            epsilon: 0.0,
            payoffs: PayoffMatrix::default(),
        }
    }
}

impl MatchConfig {
    /// Create config with the given round count
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            ..Default::default()
        }
    }

    /// Set execution noise
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set payoff matrix
    pub fn with_payoffs(mut self, payoffs: PayoffMatrix) -> Self {
        self.payoffs = payoffs;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("rounds", self.rounds)?;
        check_probability("epsilon", self.epsilon)?;
        self.payoffs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.rounds, 100);
        assert_eq!(config.epsilon, 0.0);
        assert_eq!(config.payoffs, PayoffMatrix::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_match_config_builders() {
        let config = MatchConfig::new(10).with_epsilon(0.05);
        assert_eq!(config.rounds, 10);
        assert_eq!(config.epsilon, 0.05);
    }

    #[test]
    fn test_match_config_validation() {
        assert!(matches!(
            MatchConfig::new(0).validate(),
            Err(ConfigError::NotPositive { name: "rounds", .. })
        ));
        assert!(matches!(
            MatchConfig::new(5).with_epsilon(1.2).validate(),
            Err(ConfigError::ProbabilityOutOfRange { name: "epsilon", .. })
        ));

        let mut bad = MatchConfig::new(5);
        bad.payoffs.reward = 10.0;
        assert!(matches!(bad.validate(), Err(ConfigError::InvalidPayoffOrdering { .. })));
    }
}
