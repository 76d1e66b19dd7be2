//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use ipd_core::error::check_positive;
use ipd_core::{ConfigError, MatchConfig};
use serde::{Deserialize, Serialize};

/// Tournament configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Parameters of every match
    pub match_config: MatchConfig,
    /// Matches played per pairing
    pub repeats: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            repeats: 10,
        }
    }
}

impl TournamentConfig {
    /// Create round-robin config with the given repetitions per pairing
    pub fn round_robin(repeats: usize) -> Self {
        Self {
            repeats,
            ..Default::default()
        }
    }

    /// Set match parameters
    pub fn with_match_config(mut self, match_config: MatchConfig) -> Self {
        self.match_config = match_config;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("repeats", self.repeats)?;
        self.match_config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_config_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.repeats, 10);
        assert_eq!(config.match_config.rounds, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tournament_config_round_robin() {
        let config = TournamentConfig::round_robin(3).with_match_config(MatchConfig::new(20));
        assert_eq!(config.repeats, 3);
        assert_eq!(config.match_config.rounds, 20);
    }

    #[test]
    fn test_zero_repeats_rejected() {
        assert!(matches!(
            TournamentConfig::round_robin(0).validate(),
            Err(ConfigError::NotPositive { name: "repeats", .. })
        ));
    }
}
