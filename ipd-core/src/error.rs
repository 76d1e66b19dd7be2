//! Configuration errors
//!
//! Every error here is raised before a run starts. Match and generation
//! execution have no recoverable error path.

/// Errors detected while building an engine from its configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("payoff values violate T > R > P > S (T={t}, R={r}, P={p}, S={s})")]
    InvalidPayoffOrdering { t: f64, r: f64, p: f64, s: f64 },

    #[error("malformed payoff matrix '{0}': expected four comma-separated numbers T,R,P,S")]
    MalformedPayoffs(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("strategy list is empty")]
    EmptyStrategyList,

    #[error("strategy listed more than once: {0}")]
    DuplicateStrategy(String),

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: usize },

    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
}

/// Reject probabilities outside [0, 1] (NaN included)
pub fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

/// Reject zero counts
pub fn check_positive(name: &'static str, value: usize) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
