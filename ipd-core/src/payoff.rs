//! Payoff matrix - converts an action pair into a score pair

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::action::Action;
use crate::error::ConfigError;

/// Four-parameter Prisoner's Dilemma payoff matrix
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    /// Temptation: defecting against a cooperator
    pub temptation: f64,
    /// Reward: mutual cooperation
    pub reward: f64,
    /// Punishment: mutual defection
    pub punishment: f64,
    /// Sucker: cooperating against a defector
    pub sucker: f64,
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self {
            temptation: 5.0,
            reward: 3.0,
            punishment: 1.0,
            sucker: 0.0,
        }
    }
}

impl PayoffMatrix {
    /// Build and validate a matrix
    pub fn new(temptation: f64, reward: f64, punishment: f64, sucker: f64) -> Result<Self, ConfigError> {
        let matrix = Self {
            temptation,
            reward,
            punishment,
            sucker,
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Check T > R > P > S; warn (without failing) when 2R > T + S does not hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.has_dilemma_ordering() {
            return Err(ConfigError::InvalidPayoffOrdering {
                t: self.temptation,
                r: self.reward,
                p: self.punishment,
                s: self.sucker,
            });
        }
        if !self.is_cooperation_stable() {
            tracing::warn!(
                "payoffs violate 2R > T+S (2*{} <= {} + {}); cooperation may not be stable",
                self.reward,
                self.temptation,
                self.sucker
            );
        }
        Ok(())
    }

    /// T > R > P > S
    pub fn has_dilemma_ordering(&self) -> bool {
        self.temptation > self.reward && self.reward > self.punishment && self.punishment > self.sucker
    }

    /// 2R > T + S: alternating exploitation does not beat steady cooperation
    pub fn is_cooperation_stable(&self) -> bool {
        2.0 * self.reward > self.temptation + self.sucker
    }

    /// Scores for (a, b) given their actions this round
    pub fn scores_for(&self, a: Action, b: Action) -> (f64, f64) {
        match (a, b) {
            (Action::Cooperate, Action::Cooperate) => (self.reward, self.reward),
            (Action::Cooperate, Action::Defect) => (self.sucker, self.temptation),
            (Action::Defect, Action::Cooperate) => (self.temptation, self.sucker),
            (Action::Defect, Action::Defect) => (self.punishment, self.punishment),
        }
    }
}

impl FromStr for PayoffMatrix {
    type Err = ConfigError;

    /// Parse "T,R,P,S". Ordering is checked later by `validate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<f64> = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| ConfigError::MalformedPayoffs(s.to_string()))?;

        match values.as_slice() {
            &[temptation, reward, punishment, sucker] => Ok(Self {
                temptation,
                reward,
                punishment,
                sucker,
            }),
            _ => Err(ConfigError::MalformedPayoffs(s.to_string())),
        }
    }
}
