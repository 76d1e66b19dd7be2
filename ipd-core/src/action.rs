//! Actions - the atomic choice a player makes each round

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

/// Ordered actions of one side within the current match
pub type History = [Action];

impl Action {
    /// The opposite action (C <-> D)
    pub fn flipped(self) -> Self {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }

    /// Single-letter code used in match logs
    pub fn as_char(self) -> char {
        match self {
            Action::Cooperate => 'C',
            Action::Defect => 'D',
        }
    }

    pub fn is_cooperate(self) -> bool {
        self == Action::Cooperate
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_involution() {
        assert_eq!(Action::Cooperate.flipped(), Action::Defect);
        assert_eq!(Action::Defect.flipped(), Action::Cooperate);
        assert_eq!(Action::Defect.flipped().flipped(), Action::Defect);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Cooperate.to_string(), "C");
        assert_eq!(Action::Defect.to_string(), "D");
    }
}
