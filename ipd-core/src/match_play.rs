//! Match simulation - one fixed-length match between two strategies
//!
//! Level 3 - Step-level implementation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::config::MatchConfig;
use crate::strategy::Strategy;

/// Cumulative scores of one match
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score_a: f64,
    pub score_b: f64,
}

/// What happened in a single round
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    /// Actions the strategies chose
    pub intended_a: Action,
    pub intended_b: Action,
    /// Actions actually played after noise
    pub played_a: Action,
    pub played_b: Action,
    pub payoff_a: f64,
    pub payoff_b: f64,
}

impl RoundRecord {
    /// Whether noise flipped either side this round
    pub fn had_noise(&self) -> bool {
        self.intended_a != self.played_a || self.intended_b != self.played_b
    }
}

/// Play one match and return both cumulative scores.
///
/// Both strategies are reset before the first round. Each round draws, in
/// order: any randomness A's decision needs, then B's, then A's noise roll,
/// then B's noise roll. The played (possibly flipped) actions are what both
/// sides see in their histories.
pub fn play_match<R: Rng>(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    config: &MatchConfig,
    rng: &mut R,
) -> MatchScore {
    run_rounds(a, b, config, rng, |_| {})
}

/// Play one match and keep the round-by-round log
pub fn play_match_recorded<R: Rng>(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    config: &MatchConfig,
    rng: &mut R,
) -> (MatchScore, Vec<RoundRecord>) {
    let mut log = Vec::with_capacity(config.rounds);
    let score = run_rounds(a, b, config, rng, |record| log.push(record));
    (score, log)
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

fn run_rounds<R: Rng, F: FnMut(RoundRecord)>(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    config: &MatchConfig,
    rng: &mut R,
    mut on_round: F,
) -> MatchScore {
    a.reset();
    b.reset();

    let mut history_a: Vec<Action> = Vec::with_capacity(config.rounds);
    let mut history_b: Vec<Action> = Vec::with_capacity(config.rounds);
    let mut score = MatchScore::default();

    for round in 0..config.rounds {
        let intended_a = a.decide(&history_a, &history_b, rng);
        let intended_b = b.decide(&history_b, &history_a, rng);

        let played_a = apply_noise(intended_a, config.epsilon, rng);
        let played_b = apply_noise(intended_b, config.epsilon, rng);

        let (payoff_a, payoff_b) = config.payoffs.scores_for(played_a, played_b);
        score.score_a += payoff_a;
        score.score_b += payoff_b;

        history_a.push(played_a);
        history_b.push(played_b);

        on_round(RoundRecord {
            round,
            intended_a,
            intended_b,
            played_a,
            played_b,
            payoff_a,
            payoff_b,
        });
    }

    score
}

/// Flip the action with probability `epsilon`. Always consumes one draw.
fn apply_noise<R: Rng>(action: Action, epsilon: f64, rng: &mut R) -> Action {
    if rng.gen::<f64>() < epsilon {
        action.flipped()
    } else {
        action
    }
}
