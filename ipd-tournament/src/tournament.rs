//! Tournament execution - round-robin with self-play
//!
//! Level 1 - Orchestration and Level 2 - Phases

use ipd_core::{play_match, ConfigError, StrategyPool, StrategyResult};
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::config::TournamentConfig;

/// Result of a tournament
#[derive(Clone, Debug)]
pub struct TournamentResult {
    /// One result per strategy, in pool order
    pub results: Vec<StrategyResult>,
    /// Raw per-match scores collected for each strategy
    pub scores: FxHashMap<String, Vec<f64>>,
    /// Matches played in total
    pub matches_played: usize,
}

impl TournamentResult {
    /// Strategy with the highest mean score
    pub fn winner(&self) -> Option<&StrategyResult> {
        self.results.iter().max_by(|a, b| {
            a.mean_score
                .partial_cmp(&b.mean_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Result for a specific strategy
    pub fn result_for(&self, name: &str) -> Option<&StrategyResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Raw scores for a specific strategy
    pub fn scores_for(&self, name: &str) -> Option<&[f64]> {
        self.scores.get(name).map(Vec::as_slice)
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run a round-robin tournament (Level 1 orchestration)
///
/// Every unordered pairing (i, j) with i <= j, self-pairs included, is played
/// `repeats` times. Matches run repetition-major, which fixes the order of
/// random draws for a given seed.
pub fn run_tournament<R: Rng>(
    pool: &mut StrategyPool,
    config: &TournamentConfig,
    rng: &mut R,
) -> Result<TournamentResult, ConfigError> {
    config.validate()?;

    let pairings = generate_round_robin_pairings(pool.len());
    tracing::info!(
        "Starting tournament: {} strategies, {} pairings x {} repeats, {} rounds, epsilon={}",
        pool.len(),
        pairings.len(),
        config.repeats,
        config.match_config.rounds,
        config.match_config.epsilon
    );

    let scores = play_all_repetitions(pool, &pairings, config, rng);
    let results = compute_results(pool, &scores);

    tracing::info!("Tournament finished: {} matches", pairings.len() * config.repeats);

    Ok(TournamentResult {
        results,
        scores: pool.names().into_iter().zip(scores).collect(),
        matches_played: pairings.len() * config.repeats,
    })
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Play every pairing for every repetition, collecting scores per pool index
fn play_all_repetitions<R: Rng>(
    pool: &mut StrategyPool,
    pairings: &[(usize, usize)],
    config: &TournamentConfig,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let mut scores: Vec<Vec<f64>> = (0..pool.len())
        .map(|_| Vec::with_capacity(config.repeats * (pool.len() + 1)))
        .collect();

    for _rep in 0..config.repeats {
        for &(i, j) in pairings {
            let (a, b) = pool.pair_mut(i, j);
            let score = play_match(a, b, &config.match_config, rng);
            record_scores(&mut scores, i, j, score.score_a, score.score_b);
        }
    }

    scores
}

/// Reduce raw scores to one result per strategy
fn compute_results(pool: &StrategyPool, scores: &[Vec<f64>]) -> Vec<StrategyResult> {
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| StrategyResult::compute(pool.name(i), s))
        .collect()
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Generate all pairings (i, j) with i <= j
fn generate_round_robin_pairings(n: usize) -> Vec<(usize, usize)> {
    let mut pairings = Vec::with_capacity(n * (n + 1) / 2);
    for i in 0..n {
        for j in i..n {
            pairings.push((i, j));
        }
    }
    pairings
}

/// Self-play contributes one sample; cross-play one per side
fn record_scores(scores: &mut [Vec<f64>], i: usize, j: usize, score_a: f64, score_b: f64) {
    scores[i].push(score_a);
    if i != j {
        scores[j].push(score_b);
    }
}
