//! Generational evolution loop
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_evolution / run_evolution_with_callback (orchestration)
//! - Level 2: accumulate_fitness, mean_fitness, snapshot (phases)
//! - Level 3: reproduce, mutate (steps, see `selection` and `mutation`)

use ipd_core::{play_match, ConfigError, MatchConfig, StrategyPool, StrategyResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::complexity::ComplexityCosts;
use crate::config::EvolutionConfig;
use crate::mutation::mutate;
use crate::population::Population;
use crate::selection::reproduce;

/// Per-generation snapshots of an evolution run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionHistory {
    /// One entry per executed generation: a result per populated strategy,
    /// recorded before reproduction
    pub generations: Vec<Vec<StrategyResult>>,
    /// Head counts after the last executed step, in pool order
    pub final_population: Vec<usize>,
    /// Whether the run stopped because total fitness dropped to zero or below
    pub halted_early: bool,
}

impl EvolutionHistory {
    /// Number of generations recorded
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn generations(&self) -> &[Vec<StrategyResult>] {
        &self.generations
    }

    /// Snapshot of the last recorded generation
    pub fn final_generation(&self) -> Option<&[StrategyResult]> {
        self.generations.last().map(Vec::as_slice)
    }

    /// Population of one strategy across generations (0 while extinct)
    pub fn population_series(&self, name: &str) -> Vec<usize> {
        self.generations
            .iter()
            .map(|snapshot| {
                snapshot
                    .iter()
                    .find(|r| r.name == name)
                    .map_or(0, |r| r.population)
            })
            .collect()
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the evolutionary simulation
pub fn run_evolution<R: Rng>(
    pool: &mut StrategyPool,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Result<EvolutionHistory, ConfigError> {
    run_evolution_with_callback(pool, config, rng, |_, _| {})
}

/// Run the evolutionary simulation, calling `callback(generation, snapshot)`
/// after each generation's snapshot is taken.
pub fn run_evolution_with_callback<R, F>(
    pool: &mut StrategyPool,
    config: &EvolutionConfig,
    rng: &mut R,
    mut callback: F,
) -> Result<EvolutionHistory, ConfigError>
where
    R: Rng,
    F: FnMut(usize, &[StrategyResult]),
{
    config.validate()?;

    let target = config.population_size;
    let mut population = Population::even_split(target, pool.len());
    let mut history = EvolutionHistory::default();

    tracing::info!(
        "Starting evolution: {} strategies, pop={} (initial {}), gen={}, mutation={}, complexity costs {}",
        pool.len(),
        target,
        population.total(),
        config.generations,
        config.mutation_rate,
        if config.complexity_costs.is_some() { "on" } else { "off" }
    );

    for generation in 0..config.generations {
        let totals = accumulate_fitness(pool, &population, &config.match_config, rng);
        let means = mean_fitness(pool, &population, &totals, config.complexity_costs.as_ref());
        let snapshot = take_snapshot(pool, &population, &means);
        let total_fitness = sum_fitness(&population, &means);

        callback(generation, snapshot.as_slice());
        history.generations.push(snapshot);

        if total_fitness <= 0.0 {
            tracing::info!(
                "Generation {}: total fitness {:.3} <= 0, halting",
                generation + 1,
                total_fitness
            );
            history.halted_early = true;
            break;
        }

        population = reproduce(&population, &means, total_fitness, target, rng);
        let mutations = mutate(&mut population, config.mutation_rate, rng);

        tracing::debug!(
            "Generation {}: total fitness {:.3}, {} mutations, next {:?}",
            generation + 1,
            total_fitness,
            mutations,
            population.counts()
        );
    }

    history.final_population = population.into_counts();
    tracing::info!("Evolution finished after {} generations", history.len());

    Ok(history)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Population-weighted score totals from one representative match per
/// populated pairing.
///
/// Self-pairs are weighted by `pop[i]`, a simplification of the
/// `pop[i] * (pop[i] - 1)` distinct pairings; cross-pairs by `pop[i] * pop[j]`.
fn accumulate_fitness<R: Rng>(
    pool: &mut StrategyPool,
    population: &Population,
    match_config: &MatchConfig,
    rng: &mut R,
) -> Vec<f64> {
    let kinds = pool.len();
    let mut totals = vec![0.0; kinds];

    for i in 0..kinds {
        for j in i..kinds {
            if !population.is_populated(i) || !population.is_populated(j) {
                continue;
            }

            let (a, b) = pool.pair_mut(i, j);
            let score = play_match(a, b, match_config, rng);
            let pop_i = population.get(i) as f64;
            let pop_j = population.get(j) as f64;

            if i == j {
                totals[i] += score.score_a * pop_i;
            } else {
                totals[i] += score.score_a * pop_i * pop_j;
                totals[j] += score.score_b * pop_j * pop_i;
            }
        }
    }

    totals
}

/// Mean fitness per strategy, minus complexity cost when enabled.
/// Unpopulated strategies get 0 and are never read.
fn mean_fitness(
    pool: &StrategyPool,
    population: &Population,
    totals: &[f64],
    costs: Option<&ComplexityCosts>,
) -> Vec<f64> {
    (0..pool.len())
        .map(|i| {
            if !population.is_populated(i) {
                return 0.0;
            }
            let mean = totals[i] / population.get(i) as f64;
            let cost = costs.map_or(0.0, |c| c.cost_for(pool.name(i)));
            mean - cost
        })
        .collect()
}

/// One result per populated strategy
fn take_snapshot(pool: &StrategyPool, population: &Population, means: &[f64]) -> Vec<StrategyResult> {
    population
        .populated_indices()
        .into_iter()
        .map(|i| StrategyResult::compute(pool.name(i), &[means[i]]).with_population(population.get(i)))
        .collect()
}

/// Σ mean[i] · pop[i]
fn sum_fitness(population: &Population, means: &[f64]) -> f64 {
    population
        .populated_indices()
        .into_iter()
        .map(|i| means[i] * population.get(i) as f64)
        .sum()
}
