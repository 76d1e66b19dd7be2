//! Integration tests for IPD Lab
//!
//! Tests the full stack: strategies, noisy matches, tournaments and evolution

use ipd_core::{
    available_strategies, create_strategy, play_match, Action, ConfigError, MatchConfig,
    PayoffMatrix, StrategyPool, StrategyResult,
};
use ipd_evolve::{run_evolution, ComplexityCosts, EvolutionConfig};
use ipd_tournament::{run_tournament, TournamentConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn tournament_config(rounds: usize, repeats: usize, epsilon: f64) -> TournamentConfig {
    TournamentConfig::round_robin(repeats)
        .with_match_config(MatchConfig::new(rounds).with_epsilon(epsilon))
}

fn evolution_config(population: usize, generations: usize, mutation: f64) -> EvolutionConfig {
    EvolutionConfig::new(population, generations)
        .with_match_config(MatchConfig::new(20))
        .with_mutation_rate(mutation)
}

fn means(results: &[StrategyResult]) -> Vec<f64> {
    results.iter().map(|r| r.mean_score).collect()
}

// ============================================================================
// MATCH TESTS
// ============================================================================

#[test]
fn test_allc_self_play_over_ten_rounds() {
    let mut a = create_strategy("ALLC").unwrap();
    let mut b = create_strategy("ALLC").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let score = play_match(a.as_mut(), b.as_mut(), &MatchConfig::new(10), &mut rng);
    assert_eq!(score.score_a, 30.0);
    assert_eq!(score.score_b, 30.0);
}

#[test]
fn test_alld_exploits_allc() {
    let mut a = create_strategy("ALLD").unwrap();
    let mut b = create_strategy("ALLC").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let score = play_match(a.as_mut(), b.as_mut(), &MatchConfig::new(5), &mut rng);
    assert_eq!(score.score_a, 25.0);
    assert_eq!(score.score_b, 0.0);
}

#[test]
fn test_noise_breaks_mutual_cooperation() {
    let mut a = create_strategy("TFT").unwrap();
    let mut b = create_strategy("TFT").unwrap();
    let config = MatchConfig::new(200).with_epsilon(0.1);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let score = play_match(a.as_mut(), b.as_mut(), &config, &mut rng);
    // Without noise both would score exactly 600
    assert!(score.score_a < 600.0 || score.score_b < 600.0);
}

#[test]
fn test_every_catalog_strategy_plays_every_other() {
    let config = MatchConfig::new(12).with_epsilon(0.05);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let max_total = 12.0 * 5.0;

    for first in available_strategies() {
        for second in available_strategies() {
            let mut a = create_strategy(first).unwrap();
            let mut b = create_strategy(second).unwrap();
            let score = play_match(a.as_mut(), b.as_mut(), &config, &mut rng);
            assert!((0.0..=max_total).contains(&score.score_a));
            assert!((0.0..=max_total).contains(&score.score_b));
        }
    }
}

#[test]
fn test_payoff_symmetry_for_all_action_pairs() {
    let pm = PayoffMatrix::new(7.0, 4.0, 2.0, -1.0).unwrap();
    for a in [Action::Cooperate, Action::Defect] {
        for b in [Action::Cooperate, Action::Defect] {
            let (x, y) = pm.scores_for(a, b);
            assert_eq!(pm.scores_for(b, a), (y, x));
        }
    }
}

// ============================================================================
// TOURNAMENT TESTS
// ============================================================================

#[test]
fn test_tournament_is_deterministic_without_noise() {
    let ids = ["ALLC", "ALLD", "TFT", "GRIM", "PAVLOV", "PROBER"];
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut pool = StrategyPool::from_ids(&ids).unwrap();

    let first = run_tournament(&mut pool, &tournament_config(50, 3, 0.0), &mut rng).unwrap();
    // Same pool, continued generator: deterministic strategies ignore it
    let second = run_tournament(&mut pool, &tournament_config(50, 3, 0.0), &mut rng).unwrap();

    assert_eq!(means(&first.results), means(&second.results));
}

#[test]
fn test_tournament_with_noise_is_reproducible_from_seed() {
    let ids = ["TFT", "GRIM", "RND", "CONTRITE"];
    let run = |seed: u64| {
        let mut pool = StrategyPool::from_ids(&ids).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        run_tournament(&mut pool, &tournament_config(30, 5, 0.05), &mut rng).unwrap()
    };

    assert_eq!(means(&run(5).results), means(&run(5).results));
}

#[test]
fn test_tournament_sample_counts_include_one_self_play() {
    let ids = ["ALLC", "ALLD", "TFT", "GRIM"];
    let mut pool = StrategyPool::from_ids(&ids).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = run_tournament(&mut pool, &tournament_config(10, 3, 0.0), &mut rng).unwrap();
    for id in ids {
        assert_eq!(result.scores_for(id).unwrap().len(), 3 * ids.len());
    }
}

#[test]
fn test_constant_scores_give_degenerate_interval() {
    let mut pool = StrategyPool::from_ids(&["ALLC", "ALLD"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = run_tournament(&mut pool, &tournament_config(10, 4, 0.0), &mut rng).unwrap();
    let allc = result.result_for("ALLC").unwrap();
    // Self-play 30, against ALLD 0
    assert_eq!(allc.mean_score, 15.0);
    assert!(allc.ci_lower < allc.mean_score && allc.mean_score < allc.ci_upper);

    let stats = StrategyResult::compute("X", &[3.0, 3.0, 3.0]);
    assert_eq!((stats.mean_score, stats.stdev), (3.0, 0.0));
    assert_eq!((stats.ci_lower, stats.ci_upper), (3.0, 3.0));
}

#[test]
fn test_alld_wins_against_unconditional_cooperators() {
    let mut pool = StrategyPool::from_ids(&["ALLC", "ALLD", "ALTERNATE"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let result = run_tournament(&mut pool, &tournament_config(100, 2, 0.0), &mut rng).unwrap();
    assert_eq!(result.winner().unwrap().name, "ALLD");
}

#[test]
fn test_invalid_configuration_is_rejected_before_play() {
    assert_eq!(
        StrategyPool::from_ids(&["TFT", "NOT_A_STRATEGY"]).err(),
        Some(ConfigError::UnknownStrategy("NOT_A_STRATEGY".to_string()))
    );
    assert_eq!(
        StrategyPool::from_ids::<&str>(&[]).err(),
        Some(ConfigError::EmptyStrategyList)
    );

    let mut pool = StrategyPool::from_ids(&["TFT"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(run_tournament(&mut pool, &tournament_config(0, 1, 0.0), &mut rng).is_err());
    assert!(run_tournament(&mut pool, &tournament_config(10, 0, 0.0), &mut rng).is_err());
    assert!(run_tournament(&mut pool, &tournament_config(10, 1, 1.5), &mut rng).is_err());

    let bad_payoffs = TournamentConfig::round_robin(1).with_match_config(
        MatchConfig::new(10).with_payoffs("3,5,1,0".parse().unwrap()),
    );
    assert!(matches!(
        run_tournament(&mut pool, &bad_payoffs, &mut rng),
        Err(ConfigError::InvalidPayoffOrdering { .. })
    ));
}

// ============================================================================
// EVOLUTION TESTS
// ============================================================================

#[test]
fn test_population_conserved_every_generation() {
    let ids = ["ALLC", "ALLD", "TFT", "GRIM", "PAVLOV", "RND"];
    for mutation in [0.0, 0.05, 0.5, 1.0] {
        let mut pool = StrategyPool::from_ids(&ids).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        let history = run_evolution(&mut pool, &evolution_config(60, 15, mutation), &mut rng).unwrap();
        assert_eq!(history.len(), 15);
        for snapshot in history.generations() {
            assert_eq!(snapshot.iter().map(|r| r.population).sum::<usize>(), 60);
        }
        assert_eq!(history.final_population.iter().sum::<usize>(), 60);
    }
}

#[test]
fn test_initial_split_drops_remainder() {
    let mut pool = StrategyPool::from_ids(&["ALLC", "ALLD", "TFT"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let history = run_evolution(&mut pool, &evolution_config(10, 3, 0.0), &mut rng).unwrap();
    let first: Vec<usize> = history.generations()[0].iter().map(|r| r.population).collect();
    assert_eq!(first, vec![3, 3, 3]);
    for snapshot in &history.generations()[1..] {
        assert_eq!(snapshot.iter().map(|r| r.population).sum::<usize>(), 10);
    }
}

#[test]
fn test_extinct_strategies_stay_extinct_without_mutation() {
    let mut pool = StrategyPool::from_ids(&["ALLC", "ALLD", "TFT", "GRIM"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let history = run_evolution(&mut pool, &evolution_config(40, 30, 0.0), &mut rng).unwrap();
    for name in ["ALLC", "ALLD", "TFT", "GRIM"] {
        let series = history.population_series(name);
        if let Some(gone) = series.iter().position(|&p| p == 0) {
            assert!(series[gone..].iter().all(|&p| p == 0), "{} revived: {:?}", name, series);
        }
    }
}

#[test]
fn test_population_smaller_than_kinds_halts() {
    let mut pool = StrategyPool::from_ids(&["ALLC", "ALLD"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let history = run_evolution(&mut pool, &evolution_config(2, 1, 0.0), &mut rng).unwrap();
    // pop 2 over 2 kinds: one each, both present in generation 1
    assert!(history.generations()[0].iter().all(|r| r.population == 1));

    let mut pool = StrategyPool::from_ids(&["ALLC", "ALLD", "TFT"]).unwrap();
    let history = run_evolution(&mut pool, &evolution_config(2, 1, 0.0), &mut rng).unwrap();
    // pop 2 over 3 kinds: nobody gets an individual, nothing to reproduce
    assert_eq!(history.len(), 1);
    assert!(history.generations()[0].is_empty());
    assert!(history.halted_early);
}

#[test]
fn test_complexity_costs_can_halt_the_run() {
    let mut pool = StrategyPool::from_ids(&["ALLD"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let costs: ComplexityCosts = [("ALLD", 1000.0)].into_iter().collect();
    let config = evolution_config(10, 20, 0.0).with_complexity_costs(costs);

    let history = run_evolution(&mut pool, &config, &mut rng).unwrap();
    assert!(history.halted_early);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_noisy_evolution_is_reproducible_from_seed() {
    let ids = ["TFT", "GRIM", "PAVLOV", "RND", "ALLD"];
    let run = |seed: u64| {
        let mut pool = StrategyPool::from_ids(&ids).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let config = evolution_config(50, 10, 0.05)
            .with_match_config(MatchConfig::new(20).with_epsilon(0.05));
        run_evolution(&mut pool, &config, &mut rng).unwrap()
    };

    let first = run(21);
    let second = run(21);
    assert_eq!(first.final_population, second.final_population);
    for name in ids {
        assert_eq!(first.population_series(name), second.population_series(name));
    }
}
