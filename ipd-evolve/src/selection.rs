//! Fitness-proportional reproduction
//!
//! Each strategy's share of the next generation is its share of total
//! fitness. Rounding rarely conserves the head count, so a randomized
//! correction pass adds or removes single individuals until the target is
//! met exactly.

use rand::Rng;

use crate::population::Population;

/// Build the next generation.
///
/// `mean_fitness[i]` is ignored for unpopulated strategies. `total_fitness`
/// must be positive; callers halt the run instead of reproducing otherwise.
pub fn reproduce<R: Rng>(
    current: &Population,
    mean_fitness: &[f64],
    total_fitness: f64,
    target: usize,
    rng: &mut R,
) -> Population {
    debug_assert!(total_fitness > 0.0, "reproduction needs positive total fitness");

    let mut next = Population::from_counts(offspring_counts(current, mean_fitness, total_fitness, target));
    correct_rounding(&mut next, &current.populated_indices(), target, rng);
    next
}

/// `round(mean[i] * pop[i] / total_fitness * target)` per strategy, clamped
/// to `[0, target]`.
///
/// A strategy whose complexity-adjusted mean went negative gets zero offspring.
/// When costs nearly cancel the total, a single share can dwarf the target;
/// the upper clamp keeps the correction pass within `kinds * target` steps.
fn offspring_counts(
    current: &Population,
    mean_fitness: &[f64],
    total_fitness: f64,
    target: usize,
) -> Vec<usize> {
    (0..current.kinds())
        .map(|i| {
            let population = current.get(i);
            if population == 0 {
                return 0;
            }
            let share = mean_fitness[i] * population as f64 / total_fitness;
            (share * target as f64).round().clamp(0.0, target as f64) as usize
        })
        .collect()
}

/// Add units to random parents while under `target`; remove units from
/// random non-empty slots while over it.
///
/// Only strategies populated in the parent generation can receive extra
/// units, so rounding never revives an extinct strategy.
fn correct_rounding<R: Rng>(next: &mut Population, parents: &[usize], target: usize, rng: &mut R) {
    let kinds = next.kinds();
    let mut total = next.total();
    let counts = next.counts_mut();

    if parents.is_empty() || kinds == 0 {
        return;
    }

    while total < target {
        let idx = parents[rng.gen_range(0..parents.len())];
        counts[idx] += 1;
        total += 1;
    }

    while total > target {
        let idx = rng.gen_range(0..kinds);
        if counts[idx] > 0 {
            counts[idx] -= 1;
            total -= 1;
        }
    }
}
