//! Mutation - random reassignment of individuals to strategies

use rand::Rng;

use crate::population::Population;

/// Visit every individual once; with probability `rate` move it to a
/// uniformly chosen strategy slot (possibly its own).
///
/// Individuals are located by walking the live cumulative counts, so an
/// individual moved earlier in the pass can shift which slot later
/// positions fall into. Every individual costs one draw; a mutation costs
/// one more for the destination. Returns the number of mutation events.
pub fn mutate<R: Rng>(population: &mut Population, rate: f64, rng: &mut R) -> usize {
    let kinds = population.kinds();
    let size = population.total();
    if kinds == 0 {
        return 0;
    }

    let mut events = 0;
    for individual in 0..size {
        if rng.gen::<f64>() >= rate {
            continue;
        }
        if let Some(from) = population.bucket_of(individual) {
            let to = rng.gen_range(0..kinds);
            population.transfer(from, to);
            events += 1;
        }
    }
    events
}
