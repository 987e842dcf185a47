//! Genetic operators: roulette-wheel selection, two-point crossover, and
//! per-gene mutation.
//!
//! All operators take the RNG explicitly and never mutate their inputs;
//! crossover and mutation return new chromosomes.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Chromosome, ServerProfile};

/// Selects `num_parents` chromosomes proportionally to fitness.
///
/// Parents are drawn independently with replacement, so the same
/// chromosome may be selected twice. A non-positive fitness total (e.g.
/// fully saturated servers scoring zero everywhere) falls back to uniform
/// sampling without replacement.
pub fn roulette_selection<'a, R: Rng>(
    population: &'a [Chromosome],
    fitness: &[f64],
    num_parents: usize,
    rng: &mut R,
) -> Vec<&'a Chromosome> {
    let total: f64 = fitness.iter().sum();
    if total <= 0.0 {
        return population.choose_multiple(rng, num_parents).collect();
    }

    (0..num_parents)
        .map(|_| {
            let mut spin = rng.random::<f64>() * total;
            for (ch, &score) in population.iter().zip(fitness) {
                spin -= score;
                if spin <= 0.0 {
                    return ch;
                }
            }
            // Rounding can leave a sliver past the last slot
            &population[population.len() - 1]
        })
        .collect()
}

/// Two-point crossover.
///
/// Chooses cut points `pt1 in [0, len-2]` and `pt2 in [pt1+1, len-1]`;
/// the child takes parent 1's genes outside `[pt1, pt2)` and parent 2's
/// genes inside. Valid because gene *i* in any chromosome of a cluster
/// corresponds to task *i*. Parents of length < 2 cannot recombine and
/// yield a copy of parent 1.
pub fn two_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    let len = parent1.len();
    if len < 2 {
        return parent1.clone();
    }

    let pt1 = rng.random_range(0..=len - 2);
    let pt2 = rng.random_range(pt1 + 1..=len - 1);

    let mut genes = Vec::with_capacity(len);
    genes.extend_from_slice(&parent1.genes[..pt1]);
    genes.extend_from_slice(&parent2.genes[pt1..pt2]);
    genes.extend_from_slice(&parent1.genes[pt2..]);
    Chromosome::new(genes)
}

/// Per-gene mutation.
///
/// Each gene is independently reassigned with probability `mutation_rate`
/// (must be in `[0, 1]`) to a uniformly random server whose pristine CPU
/// fits the gene's complexity; genes with no eligible server are left
/// unchanged. Returns a new chromosome.
pub fn mutate<R: Rng>(
    chromosome: &Chromosome,
    pristine: &[ServerProfile],
    mutation_rate: f64,
    rng: &mut R,
) -> Chromosome {
    let genes = chromosome
        .genes
        .iter()
        .map(|gene| {
            if !rng.random_bool(mutation_rate) {
                return gene.clone();
            }
            let eligible: Vec<&ServerProfile> = pristine
                .iter()
                .filter(|s| s.can_host(gene.complexity))
                .collect();
            match eligible.choose(rng) {
                Some(server) => {
                    let mut mutated = gene.clone();
                    mutated.server_id = server.server_id.clone();
                    mutated
                }
                None => gene.clone(),
            }
        })
        .collect();
    Chromosome::new(genes)
}
