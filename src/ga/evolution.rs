//! One-generation evolution step.
//!
//! # Algorithm
//!
//! 1. Elitism: the single highest-fitness chromosome (first occurrence on
//!    ties) is copied unchanged into the next generation, so the best
//!    fitness seen never regresses.
//! 2. Until the new population reaches `population_size`: select two
//!    parents by roulette wheel, recombine with two-point crossover,
//!    mutate the child, append.
//!
//! Identical parents are re-drawn up to [`MAX_PARENT_RETRIES`] times, then
//! accepted — crossover of identical parents degenerates to a copy, which
//! is a valid (if unproductive) offspring.
//!
//! Fitness is always recomputed from scratch on the new population before
//! the next step; it is never carried over between generations.

use rand::Rng;

use crate::models::{Chromosome, ServerProfile};

use super::operators::{mutate, roulette_selection, two_point_crossover};

/// Bounded retry budget for drawing distinct parents.
pub const MAX_PARENT_RETRIES: usize = 10;

/// Index of the first maximum fitness value.
pub fn best_index(fitness: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in fitness.iter().enumerate() {
        if score > fitness[best] {
            best = i;
        }
    }
    best
}

/// Produces the next generation from the current population and its
/// index-aligned fitness scores.
///
/// `population` must be non-empty and `fitness` the same length.
pub fn evolve_generation<R: Rng>(
    population: &[Chromosome],
    fitness: &[f64],
    pristine: &[ServerProfile],
    population_size: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut next = Vec::with_capacity(population_size);
    next.push(population[best_index(fitness)].clone());

    while next.len() < population_size {
        let (parent1, parent2) = select_parents(population, fitness, rng);
        let child = two_point_crossover(parent1, parent2, rng);
        next.push(mutate(&child, pristine, mutation_rate, rng));
    }
    next
}

/// Draws two parents, retrying value-identical pairs up to the retry
/// budget before proceeding with whatever was drawn last.
fn select_parents<'a, R: Rng>(
    population: &'a [Chromosome],
    fitness: &[f64],
    rng: &mut R,
) -> (&'a Chromosome, &'a Chromosome) {
    let mut attempts = 0;
    loop {
        let parents = roulette_selection(population, fitness, 2, rng);
        // The uniform fallback yields a single parent when the population
        // has only one chromosome
        let (p1, p2) = (parents[0], parents[parents.len() - 1]);
        if p1 != p2 || attempts >= MAX_PARENT_RETRIES {
            return (p1, p2);
        }
        attempts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{evaluate_population, FitnessWeights};
    use crate::models::Gene;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn servers() -> Vec<ServerProfile> {
        vec![
            ServerProfile::new("S1", 1000.0, 16.0, 10.0, 5.0),
            ServerProfile::new("S2", 500.0, 8.0, 8.0, 4.0),
        ]
    }

    fn gene(device: &str, complexity: f64, server: &str) -> Gene {
        Gene {
            device_id: device.into(),
            name: "t".into(),
            complexity,
            server_id: server.into(),
        }
    }

    fn sample_population() -> Vec<Chromosome> {
        vec![
            Chromosome::new(vec![gene("D1", 300.0, "S1"), gene("D2", 200.0, "S1")]),
            Chromosome::new(vec![gene("D1", 300.0, "S2"), gene("D2", 200.0, "S1")]),
            Chromosome::new(vec![gene("D1", 300.0, "S1"), gene("D2", 200.0, "S2")]),
            Chromosome::new(vec![gene("D1", 300.0, "S2"), gene("D2", 200.0, "S2")]),
        ]
    }

    #[test]
    fn test_best_index_first_on_ties() {
        assert_eq!(best_index(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(best_index(&[5.0]), 0);
    }

    #[test]
    fn test_elitism_preserves_best() {
        let population = sample_population();
        let weights = FitnessWeights::cpu_only();
        let pristine = servers();
        let fitness = evaluate_population(&population, &pristine, &weights);
        let best_before = fitness[best_index(&fitness)];
        let mut rng = SmallRng::seed_from_u64(42);

        let next = evolve_generation(&population, &fitness, &pristine, 4, 0.2, &mut rng);
        assert_eq!(next.len(), 4);
        assert_eq!(next[0], population[best_index(&fitness)]);

        let next_fitness = evaluate_population(&next, &pristine, &weights);
        let best_after = next_fitness[best_index(&next_fitness)];
        assert!(best_after >= best_before);
    }

    #[test]
    fn test_monotonicity_over_many_generations() {
        let weights = FitnessWeights::cpu_only();
        let pristine = servers();
        let mut rng = SmallRng::seed_from_u64(7);

        let mut population = sample_population();
        let mut fitness = evaluate_population(&population, &pristine, &weights);
        let mut best = fitness[best_index(&fitness)];

        for _ in 0..20 {
            population = evolve_generation(&population, &fitness, &pristine, 4, 0.2, &mut rng);
            fitness = evaluate_population(&population, &pristine, &weights);
            let new_best = fitness[best_index(&fitness)];
            assert!(new_best >= best);
            best = new_best;
        }
    }

    #[test]
    fn test_population_size_stable_and_valid() {
        let population = sample_population();
        let pristine = servers();
        let fitness = evaluate_population(&population, &pristine, &FitnessWeights::default());
        let mut rng = SmallRng::seed_from_u64(42);

        let next = evolve_generation(&population, &fitness, &pristine, 7, 0.2, &mut rng);
        assert_eq!(next.len(), 7);
        // Every offspring keeps the positional task structure
        for ch in &next {
            assert_eq!(ch.len(), 2);
            assert_eq!(ch.genes[0].device_id, "D1");
            assert_eq!(ch.genes[1].device_id, "D2");
        }
    }

    #[test]
    fn test_identical_population_still_produces_generation() {
        // All chromosomes equal → parent retry always gives up; the
        // degenerate copy-crossover path must still fill the population.
        let ch = Chromosome::new(vec![gene("D1", 300.0, "S1")]);
        let population = vec![ch.clone(), ch.clone(), ch];
        let pristine = servers();
        let fitness = vec![1.0, 1.0, 1.0];
        let mut rng = SmallRng::seed_from_u64(42);

        let next = evolve_generation(&population, &fitness, &pristine, 3, 0.0, &mut rng);
        assert_eq!(next.len(), 3);
        assert!(next.iter().all(|c| c == &population[0]));
    }

    #[test]
    fn test_population_size_one_is_pure_elitism() {
        let population = sample_population();
        let pristine = servers();
        let fitness = evaluate_population(&population, &pristine, &FitnessWeights::cpu_only());
        let mut rng = SmallRng::seed_from_u64(42);

        let next = evolve_generation(&population, &fitness, &pristine, 1, 0.2, &mut rng);
        assert_eq!(next, vec![population[best_index(&fitness)].clone()]);
    }
}
