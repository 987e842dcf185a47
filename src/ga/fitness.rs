//! Fitness evaluation.
//!
//! Scores a chromosome against the cluster's pristine server profiles.
//!
//! # Aggregation
//!
//! Each server contributes a weighted sum of its residual CPU (floored at
//! zero) and its fixed RAM/bandwidth/throughput attributes. The chromosome
//! score is the **maximum** contribution over all servers, not a sum or
//! average: it rewards assignments that leave at least one server with
//! strong residual headroom ("best available node" rather than aggregate
//! cluster health). Deliberate aggregation choice, kept as-is.

use crate::models::{Chromosome, ServerProfile};

use super::FitnessWeights;

/// Scores one chromosome against the full pristine server list.
///
/// Over-assignment is penalized by flooring residual CPU at zero rather
/// than letting it go negative. Pure function: repeated calls on the same
/// inputs return the same score.
pub fn evaluate_chromosome(
    chromosome: &Chromosome,
    pristine: &[ServerProfile],
    weights: &FitnessWeights,
) -> f64 {
    let mut best = f64::NEG_INFINITY;
    for server in pristine {
        let used_cpu: f64 = chromosome
            .genes
            .iter()
            .filter(|g| g.server_id == server.server_id)
            .map(|g| g.complexity)
            .sum();
        let residual_cpu = (server.cpu - used_cpu).max(0.0);
        let fs = weights.cpu * residual_cpu
            + weights.ram * server.ram
            + weights.bandwidth * server.bandwidth
            + weights.throughput * server.throughput;
        best = best.max(fs);
    }
    best
}

/// Scores a whole population, returning fitness values index-aligned with
/// the chromosomes.
pub fn evaluate_population(
    population: &[Chromosome],
    pristine: &[ServerProfile],
    weights: &FitnessWeights,
) -> Vec<f64> {
    population
        .iter()
        .map(|ch| evaluate_chromosome(ch, pristine, weights))
        .collect()
}
