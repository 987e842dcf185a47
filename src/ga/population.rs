//! Initial population generation.
//!
//! The first chromosome of every population replays the upstream greedy
//! assignment (`orig_server` tags); combined with elitism this guarantees
//! the evolved best is never worse than the greedy baseline. The remaining
//! chromosomes place each task on a uniformly random server with enough
//! CPU headroom, falling back to all servers when none qualifies — a
//! placement must always exist, accepting the fitness penalty instead of
//! failing generation.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::error::{PlacementError, PlacementResult};
use crate::extract::ClusterState;
use crate::models::{Chromosome, Gene, PendingTask, ServerProfile};

/// Builds the chromosome that replays the upstream greedy assignment.
pub fn seeded_chromosome(tasks: &[PendingTask]) -> Chromosome {
    Chromosome::new(
        tasks
            .iter()
            .map(|task| Gene::new(task, &task.orig_server))
            .collect(),
    )
}

/// Builds a random chromosome.
///
/// For each task, candidate servers are those whose pristine CPU fits the
/// task's complexity; an empty candidate set falls back to all servers.
///
/// `servers` must be non-empty when `tasks` is non-empty.
pub fn random_chromosome<R: Rng>(
    tasks: &[PendingTask],
    servers: &[ServerProfile],
    rng: &mut R,
) -> Chromosome {
    let genes = tasks
        .iter()
        .map(|task| {
            let eligible: Vec<&ServerProfile> =
                servers.iter().filter(|s| s.can_host(task.complexity)).collect();
            let chosen = if eligible.is_empty() {
                servers.choose(rng)
            } else {
                eligible.choose(rng).copied()
            };
            // Caller guarantees servers is non-empty alongside tasks
            Gene::new(task, &chosen.unwrap().server_id)
        })
        .collect();
    Chromosome::new(genes)
}

/// Generates the initial population for one cluster: one seeded chromosome
/// followed by `population_size - 1` random ones.
///
/// A cluster with zero tasks yields `population_size` empty chromosomes
/// (degenerate but trivially fit). Tasks without any server to place them
/// on are rejected as [`PlacementError::InvalidInput`].
pub fn generate_initial_population<R: Rng>(
    state: &ClusterState,
    population_size: usize,
    rng: &mut R,
) -> PlacementResult<Vec<Chromosome>> {
    if population_size < 1 {
        return Err(PlacementError::InvalidInput(
            "population_size must be >= 1".into(),
        ));
    }
    if state.tasks.is_empty() {
        return Ok(vec![Chromosome::empty(); population_size]);
    }
    if state.servers.is_empty() {
        return Err(PlacementError::InvalidInput(format!(
            "cluster {} has {} pending tasks but no servers",
            state.cluster_id,
            state.tasks.len()
        )));
    }

    let mut population = Vec::with_capacity(population_size);
    population.push(seeded_chromosome(&state.tasks));
    for _ in 1..population_size {
        population.push(random_chromosome(&state.tasks, &state.servers, rng));
    }
    Ok(population)
}
