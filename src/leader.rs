//! Leader election.
//!
//! Post-processing step: from the best chromosome of the final generation,
//! the server handling the most tasks is elected cluster leader.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, PlacementResult};
use crate::models::Chromosome;

/// The elected leader of a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Elected server.
    pub server_id: String,
    /// Number of tasks the best chromosome assigns to it.
    pub task_count: usize,
}

/// Elects the server with the most assigned tasks in a chromosome.
///
/// Ties break toward the server appearing first in the chromosome's gene
/// order. An empty chromosome has no candidate to elect.
pub fn elect_leader(chromosome: &Chromosome) -> PlacementResult<Leader> {
    let counts = chromosome.task_counts_by_server();
    counts
        .into_iter()
        // strict > keeps the first server reaching the max count
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
        .map(|(server_id, task_count)| Leader {
            server_id,
            task_count,
        })
        .ok_or_else(|| {
            PlacementError::NoCandidate("cannot elect a leader from an empty chromosome".into())
        })
}
