//! Placement run orchestration.
//!
//! # Pipeline
//!
//! 1. Extract pristine state from the cluster snapshots.
//! 2. Per cluster: generate the initial population (greedy-seeded + random).
//! 3. Evolve for the configured number of generations, recomputing fitness
//!    from scratch after every step.
//! 4. Elect the leader from the best chromosome of the final generation.
//!
//! Clusters share no mutable state and are processed sequentially; each
//! cluster's result is independent of the others.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::PlacementResult;
use crate::extract::{extract_state, ClusterState};
use crate::ga::{
    best_index, evaluate_population, evolve_generation, generate_initial_population, GaConfig,
};
use crate::leader::{elect_leader, Leader};
use crate::models::{Chromosome, Cluster};

/// The outcome of a placement run for one cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Cluster identifier.
    pub cluster_id: String,
    /// Final-generation population.
    pub population: Vec<Chromosome>,
    /// Fitness scores, index-aligned with `population`.
    pub fitness: Vec<f64>,
    /// Index of the best chromosome (first occurrence of the max score).
    pub best_index: usize,
    /// Best fitness per generation: entry 0 is the initial population,
    /// followed by one entry per evolved generation.
    pub best_fitness_history: Vec<f64>,
    /// Server elected from the best chromosome.
    pub leader: Leader,
}

impl ClusterResult {
    /// The best chromosome of the final generation.
    pub fn best_chromosome(&self) -> &Chromosome {
        &self.population[self.best_index]
    }

    /// The best fitness of the final generation.
    pub fn best_fitness(&self) -> f64 {
        self.fitness[self.best_index]
    }
}

/// GA-driven task placement optimizer.
///
/// # Example
///
/// ```
/// use u_placement::models::{Cluster, ServerSnapshot, TaskSpec};
/// use u_placement::ga::GaConfig;
/// use u_placement::PlacementOptimizer;
///
/// let clusters = vec![Cluster::new(
///     "Cluster 1",
///     vec![
///         ServerSnapshot::new("S1", 4000.0, 16.0, 10.0, 5.0)
///             .with_task(TaskSpec::new("D1", "sensor-read", 120.0)),
///         ServerSnapshot::new("S2", 3000.0, 8.0, 8.0, 4.0),
///     ],
/// )];
///
/// let config = GaConfig::default()
///     .with_population_size(8)
///     .with_generations(5)
///     .with_seed(42);
/// let results = PlacementOptimizer::with_config(config)
///     .optimize(&clusters)
///     .unwrap();
///
/// assert_eq!(results.len(), 1);
/// assert!(results[0].leader.task_count >= 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlacementOptimizer {
    config: GaConfig,
}

impl PlacementOptimizer {
    /// Creates an optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with the given configuration.
    pub fn with_config(config: GaConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the full pipeline over all clusters.
    ///
    /// Fails fast on invalid configuration; per-cluster failures
    /// (tasks with no servers, zero-task clusters reaching leader
    /// election) abort the run.
    pub fn optimize(&self, clusters: &[Cluster]) -> PlacementResult<Vec<ClusterResult>> {
        self.config.validate()?;
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        extract_state(clusters)
            .iter()
            .map(|state| self.optimize_cluster(state, &mut rng))
            .collect()
    }

    /// Runs the GA for a single cluster with a caller-supplied RNG.
    ///
    /// Exposed for reproducible per-cluster runs and for callers that
    /// shard clusters across their own workers.
    pub fn optimize_cluster<R: Rng>(
        &self,
        state: &ClusterState,
        rng: &mut R,
    ) -> PlacementResult<ClusterResult> {
        let mut population =
            generate_initial_population(state, self.config.population_size, rng)?;
        let mut fitness = evaluate_population(&population, &state.servers, &self.config.weights);
        let mut history = vec![fitness[best_index(&fitness)]];

        for _ in 0..self.config.generations {
            population = evolve_generation(
                &population,
                &fitness,
                &state.servers,
                self.config.population_size,
                self.config.mutation_rate,
                rng,
            );
            fitness = evaluate_population(&population, &state.servers, &self.config.weights);
            history.push(fitness[best_index(&fitness)]);
        }

        let best = best_index(&fitness);
        let leader = elect_leader(&population[best])?;

        Ok(ClusterResult {
            cluster_id: state.cluster_id.clone(),
            population,
            fitness,
            best_index: best,
            best_fitness_history: history,
            leader,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlacementError;
    use crate::ga::FitnessWeights;
    use crate::models::{ServerSnapshot, TaskSpec};

    fn two_server_scenario() -> Vec<Cluster> {
        // S1 can host both tasks exactly; S2 only the smaller one
        vec![Cluster::new(
            "C1",
            vec![
                ServerSnapshot::new("S1", 10.0, 0.0, 0.0, 0.0)
                    .with_task(TaskSpec::new("D1", "t1", 6.0)),
                ServerSnapshot::new("S2", 5.0, 0.0, 0.0, 0.0)
                    .with_task(TaskSpec::new("D2", "t2", 4.0)),
            ],
        )]
    }

    #[test]
    fn test_end_to_end_scenario() {
        let clusters = two_server_scenario();
        let config = GaConfig::default()
            .with_population_size(4)
            .with_generations(3)
            .with_weights(FitnessWeights::cpu_only())
            .with_seed(42);

        let results = PlacementOptimizer::with_config(config)
            .optimize(&clusters)
            .unwrap();
        assert_eq!(results.len(), 1);
        let result = &results[0];

        // Best chromosome never over-commits any server's pristine CPU
        let best = result.best_chromosome();
        assert_eq!(best.len(), 2);
        for (server_id, cpu) in [("S1", 10.0), ("S2", 5.0)] {
            let used: f64 = best
                .genes
                .iter()
                .filter(|g| g.server_id == server_id)
                .map(|g| g.complexity)
                .sum();
            assert!(used <= cpu, "{server_id} over-committed: {used} > {cpu}");
        }

        // Greedy baseline scores 4.0 (6→S1, 4→S2); elitism keeps at least that
        assert!(result.best_fitness() >= 4.0);
        assert!(result.leader.task_count >= 1);
        assert_eq!(result.population.len(), 4);
        assert_eq!(result.fitness.len(), 4);
        // Initial entry + one per generation
        assert_eq!(result.best_fitness_history.len(), 4);
    }

    #[test]
    fn test_history_is_monotonic() {
        let clusters = two_server_scenario();
        let config = GaConfig::default()
            .with_population_size(6)
            .with_generations(10)
            .with_seed(7);

        let results = PlacementOptimizer::with_config(config)
            .optimize(&clusters)
            .unwrap();
        let history = &results[0].best_fitness_history;
        assert!(history.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let clusters = two_server_scenario();
        let config = GaConfig::default()
            .with_population_size(5)
            .with_generations(4)
            .with_seed(1234);
        let optimizer = PlacementOptimizer::with_config(config);

        let a = optimizer.optimize(&clusters).unwrap();
        let b = optimizer.optimize(&clusters).unwrap();
        assert_eq!(a[0].population, b[0].population);
        assert_eq!(a[0].fitness, b[0].fitness);
        assert_eq!(a[0].leader, b[0].leader);
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let clusters = two_server_scenario();
        let config = GaConfig::default().with_population_size(0);
        let err = PlacementOptimizer::with_config(config)
            .optimize(&clusters)
            .unwrap_err();
        assert!(matches!(err, PlacementError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_task_cluster_fails_leader_election() {
        let clusters = vec![Cluster::new(
            "empty",
            vec![ServerSnapshot::new("S1", 1000.0, 8.0, 8.0, 4.0)],
        )];
        let err = PlacementOptimizer::with_config(GaConfig::default().with_seed(1))
            .optimize(&clusters)
            .unwrap_err();
        assert!(matches!(err, PlacementError::NoCandidate(_)));
    }

    #[test]
    fn test_clusters_are_independent() {
        let mut clusters = two_server_scenario();
        clusters.push(Cluster::new(
            "C2",
            vec![ServerSnapshot::new("S3", 100.0, 4.0, 4.0, 2.0)
                .with_task(TaskSpec::new("D9", "t9", 30.0))],
        ));

        let config = GaConfig::default().with_seed(42).with_generations(2);
        let results = PlacementOptimizer::with_config(config)
            .optimize(&clusters)
            .unwrap();
        assert_eq!(results.len(), 2);
        // No gene references a server from the other cluster
        assert!(results[0]
            .population
            .iter()
            .flat_map(|ch| &ch.genes)
            .all(|g| g.server_id == "S1" || g.server_id == "S2"));
        assert!(results[1]
            .population
            .iter()
            .flat_map(|ch| &ch.genes)
            .all(|g| g.server_id == "S3"));
    }

    #[test]
    fn test_result_serializes() {
        let clusters = two_server_scenario();
        let config = GaConfig::default().with_seed(42).with_generations(1);
        let results = PlacementOptimizer::with_config(config)
            .optimize(&clusters)
            .unwrap();

        let json = serde_json::to_string(&results).unwrap();
        let back: Vec<ClusterResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].cluster_id, "C1");
        assert_eq!(back[0].population, results[0].population);
    }
}
