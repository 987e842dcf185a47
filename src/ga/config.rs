//! GA run configuration.
//!
//! All parameters are caller-supplied values threaded explicitly through
//! every call — nothing is read from process-wide state.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, PlacementResult};

/// Default per-gene mutation probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.20;

/// Default population size per cluster.
pub const DEFAULT_POPULATION_SIZE: usize = 10;

/// Default number of generations.
pub const DEFAULT_GENERATIONS: usize = 5;

/// Weights on residual/fixed server resources in the fitness function.
///
/// The weights need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Weight on residual CPU capacity.
    pub cpu: f64,
    /// Weight on RAM.
    pub ram: f64,
    /// Weight on bandwidth.
    pub bandwidth: f64,
    /// Weight on throughput.
    pub throughput: f64,
}

impl FitnessWeights {
    /// Creates a weight set.
    pub fn new(cpu: f64, ram: f64, bandwidth: f64, throughput: f64) -> Self {
        Self {
            cpu,
            ram,
            bandwidth,
            throughput,
        }
    }

    /// Weights that score residual CPU only.
    pub fn cpu_only() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }
}

impl Default for FitnessWeights {
    fn default() -> Self {
        // Mix used by the reference dashboard
        Self::new(0.1, 0.3, 0.2, 0.4)
    }
}

/// Configuration for one GA placement run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Chromosomes per cluster population. Must be >= 1.
    pub population_size: usize,
    /// Generations to evolve. Must be >= 1.
    pub generations: usize,
    /// Per-gene mutation probability in [0, 1].
    pub mutation_rate: f64,
    /// Fitness weights.
    pub weights: FitnessWeights,
    /// RNG seed for reproducible runs. `None` = seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            weights: FitnessWeights::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> PlacementResult<()> {
        if self.population_size < 1 {
            return Err(PlacementError::InvalidInput(
                "population_size must be >= 1".into(),
            ));
        }
        if self.generations < 1 {
            return Err(PlacementError::InvalidInput(
                "generations must be >= 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(PlacementError::InvalidInput(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
