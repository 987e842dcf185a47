//! Genetic-algorithm search over task placements.
//!
//! # Encoding
//!
//! A chromosome holds one gene per task, positionally aligned with the
//! cluster's task list (see [`crate::models::Chromosome`]). Fitness is a
//! weighted residual-resource score against the cluster's pristine server
//! profiles.
//!
//! # Submodules
//!
//! - [`config`]: run parameters and fitness weights
//! - [`population`]: seeded + random initial populations
//! - [`fitness`]: chromosome and population scoring
//! - [`operators`]: roulette selection, two-point crossover, mutation
//! - [`evolution`]: the per-generation evolution step
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod config;
pub mod evolution;
pub mod fitness;
pub mod operators;
pub mod population;

pub use config::{FitnessWeights, GaConfig, DEFAULT_MUTATION_RATE};
pub use evolution::{best_index, evolve_generation, MAX_PARENT_RETRIES};
pub use fitness::{evaluate_chromosome, evaluate_population};
pub use operators::{mutate, roulette_selection, two_point_crossover};
pub use population::{generate_initial_population, random_chromosome, seeded_chromosome};
