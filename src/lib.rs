//! GA-based task placement for cloud clusters.
//!
//! Solves a one-shot placement problem: given a static batch of compute
//! tasks and a set of servers with finite CPU capacity (plus RAM,
//! bandwidth, and throughput as scoring attributes), find an assignment
//! of tasks to servers that maximizes a weighted resource-fitness score,
//! using genetic-algorithm search rather than exact optimization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TaskSpec`, `ServerSnapshot`,
//!   `ServerProfile`, `Cluster`, `Gene`, `Chromosome`
//! - **`extract`**: Flattens cluster snapshots into GA state (pending
//!   tasks + pristine server profiles)
//! - **`ga`**: Encoding, fitness, selection, crossover, mutation, and the
//!   per-generation evolution step
//! - **`leader`**: Elects the busiest server of the best chromosome
//! - **`optimizer`**: `PlacementOptimizer` — the full pipeline
//! - **`prepass`**: Greedy first-fit assignment producing the expected
//!   input shape
//! - **`validation`**: Input integrity checks (duplicate IDs, capacity
//!   and complexity ranges)
//!
//! # Architecture
//!
//! Clusters are processed independently; within a cluster, generations
//! are strictly sequential. Every stochastic operator takes its RNG
//! explicitly, so seeded runs are fully reproducible.
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"

pub mod error;
pub mod extract;
pub mod ga;
pub mod leader;
pub mod models;
pub mod optimizer;
pub mod prepass;
pub mod validation;

pub use error::{PlacementError, PlacementResult};
pub use optimizer::{ClusterResult, PlacementOptimizer};
