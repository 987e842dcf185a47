//! Placement domain models.
//!
//! Core data types for the placement problem and its GA encoding:
//! tasks, servers, clusters, genes, and chromosomes.
//!
//! # Lifecycle
//!
//! Tasks and server profiles are read-only inputs for the duration of one
//! run. Chromosomes are created by population generation, read by fitness
//! evaluation, and replaced wholesale each generation — no chromosome is
//! mutated in place across generations.

mod chromosome;
mod server;
mod task;

pub use chromosome::{Chromosome, Gene};
pub use server::{Cluster, ServerProfile, ServerSnapshot};
pub use task::{PendingTask, TaskSpec};
