//! Chromosome encoding for task placement.
//!
//! # Encoding
//!
//! A chromosome is an ordered sequence of genes, one per task in the
//! cluster's task list and in the same order. Gene *i* always corresponds
//! to task *i*; this positional alignment is what makes two-point
//! crossover between any two chromosomes of the same cluster valid.

use serde::{Deserialize, Serialize};

use super::PendingTask;

/// One task's placement decision.
///
/// `complexity` is duplicated from the originating task for convenience,
/// not re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Originating device identifier.
    pub device_id: String,
    /// Task name.
    pub name: String,
    /// CPU demand of the task.
    pub complexity: f64,
    /// Assigned server.
    pub server_id: String,
}

/// One complete candidate assignment of all tasks to servers.
///
/// Fitness is not stored on the chromosome; it is produced alongside the
/// population as an index-aligned sequence for each evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    /// Genes, positionally aligned with the cluster's task list.
    pub genes: Vec<Gene>,
}

impl Gene {
    /// Creates a gene placing a task on a server.
    pub fn new(task: &PendingTask, server_id: impl Into<String>) -> Self {
        Self {
            device_id: task.device_id.clone(),
            name: task.name.clone(),
            complexity: task.complexity,
            server_id: server_id.into(),
        }
    }
}

impl Chromosome {
    /// Creates a chromosome from genes.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Creates an empty chromosome (degenerate zero-task cluster).
    pub fn empty() -> Self {
        Self { genes: Vec::new() }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether this chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Validates positional alignment against a task list: one gene per
    /// task, in task-list order, with matching identity fields.
    pub fn matches_tasks(&self, tasks: &[PendingTask]) -> bool {
        self.genes.len() == tasks.len()
            && self.genes.iter().zip(tasks).all(|(g, t)| {
                g.device_id == t.device_id && g.name == t.name && g.complexity == t.complexity
            })
    }

    /// Tallies genes per server, preserving first-appearance order.
    ///
    /// The order matters for leader-election tie-breaking: on equal counts
    /// the server that appears first in the chromosome wins.
    pub fn task_counts_by_server(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for gene in &self.genes {
            match counts.iter_mut().find(|(id, _)| *id == gene.server_id) {
                Some((_, n)) => *n += 1,
                None => counts.push((gene.server_id.clone(), 1)),
            }
        }
        counts
    }
}
