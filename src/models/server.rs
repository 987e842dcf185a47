//! Server and cluster models.
//!
//! Two server representations coexist and must not be confused:
//!
//! - [`ServerSnapshot`]: the working input shape — capacity already
//!   decremented by the upstream greedy pre-pass, tasks still attached.
//! - [`ServerProfile`]: the pristine scoring profile derived from a
//!   snapshot — the fixed baseline against which every fitness evaluation
//!   is scored. Read-only after extraction.
//!
//! CPU is the only consumable resource in this model; RAM, bandwidth, and
//! throughput are fixed scoring attributes.

use serde::{Deserialize, Serialize};

use super::TaskSpec;

/// A server as delivered by the upstream cluster setup: capacity figures
/// plus any tasks the greedy pre-pass already attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    /// Unique server identifier.
    pub server_id: String,
    /// Remaining CPU budget (MIPS), pre-decremented by attached tasks.
    pub cpu: f64,
    /// RAM (GB). Scoring attribute, never consumed.
    pub ram: f64,
    /// Bandwidth (Mbps). Scoring attribute, never consumed.
    pub bandwidth: f64,
    /// Throughput (MB/s). Scoring attribute, never consumed.
    pub throughput: f64,
    /// Tasks currently attached to this server.
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

/// A server's pristine capacity profile.
///
/// Ground-truth baseline for all fitness comparisons in a run. The `cpu`
/// figure is copied verbatim from the snapshot and never reset to an
/// earlier "full capacity" value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerProfile {
    /// Unique server identifier.
    pub server_id: String,
    /// CPU budget (MIPS).
    pub cpu: f64,
    /// RAM (GB).
    pub ram: f64,
    /// Bandwidth (Mbps).
    pub bandwidth: f64,
    /// Throughput (MB/s).
    pub throughput: f64,
}

/// A named cluster of servers. Clusters are processed independently;
/// no task or chromosome crosses a cluster boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster identifier (e.g., "Cluster 1").
    pub id: String,
    /// Servers in this cluster.
    pub servers: Vec<ServerSnapshot>,
}

impl ServerSnapshot {
    /// Creates a snapshot with no attached tasks.
    pub fn new(server_id: impl Into<String>, cpu: f64, ram: f64, bandwidth: f64, throughput: f64) -> Self {
        Self {
            server_id: server_id.into(),
            cpu,
            ram,
            bandwidth,
            throughput,
            tasks: Vec::new(),
        }
    }

    /// Attaches a task (builder form, used when constructing fixtures).
    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }

    /// Derives the pristine scoring profile, discarding attached tasks.
    pub fn profile(&self) -> ServerProfile {
        ServerProfile {
            server_id: self.server_id.clone(),
            cpu: self.cpu,
            ram: self.ram,
            bandwidth: self.bandwidth,
            throughput: self.throughput,
        }
    }
}

impl ServerProfile {
    /// Creates a profile.
    pub fn new(server_id: impl Into<String>, cpu: f64, ram: f64, bandwidth: f64, throughput: f64) -> Self {
        Self {
            server_id: server_id.into(),
            cpu,
            ram,
            bandwidth,
            throughput,
        }
    }

    /// Whether this server's CPU budget fits a task of the given complexity.
    #[inline]
    pub fn can_host(&self, complexity: f64) -> bool {
        complexity <= self.cpu
    }
}

impl Cluster {
    /// Creates a cluster.
    pub fn new(id: impl Into<String>, servers: Vec<ServerSnapshot>) -> Self {
        Self {
            id: id.into(),
            servers,
        }
    }
}
