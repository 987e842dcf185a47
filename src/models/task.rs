//! Task models.
//!
//! A task is a unit of compute demand generated upstream (e.g., by an IoT
//! device simulator). Its `complexity` is consumed from a server's CPU
//! budget when placed. Tasks are immutable for the duration of a run.

use serde::{Deserialize, Serialize};

/// A compute task pending placement.
///
/// Produced by an upstream device/task source and copied by value into
/// genes; never modified by the GA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Originating device identifier.
    pub device_id: String,
    /// Task name (e.g., "video-encode").
    pub name: String,
    /// CPU demand, consumed from a server's budget. Always positive.
    pub complexity: f64,
}

/// A task extracted from a cluster snapshot, tagged with the server it was
/// attached to by the upstream greedy pre-pass.
///
/// The `orig_server` tag seeds the first chromosome of every initial
/// population, giving the GA a known-reasonable baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTask {
    /// Originating device identifier.
    pub device_id: String,
    /// Task name.
    pub name: String,
    /// CPU demand.
    pub complexity: f64,
    /// Server this task was attached to in the input snapshot.
    pub orig_server: String,
}

impl TaskSpec {
    /// Creates a new task.
    pub fn new(device_id: impl Into<String>, name: impl Into<String>, complexity: f64) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.into(),
            complexity,
        }
    }
}

impl PendingTask {
    /// Tags a task with the server it was extracted from.
    pub fn from_spec(spec: &TaskSpec, orig_server: impl Into<String>) -> Self {
        Self {
            device_id: spec.device_id.clone(),
            name: spec.name.clone(),
            complexity: spec.complexity,
            orig_server: orig_server.into(),
        }
    }
}
