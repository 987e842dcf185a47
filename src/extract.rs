//! Cluster state extraction.
//!
//! Turns a snapshot of clusters (servers with tasks attached by the
//! upstream greedy pre-pass) into the two flat collections the GA works
//! on: tasks pending placement, and pristine server profiles.
//!
//! Pure transform — no side effects, no mutation of the input.

use serde::{Deserialize, Serialize};

use crate::models::{Cluster, PendingTask, ServerProfile};

/// Flattened, cluster-scoped GA input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterState {
    /// Cluster identifier.
    pub cluster_id: String,
    /// Tasks pending placement, tagged with their `orig_server`.
    ///
    /// Order is server order then per-server task order — this order
    /// defines gene positions for every chromosome of the cluster.
    pub tasks: Vec<PendingTask>,
    /// Pristine server profiles. The `cpu` figures are copied verbatim
    /// from the snapshot (already pre-decremented by the greedy pass) and
    /// serve as the scoring baseline for the whole run.
    pub servers: Vec<ServerProfile>,
}

/// Extracts per-cluster GA state from cluster snapshots.
///
/// Tasks are reconstructed from whatever is attached to each server, each
/// tagged with the server it came from. Server capacity is not reset to
/// any earlier "full" value; the snapshot figures are the ground truth.
pub fn extract_state(clusters: &[Cluster]) -> Vec<ClusterState> {
    clusters
        .iter()
        .map(|cluster| {
            let tasks = cluster
                .servers
                .iter()
                .flat_map(|srv| {
                    srv.tasks
                        .iter()
                        .map(|t| PendingTask::from_spec(t, &srv.server_id))
                })
                .collect();
            let servers = cluster.servers.iter().map(|srv| srv.profile()).collect();
            ClusterState {
                cluster_id: cluster.id.clone(),
                tasks,
                servers,
            }
        })
        .collect()
}
