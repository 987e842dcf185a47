//! Greedy assignment pre-pass.
//!
//! Builds the input shape the GA expects from raw task queues: each task
//! is attached to the server with the most remaining CPU that can still
//! host it, and that server's working CPU figure is decremented.
//!
//! This operates on [`ServerSnapshot`] working copies only. The pristine
//! profiles used for fitness scoring are derived afterwards by
//! [`crate::extract::extract_state`], which takes the decremented figures
//! as its baseline — the working state never leaks into scoring.

use crate::models::{Cluster, ServerSnapshot, TaskSpec};

/// Greedily attaches tasks to a cluster's servers.
///
/// For each task in order, the server with the largest remaining CPU is
/// tried; if even that one cannot host the task, the task is returned as
/// unplaced. Placement decrements the snapshot's working CPU.
pub fn assign_greedily(cluster: &mut Cluster, tasks: &[TaskSpec]) -> Vec<TaskSpec> {
    let mut unplaced = Vec::new();
    for task in tasks {
        // First server holding the current CPU maximum
        let target = cluster
            .servers
            .iter_mut()
            .fold(None::<&mut ServerSnapshot>, |best, srv| match best {
                Some(b) if b.cpu >= srv.cpu => Some(b),
                _ => Some(srv),
            });
        match target {
            Some(server) if task.complexity <= server.cpu => {
                server.cpu -= task.complexity;
                server.tasks.push(task.clone());
            }
            _ => unplaced.push(task.clone()),
        }
    }
    unplaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServerSnapshot;

    fn sample_cluster() -> Cluster {
        Cluster::new(
            "C1",
            vec![
                ServerSnapshot::new("S1", 4000.0, 16.0, 10.0, 5.0),
                ServerSnapshot::new("S2", 3000.0, 8.0, 8.0, 4.0),
            ],
        )
    }

    #[test]
    fn test_places_on_largest_remaining_cpu() {
        let mut cluster = sample_cluster();
        let tasks = vec![
            TaskSpec::new("D1", "t1", 1500.0),
            TaskSpec::new("D2", "t2", 1500.0),
        ];
        let unplaced = assign_greedily(&mut cluster, &tasks);
        assert!(unplaced.is_empty());

        // t1 → S1 (4000 → 2500); t2 → S2 now? No: S1 at 2500 < S2 at 3000
        assert_eq!(cluster.servers[0].tasks.len(), 1);
        assert_eq!(cluster.servers[1].tasks.len(), 1);
        assert!((cluster.servers[0].cpu - 2500.0).abs() < 1e-10);
        assert!((cluster.servers[1].cpu - 1500.0).abs() < 1e-10);
    }

    #[test]
    fn test_oversized_task_left_unplaced() {
        let mut cluster = sample_cluster();
        let tasks = vec![TaskSpec::new("D1", "huge", 9000.0)];
        let unplaced = assign_greedily(&mut cluster, &tasks);
        assert_eq!(unplaced.len(), 1);
        assert!(cluster.servers.iter().all(|s| s.tasks.is_empty()));
        // Capacity untouched
        assert!((cluster.servers[0].cpu - 4000.0).abs() < 1e-10);
    }

    #[test]
    fn test_fills_until_saturated() {
        let mut cluster = Cluster::new(
            "C1",
            vec![ServerSnapshot::new("S1", 250.0, 8.0, 8.0, 4.0)],
        );
        let tasks = vec![
            TaskSpec::new("D1", "t1", 100.0),
            TaskSpec::new("D2", "t2", 100.0),
            TaskSpec::new("D3", "t3", 100.0),
        ];
        let unplaced = assign_greedily(&mut cluster, &tasks);
        assert_eq!(cluster.servers[0].tasks.len(), 2);
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].device_id, "D3");
        assert!((cluster.servers[0].cpu - 50.0).abs() < 1e-10);
    }
}
