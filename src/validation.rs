//! Input validation for placement problems.
//!
//! Checks structural integrity of cluster snapshots before a run.
//! Detects:
//! - Duplicate cluster and server IDs
//! - Non-positive task complexity
//! - Negative capacity figures

use std::collections::HashSet;

use crate::models::Cluster;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task's complexity is zero or negative.
    NonPositiveComplexity,
    /// A server capacity figure is negative.
    NegativeCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates cluster snapshots for a placement run.
///
/// Checks:
/// 1. No duplicate cluster IDs
/// 2. No duplicate server IDs within a cluster
/// 3. All attached tasks have positive complexity
/// 4. No negative capacity figures (cpu, ram, bandwidth, throughput)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_clusters(clusters: &[Cluster]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut cluster_ids = HashSet::new();
    for cluster in clusters {
        if !cluster_ids.insert(cluster.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate cluster ID: {}", cluster.id),
            ));
        }

        let mut server_ids = HashSet::new();
        for srv in &cluster.servers {
            if !server_ids.insert(srv.server_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Duplicate server ID in cluster {}: {}",
                        cluster.id, srv.server_id
                    ),
                ));
            }

            let capacities = [
                ("cpu", srv.cpu),
                ("ram", srv.ram),
                ("bandwidth", srv.bandwidth),
                ("throughput", srv.throughput),
            ];
            for (field, value) in capacities {
                if value < 0.0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NegativeCapacity,
                        format!("Server {} has negative {field}: {value}", srv.server_id),
                    ));
                }
            }

            for task in &srv.tasks {
                if task.complexity <= 0.0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NonPositiveComplexity,
                        format!(
                            "Task {} of device {} has non-positive complexity: {}",
                            task.name, task.device_id, task.complexity
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
