//! Node readiness.

use crate::model::{NodeSnapshot, NOT_AVAILABLE};
use crate::records::{ConditionRecord, NodeRecord};

/// A node is ready iff some `Ready` condition has status exactly `"True"`.
///
/// `"Unknown"`, `"False"` and a missing condition all count as not ready.
#[must_use]
pub fn is_ready(conditions: &[ConditionRecord]) -> bool {
    conditions
        .iter()
        .any(|c| c.condition_type == "Ready" && c.status == "True")
}

/// Classify nodes, keeping provider order.
#[must_use]
pub fn classify_nodes(nodes: &[NodeRecord]) -> Vec<NodeSnapshot> {
    nodes
        .iter()
        .map(|node| NodeSnapshot {
            name: node.name.clone(),
            ready: is_ready(&node.conditions),
            cpu_allocatable: node
                .cpu_allocatable
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            memory_allocatable: node
                .memory_allocatable
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        })
        .collect()
}
