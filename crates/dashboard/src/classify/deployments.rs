//! Deployment rollout state.

use crate::config::DashboardConfig;
use crate::model::{DeploymentSnapshot, RolloutState};
use crate::records::DeploymentRecord;

/// Rollout state from replica counts.
#[must_use]
pub fn rollout_state(desired: i32, ready: i32, updated: i32) -> RolloutState {
    if ready == desired && updated == desired {
        RolloutState::Ready
    } else if ready > 0 {
        RolloutState::Progressing
    } else {
        RolloutState::NotReady
    }
}

/// Classify deployments outside the excluded namespaces, keeping provider order.
#[must_use]
pub fn classify_deployments(
    deployments: &[DeploymentRecord],
    config: &DashboardConfig,
) -> Vec<DeploymentSnapshot> {
    deployments
        .iter()
        .filter(|d| !config.is_excluded_namespace(&d.namespace))
        .map(|d| {
            // Unset counts are indistinguishable from zero here
            let desired = d.desired_replicas.unwrap_or(0);
            let ready = d.ready_replicas.unwrap_or(0);
            let updated = d.updated_replicas.unwrap_or(0);

            DeploymentSnapshot {
                namespace: d.namespace.clone(),
                name: d.name.clone(),
                desired_replicas: desired,
                ready_replicas: ready,
                updated_replicas: updated,
                rollout_state: rollout_state(desired, ready, updated),
            }
        })
        .collect()
}
